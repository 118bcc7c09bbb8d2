use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    currency::{symbol_for, Currency},
    errors::ShopError,
};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "SHOP_CORE_CONFIG";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub currency: Currency,
    pub show_prices: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Currency::usd(),
            show_prices: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    currency: Option<RawCurrency>,
    show_prices: bool,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    name: String,
    #[serde(default)]
    symbol: Option<String>,
}

impl Config {
    /// Uses the file named by `SHOP_CORE_CONFIG` when set, the defaults otherwise.
    pub fn resolve() -> Result<Self, ShopError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load_from(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ShopError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), currency = %config.currency.name, "configuration loaded");
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self, ShopError> {
        let raw: RawConfig = serde_json::from_str(data)?;
        let currency = match raw.currency {
            Some(raw_currency) => currency_from_raw(raw_currency)?,
            None => Currency::usd(),
        };
        Ok(Self {
            currency,
            show_prices: raw.show_prices,
        })
    }
}

fn currency_from_raw(raw: RawCurrency) -> Result<Currency, ShopError> {
    let name = raw.name.trim().to_uppercase();
    if name.is_empty() {
        return Err(ShopError::Config("currency name must not be empty".into()));
    }
    let symbol = match raw.symbol {
        Some(symbol) if symbol.trim().is_empty() => {
            return Err(ShopError::Config(format!(
                "currency `{}` has an empty symbol",
                name
            )))
        }
        Some(symbol) => symbol.trim().to_string(),
        None => symbol_for(&name),
    };
    Ok(Currency::new(name, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn symbol_is_looked_up_when_omitted() {
        let config = Config::from_json(r#"{"currency": {"name": "gbp"}}"#).unwrap();
        assert_eq!(config.currency, Currency::new("GBP", "£"));
        assert!(!config.show_prices);
    }

    #[test]
    fn explicit_symbol_wins() {
        let config =
            Config::from_json(r#"{"currency": {"name": "USD", "symbol": "US$"}, "show_prices": true}"#)
                .unwrap();
        assert_eq!(config.currency, Currency::new("USD", "US$"));
        assert!(config.show_prices);
    }

    #[test]
    fn empty_symbol_is_rejected() {
        let err = Config::from_json(r#"{"currency": {"name": "USD", "symbol": " "}}"#).unwrap_err();
        assert!(matches!(err, ShopError::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let err = Config::from_json("{ currency").unwrap_err();
        assert!(matches!(err, ShopError::Serde(_)));
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"currency": {{"name": "EUR"}}}}"#).unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.currency, Currency::new("EUR", "€"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ShopError::Io(_)));
    }
}
