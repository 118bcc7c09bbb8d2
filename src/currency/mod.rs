use std::fmt;

/// A currency identified by its name (usually an ISO 4217 code) and display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

impl Currency {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Builds a currency from its code, looking up the display symbol.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        let symbol = symbol_for(&code);
        Self::new(code, symbol)
    }

    pub fn usd() -> Self {
        Self::from_code("USD")
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

/// A monetary value tied to the currency it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub value: f64,
    pub currency: Currency,
}

impl Price {
    pub fn new(value: f64, currency: Currency) -> Self {
        Self { value, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }
}

/// Renders the symbol followed by the value: whole numbers without decimals,
/// everything else with a single decimal digit.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = if self.value.fract() == 0.0 { 0 } else { 1 };
        write!(f, "{}{:.*}", self.currency.symbol, precision, self.value)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(value: f64) -> Price {
        Price::new(value, Currency::usd())
    }

    #[test]
    fn whole_values_render_without_decimals() {
        assert_eq!(dollars(5.0).to_string(), "$5");
        assert_eq!(dollars(0.0).to_string(), "$0");
        assert_eq!(dollars(5405.0).to_string(), "$5405");
    }

    #[test]
    fn fractional_values_render_one_decimal() {
        assert_eq!(dollars(3.2).to_string(), "$3.2");
        assert_eq!(dollars(0.5).to_string(), "$0.5");
        assert_eq!(dollars(-2.5).to_string(), "$-2.5");
    }

    #[test]
    fn negative_whole_values_keep_the_sign() {
        assert_eq!(dollars(-650.0).to_string(), "$-650");
    }

    #[test]
    fn currencies_compare_structurally() {
        assert_eq!(Currency::usd(), Currency::new("USD", "$"));
        assert_ne!(Currency::new("USD", "$"), Currency::new("USD", "US$"));
    }

    #[test]
    fn from_code_normalizes_and_falls_back_to_code() {
        assert_eq!(Currency::from_code(" eur "), Currency::new("EUR", "€"));
        assert_eq!(Currency::from_code("CHF"), Currency::new("CHF", "CHF"));
    }
}
