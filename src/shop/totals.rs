use std::collections::BTreeMap;
use std::fmt;

use crate::currency::{Currency, Price};

/// Running sums grouped by currency. Amounts in different currencies are never combined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyTotals(BTreeMap<Currency, f64>);

impl CurrencyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, price: &Price) {
        *self.0.entry(price.currency.clone()).or_insert(0.0) += price.value;
    }

    pub fn get(&self, currency: &Currency) -> Option<f64> {
        self.0.get(currency).copied()
    }

    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.0
            .iter()
            .map(|(currency, value)| Price::new(*value, currency.clone()))
    }

    /// Subtracts `outcome` from `income` for every currency present on either side.
    pub fn net(income: &CurrencyTotals, outcome: &CurrencyTotals) -> CurrencyTotals {
        let mut net = income.clone();
        for (currency, value) in &outcome.0 {
            *net.0.entry(currency.clone()).or_insert(0.0) -= value;
        }
        net
    }
}

impl FromIterator<Price> for CurrencyTotals {
    fn from_iter<I: IntoIterator<Item = Price>>(iter: I) -> Self {
        let mut totals = CurrencyTotals::new();
        for price in iter {
            totals.add(&price);
        }
        totals
    }
}

/// Space-separated formatted entries, one per currency.
impl fmt::Display for CurrencyTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, price) in self.prices().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{price}")?;
        }
        Ok(())
    }
}
