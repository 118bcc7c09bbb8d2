pub mod catalog;
pub mod totals;

use std::io::{self, Write};

use crate::currency::{Currency, Price};

pub use catalog::{init_shop, reference_catalog, REFERENCE_SALES};
pub use totals::CurrencyTotals;

/// An item on sale together with its unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: Price,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Revenue accumulated for one product. The total stays in the product's currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Earnings {
    product: Product,
    total: Price,
}

impl Earnings {
    pub fn new(product: Product) -> Self {
        let total = Price::zero(product.price.currency.clone());
        Self { product, total }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn total(&self) -> &Price {
        &self.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub name: String,
    pub total: Price,
}

impl Expense {
    pub fn new(name: impl Into<String>, value: f64, currency: Currency) -> Self {
        Self {
            name: name.into(),
            total: Price::new(value, currency),
        }
    }
}

/// The shop's catalog with its revenue accumulators and recorded expenses.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    earnings: Vec<Earnings>,
    expenses: Vec<Expense>,
}

impl Shop {
    /// Creates one zeroed accumulator per distinct product, in the given order.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut earnings: Vec<Earnings> = Vec::new();
        for product in products {
            if earnings.iter().any(|entry| entry.product == product) {
                tracing::warn!(product = %product.name, "duplicate catalog entry ignored");
                continue;
            }
            earnings.push(Earnings::new(product));
        }
        Self {
            earnings,
            expenses: Vec::new(),
        }
    }

    pub fn earnings(&self) -> &[Earnings] {
        &self.earnings
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.earnings.iter().map(Earnings::product)
    }

    /// Records `amount` units of `product` as sold.
    ///
    /// Returns `false` without touching any total when the amount is below one
    /// or the product is not part of the catalog.
    pub fn sell(&mut self, product: &Product, amount: i64) -> bool {
        if amount < 1 {
            tracing::debug!(product = %product.name, amount, "ignoring non-positive sale");
            return false;
        }
        match self
            .earnings
            .iter_mut()
            .find(|entry| &entry.product == product)
        {
            Some(entry) => {
                entry.total.value += product.price.value * amount as f64;
                tracing::debug!(product = %product.name, amount, total = entry.total.value, "sale recorded");
                true
            }
            None => {
                tracing::debug!(product = %product.name, "sale for unknown product ignored");
                false
            }
        }
    }

    pub fn add_expense(&mut self, expense: Expense) {
        tracing::debug!(expense = %expense.name, value = expense.total.value, "expense recorded");
        self.expenses.push(expense);
    }

    /// Earnings summed per currency.
    pub fn income(&self) -> CurrencyTotals {
        self.earnings
            .iter()
            .map(|entry| entry.total.clone())
            .collect()
    }

    /// Same totals as [`Shop::income`], writing `<product>: <total>` for each
    /// entry as it is aggregated.
    pub fn print_income<W: Write>(&self, out: &mut W) -> io::Result<CurrencyTotals> {
        let mut income = CurrencyTotals::new();
        for entry in &self.earnings {
            writeln!(out, "{}: {}", entry.product.name, entry.total)?;
            income.add(&entry.total);
        }
        Ok(income)
    }

    /// Expenses summed per currency.
    pub fn outcome(&self) -> CurrencyTotals {
        self.expenses
            .iter()
            .map(|expense| expense.total.clone())
            .collect()
    }

    pub fn net_income(&self) -> CurrencyTotals {
        CurrencyTotals::net(&self.income(), &self.outcome())
    }
}
