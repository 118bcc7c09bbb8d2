use crate::currency::{Currency, Price};

use super::{Product, Shop};

/// Product names and unit prices of the shop's fixed catalog.
const CATALOG: [(&str, f64); 6] = [
    ("Bubblegum", 2.0),
    ("Toffee", 0.2),
    ("Ice cream", 5.0),
    ("Milk Chocolate", 4.0),
    ("Doughnut", 2.5),
    ("Pancake", 3.2),
];

/// Units sold per product during a run, in catalog order.
pub const REFERENCE_SALES: [(&str, i64); 6] = [
    ("Bubblegum", 101),
    ("Toffee", 590),
    ("Ice cream", 450),
    ("Milk Chocolate", 420),
    ("Doughnut", 430),
    ("Pancake", 25),
];

pub fn reference_catalog(currency: &Currency) -> Vec<Product> {
    CATALOG
        .iter()
        .map(|(name, value)| Product::new(*name, Price::new(*value, currency.clone())))
        .collect()
}

/// Builds the catalog in `currency` and applies the reference sales to it.
pub fn init_shop(currency: &Currency) -> Shop {
    let products = reference_catalog(currency);
    let mut shop = Shop::new(products.clone());
    for (name, amount) in REFERENCE_SALES {
        if let Some(product) = products.iter().find(|product| product.name == name) {
            shop.sell(product, amount);
        }
    }
    tracing::info!(products = shop.earnings().len(), "catalog initialized");
    shop
}
