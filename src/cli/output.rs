use std::io::Write;

use crate::errors::ShopError;
use crate::shop::{CurrencyTotals, Shop};

/// Lists every catalog product with its unit price.
pub fn print_prices<W: Write>(shop: &Shop, out: &mut W) -> Result<(), ShopError> {
    writeln!(out, "Prices:")?;
    for product in shop.products() {
        writeln!(out, "{}: {}", product.name, product.price)?;
    }
    Ok(())
}

/// Prints the revenue of each product followed by the income per currency.
pub fn print_revenue<W: Write>(shop: &Shop, out: &mut W) -> Result<CurrencyTotals, ShopError> {
    writeln!(out, "Earned amount:")?;
    let income = shop.print_income(out)?;
    write_totals(out, "Income", &income)?;
    Ok(income)
}

/// Prints income minus expenses per currency.
pub fn print_net_income<W: Write>(shop: &Shop, out: &mut W) -> Result<CurrencyTotals, ShopError> {
    let net = shop.net_income();
    write_totals(out, "Net income", &net)?;
    Ok(net)
}

/// `<label>:` after a blank line, each currency entry prefixed by a space.
fn write_totals<W: Write>(out: &mut W, label: &str, totals: &CurrencyTotals) -> Result<(), ShopError> {
    write!(out, "\n{label}:")?;
    for price in totals.prices() {
        write!(out, " {price}")?;
    }
    writeln!(out)?;
    Ok(())
}
