pub mod io;
pub mod output;

use std::io::{stdin, stdout, BufRead, Write};

use crate::{
    config::Config,
    errors::ShopError,
    shop::{init_shop, Shop},
};

use self::io::{collect_expenses, TokenReader};
use self::output::{print_net_income, print_prices, print_revenue};

/// Runs the whole shop day against the given input and output.
///
/// Builds the catalog, reports revenue, asks for the expenses and reports the
/// net income. Returns the final shop state.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<Shop, ShopError> {
    let mut shop = init_shop(&config.currency);
    if config.show_prices {
        print_prices(&shop, out)?;
    }
    print_revenue(&shop, out)?;

    let mut tokens = TokenReader::new(input);
    collect_expenses(&mut shop, &config.currency, &mut tokens, out)?;

    print_net_income(&shop, out)?;
    out.flush()?;
    Ok(shop)
}

/// Entry point used by the binary: console input and output, configuration from the environment.
pub fn run_cli() -> Result<(), ShopError> {
    let config = Config::resolve()?;
    let stdin = stdin();
    let stdout = stdout();
    let mut out = stdout.lock();
    run_session(&config, stdin.lock(), &mut out)?;
    Ok(())
}
