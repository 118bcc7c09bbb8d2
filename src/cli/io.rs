use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::currency::Currency;
use crate::errors::ShopError;
use crate::shop::{Expense, Shop};

/// Expense prompts, asked in this order.
pub const EXPENSE_LABELS: [&str; 2] = ["Staff expenses", "Other expenses"];

/// Splits buffered input into whitespace-separated tokens, reading lines on demand.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, ShopError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn parse_amount(label: &str, token: &str) -> Result<f64, ShopError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ShopError::InvalidAmount {
            label: label.to_string(),
            input: token.to_string(),
        }),
    }
}

/// Prompts with `<label>: ` and reads one amount in `currency`.
pub fn read_expense<R: BufRead, W: Write>(
    label: &str,
    currency: &Currency,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<Expense, ShopError> {
    write!(out, "{label}: ")?;
    out.flush()?;
    let token = input.next_token()?.ok_or_else(|| ShopError::MissingInput {
        label: label.to_string(),
    })?;
    let value = parse_amount(label, &token)?;
    Ok(Expense::new(label, value, currency.clone()))
}

/// Reads every expense in [`EXPENSE_LABELS`] and appends it to the shop.
/// Stops at the first unreadable amount.
pub fn collect_expenses<R: BufRead, W: Write>(
    shop: &mut Shop,
    currency: &Currency,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<(), ShopError> {
    for label in EXPENSE_LABELS {
        let expense = read_expense(label, currency, input, out)?;
        shop.add_expense(expense);
    }
    Ok(())
}
