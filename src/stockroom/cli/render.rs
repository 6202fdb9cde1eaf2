use colored::Colorize;
use std::io::{self, Write};
use stockroom::api::{DisplayProduct, MessageLevel};
use stockroom::commands::CmdMessage;
use stockroom::config::{CurrencyFormat, SymbolPosition};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// `1) (#1) Cable – 9,99 kr (5 i lager)`
pub(super) fn render_summary(dp: &DisplayProduct, currency: &CurrencyFormat) -> String {
    let handle = dp
        .handle
        .map(|h| h.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}) (#{}) {} – {} ({} i lager)",
        dp.position,
        handle,
        dp.product.name,
        format_price(dp.product.price, currency),
        dp.product.quantity
    )
}

pub(super) fn render_product_list(products: &[DisplayProduct], currency: &CurrencyFormat) -> String {
    products
        .iter()
        .map(|dp| render_summary(dp, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render_detail(dp: &DisplayProduct, currency: &CurrencyFormat) -> String {
    format!(
        "Produkt: {}\nBeskrivning: {}\nPris: {}\nLager: {}",
        dp.product.name,
        dp.product.desc,
        format_price(dp.product.price, currency),
        dp.product.quantity
    )
}

pub(super) fn format_price(amount: f64, currency: &CurrencyFormat) -> String {
    let fixed = format!("{:.*}", currency.decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut number = if currency.grouping {
        group_thousands(int_part, &currency.grouping_separator)
    } else {
        int_part.to_string()
    };
    if let Some(frac) = frac_part {
        number.push_str(&currency.decimal_separator);
        number.push_str(frac);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let space = if currency.symbol_spaced { " " } else { "" };
    match currency.symbol_position {
        SymbolPosition::Before => format!("{}{}{}{}", sign, currency.symbol, space, number),
        SymbolPosition::After => format!("{}{}{}{}", sign, number, space, currency.symbol),
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}
