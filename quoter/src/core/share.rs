//! Share/export formatting for a quote

use shared::{Locale, Quote};
use url::Url;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Format an amount as BRL with two decimals and locale digit grouping
pub fn format_currency(value: f64, locale: Locale) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let (group_sep, decimal_sep) = match locale {
        Locale::PtBr => ('.', ','),
        Locale::En => (',', '.'),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("R$ {sign}{grouped}{decimal_sep}{fraction}")
}

fn message_body(quote: &Quote, locale: Locale) -> String {
    let value = format_currency(quote.total_value, locale);
    match locale {
        Locale::PtBr => format!(
            "*Orçamento Concre7*\n\nModelo: {}\nÁrea: {}m²\nQtd Total: {} peças\nValor Total: {}",
            quote.model.name, quote.area, quote.total_pavers, value
        ),
        Locale::En => format!(
            "*Concre7 Quote*\n\nModel: {}\nArea: {}m²\nTotal Qty: {} pieces\nTotal Value: {}",
            quote.model.name, quote.area, quote.total_pavers, value
        ),
    }
}

/// Message for the clipboard, with the app footer
pub fn format_quote_message(quote: &Quote, locale: Locale) -> String {
    let footer = match locale {
        Locale::PtBr => "_Gerado por Concre7 App_",
        Locale::En => "_Generated by Concre7 App_",
    };
    format!("{}\n\n{}", message_body(quote, locale), footer)
}

/// WhatsApp deep link carrying the message (no footer)
pub fn whatsapp_link(quote: &Quote, locale: Locale) -> Result<Url, url::ParseError> {
    Url::parse_with_params(WHATSAPP_BASE, &[("text", message_body(quote, locale))])
}
