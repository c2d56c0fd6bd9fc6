//! Field extractors for single-receipt text: merchant, total, tax, date and
//! line items, each an independent best-effort heuristic. Nothing here
//! returns an error; undetected fields come back zero/empty.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::models::{ExtractedReceiptData, LineItem};

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pat).expect("invalid regex literal"))
        }
    };
}

// Label + optional currency symbol + decimal number. "Subtotal" matches the
// total pattern too, which is why the maximum across the document wins.
re!(total_re, r"(?i)(?:total|amount|sum)\s*:?\s*\$?\s*(\d+(?:\.\d{1,2})?)");
re!(tax_re, r"(?i)(?:tax|vat|gst)\s*:?\s*\$?\s*(\d+(?:\.\d{1,2})?)");

// Three date families, tried in this order per line.
re!(date_dmy_re, r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b");
re!(date_ymd_re, r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b");
re!(
    date_text_re,
    r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b"
);

// Item lines require a true decimal price; labeled amounts above may be bare
// integers. A bare trailing integer (a year, a street number) is too weak a
// signal to call a price.
re!(item_re, r"^(.+?)\s+\$?(\d+\.\d{1,2})\s*$");

/// Split raw decoder output into trimmed, non-empty lines. Empty input
/// yields an empty stream, never an error.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Receipt convention: the merchant name is the first printed line.
pub fn extract_merchant_name(lines: &[&str]) -> String {
    lines.first().map_or_else(String::new, |l| l.to_string())
}

/// Largest value across every total/amount/sum match in the document.
/// Receipts repeat subtotal and total; the grand total is the maximum.
pub fn extract_total_amount(lines: &[&str]) -> f64 {
    let mut total = 0.0f64;
    for line in lines {
        for caps in total_re().captures_iter(line) {
            if let Ok(value) = caps[1].parse::<f64>() {
                if value > total {
                    total = value;
                }
            }
        }
    }
    total
}

/// First tax/vat/gst match wins and stops the scan. Unlike the total this is
/// first-wins, not max-wins; the asymmetry is intentional.
pub fn extract_tax_amount(lines: &[&str]) -> f64 {
    for line in lines {
        if let Some(caps) = tax_re().captures(line) {
            if let Ok(value) = caps[1].parse::<f64>() {
                return value;
            }
        }
    }
    0.0
}

fn month_number(prefix: &str) -> Option<u32> {
    let n = match prefix.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}

/// Parse a bare numeric date token (D/M/Y or Y/M/D, slash or dash).
/// Shared with the transaction-history row parser.
pub(crate) fn parse_numeric_date(token: &str) -> Option<NaiveDate> {
    if let Some(caps) = date_dmy_re().captures(token) {
        let d: u32 = caps[1].parse().ok()?;
        let m: u32 = caps[2].parse().ok()?;
        let y: i32 = caps[3].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            return Some(date);
        }
    }
    if let Some(caps) = date_ymd_re().captures(token) {
        let y: i32 = caps[1].parse().ok()?;
        let m: u32 = caps[2].parse().ok()?;
        let d: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }
    None
}

/// First line whose captured date text parses into a valid calendar date
/// wins and stops the whole scan. Families per line: numeric D-M-Y, numeric
/// Y-M-D, then textual "Month D, Y"; an invalid capture falls through to the
/// next family or line.
pub fn extract_date(lines: &[&str]) -> Option<NaiveDate> {
    for line in lines {
        if let Some(caps) = date_dmy_re().captures(line) {
            let parsed = (
                caps[1].parse::<u32>(),
                caps[2].parse::<u32>(),
                caps[3].parse::<i32>(),
            );
            if let (Ok(d), Ok(m), Ok(y)) = parsed {
                if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                    return Some(date);
                }
            }
        }
        if let Some(caps) = date_ymd_re().captures(line) {
            let parsed = (
                caps[1].parse::<i32>(),
                caps[2].parse::<u32>(),
                caps[3].parse::<u32>(),
            );
            if let (Ok(y), Ok(m), Ok(d)) = parsed {
                if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                    return Some(date);
                }
            }
        }
        if let Some(caps) = date_text_re().captures(line) {
            let month = month_number(&caps[1]);
            let parsed = (caps[2].parse::<u32>(), caps[3].parse::<i32>());
            if let (Some(m), (Ok(d), Ok(y))) = (month, parsed) {
                if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                    return Some(date);
                }
            }
        }
    }
    None
}

/// Lines carrying "total" or "tax" are never items; everything else is tried
/// against "description + optional currency symbol + decimal price". Lines
/// that fail the pattern, or whose description is too short or price is not
/// positive, are discarded without being reported.
pub fn extract_line_items(lines: &[&str]) -> Vec<LineItem> {
    let mut items = Vec::new();
    for line in lines {
        let lower = line.to_lowercase();
        if lower.contains("total") || lower.contains("tax") {
            continue;
        }
        let Some(caps) = item_re().captures(line) else {
            continue;
        };
        let name = caps[1].trim();
        let Ok(price) = caps[2].parse::<f64>() else {
            continue;
        };
        if name.chars().count() > 2 && price > 0.0 {
            items.push(LineItem::new(name, price));
        }
    }
    items
}

/// Run every field extractor over the text and apply the total fallback:
/// an undetected total becomes the sum of item prices when items exist.
pub fn extract_receipt_data(text: &str) -> ExtractedReceiptData {
    let lines = normalize_lines(text);
    let merchant_name = extract_merchant_name(&lines);
    let mut total_amount = extract_total_amount(&lines);
    let tax_amount = extract_tax_amount(&lines);
    let date = extract_date(&lines);
    let items = extract_line_items(&lines);

    if total_amount == 0.0 && !items.is_empty() {
        total_amount = items.iter().map(|i| i.price).sum();
    }

    ExtractedReceiptData {
        merchant_name,
        total_amount,
        tax_amount,
        date,
        items,
    }
}
