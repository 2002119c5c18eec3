//! Utility functions and helpers

use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Format an amount for display, dropping trailing zeros ("400 €", "12.5 €")
pub fn format_amount(amount: Decimal) -> String {
    format!("{} €", amount.normalize())
}

/// Escape text for safe insertion into HTML content or quoted attributes
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique record key
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}{:04x}", millis, seq & 0xffff)
}
