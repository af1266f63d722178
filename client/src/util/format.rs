//! Presentation formatting: PKR currency, counts, rates and durations.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group an integer with thousands separators.
#[must_use]
pub fn format_count(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative { format!("-{grouped}") } else { grouped }
}

/// Monetary amount in PKR, rounded to whole rupees.
#[must_use]
pub fn format_pkr(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    format!("PKR {}", format_count(whole))
}

/// Monetary amount in PKR keeping paisa precision, for per-click rates.
#[must_use]
pub fn format_pkr_exact(amount: f64) -> String {
    format!("PKR {amount:.2}")
}

/// Percentage with one decimal place.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Return-on-ad-spend style multiplier, two decimals.
#[must_use]
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}x")
}

/// Seconds as a compact "3m 5s" duration.
#[must_use]
pub fn format_duration_secs(total: i64) -> String {
    if total < 60 {
        return format!("{total}s");
    }
    let minutes = total / 60;
    let seconds = total % 60;
    if seconds == 0 { format!("{minutes}m") } else { format!("{minutes}m {seconds}s") }
}
