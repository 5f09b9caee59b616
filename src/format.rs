//! Label and tooltip text.
//!
//! Timestamps are localised with a fixed UTC offset supplied by the host;
//! the crate never reads the system time zone.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::model::{CostSnapshot, Granularity, UsageSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    /// "1:05 PM"
    #[default]
    TwelveHour,
    /// "13:05"
    TwentyFourHour,
}

/// Host-supplied localisation inputs for timestamp labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub clock: ClockFormat,
}

impl LabelConfig {
    /// Offset used for labels; out-of-range offsets fall back to UTC.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix())
    }
}

/// Timestamp rendering used for one granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLabelPattern {
    ShortTimeOfDay,
    WeekdayAbbreviation,
    MonthDay,
    MonthAbbreviation,
}

#[must_use]
pub const fn label_pattern(granularity: Granularity) -> TimeLabelPattern {
    match granularity {
        Granularity::Day => TimeLabelPattern::ShortTimeOfDay,
        Granularity::Week => TimeLabelPattern::WeekdayAbbreviation,
        Granularity::Month => TimeLabelPattern::MonthDay,
        Granularity::Year => TimeLabelPattern::MonthAbbreviation,
    }
}

#[must_use]
pub fn format_timestamp(
    timestamp: DateTime<Utc>,
    pattern: TimeLabelPattern,
    config: LabelConfig,
) -> String {
    let local = timestamp.with_timezone(&config.fixed_offset());
    let format = match (pattern, config.clock) {
        (TimeLabelPattern::ShortTimeOfDay, ClockFormat::TwelveHour) => "%-I:%M %p",
        (TimeLabelPattern::ShortTimeOfDay, ClockFormat::TwentyFourHour) => "%H:%M",
        (TimeLabelPattern::WeekdayAbbreviation, _) => "%a",
        (TimeLabelPattern::MonthDay, _) => "%b %-d",
        (TimeLabelPattern::MonthAbbreviation, _) => "%b",
    };
    local.format(format).to_string()
}

/// "<rounded amount> <unit>", e.g. "12 kWh".
#[must_use]
pub fn format_usage(usage: &UsageSnapshot) -> String {
    format!("{} {}", usage.amount.round() as i64, usage.unit)
}

#[must_use]
pub fn format_cost(cost: &CostSnapshot) -> String {
    format_currency(cost.amount, &cost.currency_code)
}

/// Formats an amount as en-US style currency: "$1,234.50", "-€3.10", "¥120".
///
/// Unknown currency codes are prefixed with the code: "CHF 4.00".
/// Zero keeps its integer digit: "$0.00", not "$.00".
#[must_use]
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let (prefix, fraction_digits) = currency_symbol(currency_code);
    let Some(value) = Decimal::from_f64(amount) else {
        return format!("{prefix}{amount}");
    };
    let mut rounded =
        value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(fraction_digits);

    let text = rounded.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + prefix.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&prefix);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn currency_symbol(currency_code: &str) -> (String, u32) {
    match currency_code.to_ascii_uppercase().as_str() {
        "USD" | "CAD" | "AUD" | "NZD" => ("$".to_owned(), 2),
        "EUR" => ("€".to_owned(), 2),
        "GBP" => ("£".to_owned(), 2),
        "JPY" => ("¥".to_owned(), 0),
        other => (format!("{other} "), 2),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Three-line scrubber tooltip: label, usage, cost.
#[must_use]
pub fn tooltip_text(x_axis_label: &str, usage: &UsageSnapshot, cost: &CostSnapshot) -> String {
    format!(
        "{x_axis_label}\n{}\n{}",
        format_usage(usage),
        format_cost(cost)
    )
}

#[cfg(test)]
mod tests {
    use super::{format_currency, group_thousands};

    #[test]
    fn groups_integer_digits() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(2.125, "USD"), "$2.13");
        assert_eq!(format_currency(-0.004, "USD"), "$0.00");
        assert_eq!(format_currency(-12.5, "EUR"), "-€12.50");
    }
}
