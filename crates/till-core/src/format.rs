//! # Price Formatting
//!
//! Discount descriptions embed a price ("2 for 8.00"), so the engine needs
//! a numeric-to-text conversion. It is kept behind a small trait and passed
//! into the teller rather than baked in as global locale state; receipt
//! rendering layers are free to plug in their own.

/// Converts a monetary amount to display text for discount descriptions
pub trait PriceFormatter {
    /// Format `amount` for display
    fn format_price(&self, amount: f64) -> String;
}

/// Default formatter: two decimal places with `,` thousands grouping,
/// e.g. `1234.5` becomes `"1,234.50"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedFormatter;

impl PriceFormatter for GroupedFormatter {
    fn format_price(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        format!("{sign}{grouped}.{frac_part}")
    }
}
