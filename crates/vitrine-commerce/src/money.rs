//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. Catalog data is authored in major units (reais) and
//! converted on load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Brazilian real, formatted as pt-BR.
    #[default]
    BRL,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Text between the symbol and the digits.
    ///
    /// pt-BR puts a no-break space (U+00A0) after `R$`.
    fn symbol_spacing(&self) -> &'static str {
        match self {
            Currency::BRL => "\u{00a0}",
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Currency::BRL => '.',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Currency::BRL => ',',
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (centavos for BRL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrine_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(9500.0, Currency::BRL);
    /// assert_eq!(price.amount_cents, 950_000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Shorthand for a BRL amount in reais.
    pub fn brl(reais: f64) -> Self {
        Self::from_decimal(reais, Currency::BRL)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format in the currency's regional style (e.g., "R$ 9.500,00").
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// assert_eq!(Money::brl(9500.0).display(), "R$\u{a0}9.500,00");
    /// ```
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_cents.unsigned_abs();

        let mut out = String::new();
        if self.amount_cents < 0 {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        out.push_str(self.currency.symbol_spacing());
        out.push_str(&self.display_amount_of(abs / divisor, abs % divisor, places));
        out
    }

    /// Format without the symbol (e.g., "9.500,00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_cents.unsigned_abs();
        let digits = self.display_amount_of(abs / divisor, abs % divisor, places);
        if self.amount_cents < 0 {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    fn display_amount_of(&self, whole: u64, fraction: u64, places: u32) -> String {
        let mut out = group_thousands(whole, self.currency.group_separator());
        if places > 0 {
            out.push(self.currency.decimal_separator());
            out.push_str(&format!("{:0width$}", fraction, width = places as usize));
        }
        out
    }

    /// Multiply by a decimal factor, rounding to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Serde adapter storing a BRL [`Money`] as a major-unit number
/// (`9500` or `9500.5`), the way catalog files are authored.
pub mod brl_decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::BRL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999, Currency::BRL);
        assert_eq!(m.amount_cents, 4999);
        assert_eq!(m.currency, Currency::BRL);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::BRL);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::brl(12100.0);
        assert_eq!(m.amount_cents, 1_210_000);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999, Currency::BRL);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_brl_display() {
        assert_eq!(Money::brl(9500.0).display(), "R$\u{a0}9.500,00");
        assert_eq!(Money::brl(970.0).display(), "R$\u{a0}970,00");
        assert_eq!(Money::brl(1234567.891).display(), "R$\u{a0}1.234.567,89");
        assert_eq!(Money::brl(0.05).display(), "R$\u{a0}0,05");
    }

    #[test]
    fn test_brl_display_is_stable() {
        let price = Money::brl(9500.0);
        let first = price.display();
        for _ in 0..3 {
            assert_eq!(price.display(), first);
        }
        assert_eq!(price.to_string(), first);
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Money::brl(-1500.0).display(), "-R$\u{a0}1.500,00");
        assert_eq!(Money::brl(-1500.0).display_amount(), "-1.500,00");
    }

    #[test]
    fn test_money_as_set_key() {
        use std::collections::HashSet;
        let prices: HashSet<Money> = [Money::brl(970.0), Money::brl(970.0), Money::brl(1100.0)]
            .into_iter()
            .collect();
        assert_eq!(prices.len(), 2);
        assert!(prices.contains(&Money::new(97_000, Currency::BRL)));
    }

    #[test]
    fn test_money_multiply_decimal() {
        let m = Money::brl(9500.0);
        assert_eq!(m.multiply_decimal(1.2), Money::brl(11400.0));
        assert_eq!(m.multiply_decimal(1.3), Money::brl(12350.0));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("BRL"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("brl"), Some(Currency::BRL));
        assert_eq!(Currency::from_code("USD"), None);
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(123456789, ','), "123,456,789");
    }
}
