//! Rupiah display formatting.
//!
//! Wallet amounts are whole rupiah (no minor units) carried as `i64`.
//! Formatting only ever sees non-negative values: direction is conveyed
//! separately by the mutation kind, so a negative amount reaching this
//! module is an upstream bug and is reported as a typed error instead
//! of being rendered.

use std::fmt;

/// Digit-grouping locale for formatted amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// Indonesian grouping: `Rp 1.000.000`.
    #[default]
    IdId,
    /// English grouping: `Rp 1,000,000`.
    EnUs,
}

impl Locale {
    /// Parses a BCP 47 language tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "id" | "id-ID" => Some(Self::IdId),
            "en" | "en-US" => Some(Self::EnUs),
            _ => None,
        }
    }

    fn separator(self) -> char {
        match self {
            Self::IdId => '.',
            Self::EnUs => ',',
        }
    }
}

/// Reason an amount could not be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// The caller passed a negative amount.
    Negative { amount: i64 },
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { amount } => {
                write!(f, "cannot format negative amount {amount}")
            }
        }
    }
}

impl std::error::Error for AmountError {}

/// Formats a whole-rupiah amount with locale digit grouping.
///
/// Stable: the same input always yields the same output.
///
/// # Errors
///
/// Returns [`AmountError::Negative`] for `amount < 0`.
pub fn format(amount: i64, locale: Locale) -> Result<String, AmountError> {
    if amount < 0 {
        return Err(AmountError::Negative { amount });
    }

    let digits = amount.to_string();
    let separator = locale.separator();
    let mut out = String::with_capacity(3 + digits.len() + digits.len() / 3);
    out.push_str("Rp ");
    for (i, c) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    Ok(out)
}

/// Formats with the default `id-ID` grouping.
///
/// # Errors
///
/// Returns [`AmountError::Negative`] for `amount < 0`.
pub fn rupiah(amount: i64) -> Result<String, AmountError> {
    format(amount, Locale::IdId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_without_grouping() {
        assert_eq!(rupiah(0).unwrap(), "Rp 0");
    }

    #[test]
    fn groups_millions_with_dots() {
        assert_eq!(rupiah(1_000_000).unwrap(), "Rp 1.000.000");
    }

    #[test]
    fn three_digits_need_no_separator() {
        assert_eq!(rupiah(999).unwrap(), "Rp 999");
    }

    #[test]
    fn four_digits_get_one_separator() {
        assert_eq!(rupiah(2500).unwrap(), "Rp 2.500");
    }

    #[test]
    fn english_locale_uses_commas() {
        assert_eq!(format(1_234_567, Locale::EnUs).unwrap(), "Rp 1,234,567");
    }

    #[test]
    fn negative_amount_is_an_error() {
        assert_eq!(rupiah(-1), Err(AmountError::Negative { amount: -1 }));
    }

    #[test]
    fn formatting_is_idempotent() {
        let first = rupiah(987_654_321).unwrap();
        let second = rupiah(987_654_321).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn locale_tags_parse() {
        assert_eq!(Locale::from_tag("id-ID"), Some(Locale::IdId));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::EnUs));
        assert_eq!(Locale::from_tag("fr-FR"), None);
    }

    #[test]
    fn display_error() {
        let err = AmountError::Negative { amount: -100 };
        assert_eq!(err.to_string(), "cannot format negative amount -100");
    }
}
