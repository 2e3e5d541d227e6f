//! Reusable UI components.

pub mod help_bar;
pub mod mutations;
pub mod status_bar;
pub mod summary;

use crate::money;

/// Formats a non-negative rupiah amount for display, falling back to
/// the bare number if formatting is refused.
pub(crate) fn rupiah(amount: i64) -> String {
    money::rupiah(amount).unwrap_or_else(|_| amount.to_string())
}

/// Formats a signed figure (the ledger net) with an explicit sign.
/// Direction is presentation here, so the sign is rendered by this
/// layer and the magnitude goes through the normal formatter.
pub(crate) fn signed_rupiah(value: i64) -> String {
    if value < 0 {
        format!("-{}", rupiah(value.saturating_neg()))
    } else {
        format!("+{}", rupiah(value))
    }
}
