//! Wallet balance snapshot model.

use serde::Deserialize;

/// Wallet balance snapshot returned by `GET /wallet/balance`.
///
/// All figures are whole rupiah. A snapshot is immutable once fetched;
/// balance changes happen server-side and are observed only by
/// re-fetching.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BalanceSnapshot {
    /// Total wallet balance.
    pub balance: i64,
    /// Spendable portion of the balance.
    pub available_balance: i64,
    /// Promotional balance granted by the platform.
    #[serde(default)]
    pub bonus_balance: i64,
    /// Amount reserved for transactions pending settlement.
    #[serde(default)]
    pub hold_amount: i64,
}

impl BalanceSnapshot {
    /// Checks the structural invariants a valid snapshot must satisfy.
    ///
    /// Bonus and hold may overlap other accounting categories, so their
    /// sum is not required to equal `balance`; the spendable portion can
    /// never exceed the total and no figure can be negative.
    ///
    /// # Errors
    ///
    /// Returns [`DompetError::Malformed`](crate::DompetError::Malformed)
    /// describing the first violated invariant.
    pub fn validate(&self) -> crate::Result<()> {
        if self.balance < 0
            || self.available_balance < 0
            || self.bonus_balance < 0
            || self.hold_amount < 0
        {
            return Err(crate::DompetError::Malformed(format!(
                "balance snapshot contains negative figures: {self:?}"
            )));
        }
        if self.available_balance > self.balance {
            return Err(crate::DompetError::Malformed(format!(
                "available balance {} exceeds total balance {}",
                self.available_balance, self.balance
            )));
        }
        Ok(())
    }
}
