//! Wallet ledger console for game top-up / PPOB reseller accounts.
//!
//! Provides typed models and an async REST client for a platform wallet
//! (balance snapshot plus mutation history), pure ledger reconciliation
//! over the fetched window (aggregates, balance-chain validation,
//! filtering and pagination), and a Ratatui dashboard on top.

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod ledger;
pub mod models;
pub mod money;
pub mod tui;

pub use error::{DompetError, Result};
