//! Shopping cart status.

use serde::{Deserialize, Serialize};

/// The status of a shopping cart in its lifecycle.
///
/// ```text
/// Pending ──► Confirmed
///
/// Cancelled   (no event leads here)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShoppingCartStatus {
    /// Cart is open, product items can come and go.
    #[default]
    Pending,

    /// Cart was finalized (terminal state).
    Confirmed,

    /// Cart was abandoned (terminal state).
    Cancelled,
}

impl ShoppingCartStatus {
    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ShoppingCartStatus::Confirmed | ShoppingCartStatus::Cancelled
        )
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingCartStatus::Pending => "Pending",
            ShoppingCartStatus::Confirmed => "Confirmed",
            ShoppingCartStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for ShoppingCartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
