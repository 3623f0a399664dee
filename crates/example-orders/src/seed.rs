//! Generated order seed types.
//!
//! These types mirror the backend's order shape without depending on it.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status drawn for a generated order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusSeed {
    /// Awaiting fulfilment.
    Pending,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled before shipping.
    Cancelled,
    /// Sent back by the customer.
    Returned,
}

impl StatusSeed {
    /// Every status, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];

    /// Status name as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Returned => "Returned",
        }
    }
}

impl fmt::Display for StatusSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated order record, ready for conversion into a domain order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use example_orders::{ExampleOrderSeed, StatusSeed};
/// use rust_decimal::Decimal;
///
/// let order = ExampleOrderSeed {
///     customer_id: 7,
///     order_date: NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date"),
///     amount: Decimal::new(9_990, 2),
///     status: StatusSeed::Pending,
/// };
///
/// assert_eq!(order.amount.to_string(), "99.90");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExampleOrderSeed {
    /// Customer placing the order.
    pub customer_id: i32,
    /// Calendar date of the order.
    pub order_date: NaiveDate,
    /// Order total with exactly two fractional digits.
    pub amount: Decimal,
    /// Fulfilment status.
    pub status: StatusSeed,
}
