//! Error types for the example-orders crate.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while shaping or generating an order batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The first order date falls after the last order date.
    #[error("invalid date range: {first} is after {last}")]
    InvalidDateRange {
        /// Earliest permitted order date.
        first: NaiveDate,
        /// Latest permitted order date.
        last: NaiveDate,
    },

    /// The amount bounds are negative or inverted.
    #[error("invalid amount range: {min_cents}..={max_cents} cents")]
    InvalidAmountRange {
        /// Lower bound in cents.
        min_cents: i64,
        /// Upper bound in cents.
        max_cents: i64,
    },

    /// The customer identifier bounds are non-positive or inverted.
    #[error("invalid customer id range: {min}..={max}")]
    InvalidCustomerIdRange {
        /// Lower bound.
        min: i32,
        /// Upper bound.
        max: i32,
    },

    /// A drawn day offset could not be represented as a calendar date.
    #[error("date offset {offset_days} from {first} is out of range")]
    DateOutOfRange {
        /// Start of the configured range.
        first: NaiveDate,
        /// Offset in days that overflowed.
        offset_days: u64,
    },
}
