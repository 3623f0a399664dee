//! Batch shape for synthetic order generation.
//!
//! An [`OrderBatchSpec`] fixes how many orders to draw and the inclusive
//! ranges each field is drawn from. Every constructor validates its bounds,
//! so an `OrderBatchSpec` in hand is always generatable.

use chrono::NaiveDate;

use crate::error::GenerationError;

/// Number of orders produced by a default batch.
pub const DEFAULT_ORDER_COUNT: usize = 100;

/// Smallest customer identifier drawn by default.
pub const DEFAULT_MIN_CUSTOMER_ID: i32 = 1;

/// Largest customer identifier drawn by default.
pub const DEFAULT_MAX_CUSTOMER_ID: i32 = 1000;

/// Smallest amount drawn by default, in cents (10.00).
pub const DEFAULT_MIN_AMOUNT_CENTS: i64 = 1_000;

/// Largest amount drawn by default, in cents (1000.00).
pub const DEFAULT_MAX_AMOUNT_CENTS: i64 = 100_000;

const DEFAULT_FIRST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 1, 1) {
    Some(date) => date,
    None => panic!("2022-01-01 is a valid calendar date"),
};

const DEFAULT_LAST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2023, 12, 31) {
    Some(date) => date,
    None => panic!("2023-12-31 is a valid calendar date"),
};

/// Validated description of an order batch.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use example_orders::OrderBatchSpec;
///
/// let first = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
/// let last = NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date");
/// let spec = OrderBatchSpec::default()
///     .with_count(10)
///     .with_date_range(first, last)
///     .expect("ordered range");
///
/// assert_eq!(spec.count(), 10);
/// assert_eq!(spec.first_date(), first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBatchSpec {
    count: usize,
    first_date: NaiveDate,
    last_date: NaiveDate,
    min_cents: i64,
    max_cents: i64,
    min_customer_id: i32,
    max_customer_id: i32,
}

impl Default for OrderBatchSpec {
    fn default() -> Self {
        Self {
            count: DEFAULT_ORDER_COUNT,
            first_date: DEFAULT_FIRST_DATE,
            last_date: DEFAULT_LAST_DATE,
            min_cents: DEFAULT_MIN_AMOUNT_CENTS,
            max_cents: DEFAULT_MAX_AMOUNT_CENTS,
            min_customer_id: DEFAULT_MIN_CUSTOMER_ID,
            max_customer_id: DEFAULT_MAX_CUSTOMER_ID,
        }
    }
}

impl OrderBatchSpec {
    /// Set the number of orders to generate. Zero yields an empty batch.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Restrict order dates to the inclusive range `first..=last`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidDateRange`] when `first > last`.
    pub fn with_date_range(
        mut self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Self, GenerationError> {
        if first > last {
            return Err(GenerationError::InvalidDateRange { first, last });
        }
        self.first_date = first;
        self.last_date = last;
        Ok(self)
    }

    /// Restrict amounts to the inclusive cent range `min_cents..=max_cents`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidAmountRange`] when the lower bound is
    /// negative or exceeds the upper bound.
    pub const fn with_amount_cents(
        mut self,
        min_cents: i64,
        max_cents: i64,
    ) -> Result<Self, GenerationError> {
        if min_cents < 0 || min_cents > max_cents {
            return Err(GenerationError::InvalidAmountRange {
                min_cents,
                max_cents,
            });
        }
        self.min_cents = min_cents;
        self.max_cents = max_cents;
        Ok(self)
    }

    /// Restrict customer identifiers to the inclusive range `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidCustomerIdRange`] when `min < 1` or
    /// `min > max`.
    pub const fn with_customer_ids(mut self, min: i32, max: i32) -> Result<Self, GenerationError> {
        if min < 1 || min > max {
            return Err(GenerationError::InvalidCustomerIdRange { min, max });
        }
        self.min_customer_id = min;
        self.max_customer_id = max;
        Ok(self)
    }

    /// Number of orders in the batch.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Earliest order date, inclusive.
    #[must_use]
    pub const fn first_date(&self) -> NaiveDate {
        self.first_date
    }

    /// Latest order date, inclusive.
    #[must_use]
    pub const fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    /// Amount bounds in cents, inclusive.
    #[must_use]
    pub const fn amount_cents(&self) -> (i64, i64) {
        (self.min_cents, self.max_cents)
    }

    /// Customer identifier bounds, inclusive.
    #[must_use]
    pub const fn customer_ids(&self) -> (i32, i32) {
        (self.min_customer_id, self.max_customer_id)
    }
}
