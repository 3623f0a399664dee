//! Order entity and its validation rules.
//!
//! Orders are created once with a store-assigned [`OrderId`] and never
//! mutated afterwards. Inbound data arrives as a loosely typed
//! [`OrderDraft`]; converting it into a [`NewOrder`] applies every field
//! constraint, so a `NewOrder` in hand is always safe to persist.
//!
//! The rules apply on write only. Rows already in the store may predate
//! them, so [`Order::from_stored`] accepts stored values as they are.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

use super::Error;

/// Request field carrying the customer identifier.
pub const FIELD_CUSTOMER_ID: &str = "customer_id";
/// Request field carrying the order date.
pub const FIELD_ORDER_DATE: &str = "order_date";
/// Request field carrying the order amount.
pub const FIELD_AMOUNT: &str = "amount";
/// Request field carrying the order status.
pub const FIELD_STATUS: &str = "status";

/// Message returned when any required field is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Calendar date format accepted for `order_date`.
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fractional digits stored for amounts.
pub const AMOUNT_SCALE: u32 = 2;

/// Exclusive upper bound on amounts, matching `NUMERIC(10,2)`.
const AMOUNT_LIMIT: i64 = 100_000_000;

/// Validation failures raised while building orders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderValidationError {
    /// One or more required fields are absent, `null`, or blank.
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields {
        /// Names of the missing fields, in request order.
        fields: Vec<&'static str>,
    },
    /// The customer identifier is not an integer in `1..=i32::MAX`.
    #[error("customer_id must be a positive integer")]
    InvalidCustomerId { value: String },
    /// The order date is not a `YYYY-MM-DD` calendar date.
    #[error("order_date must be a calendar date formatted YYYY-MM-DD")]
    InvalidOrderDate { value: String },
    /// The amount is not a decimal number.
    #[error("amount must be a decimal number")]
    InvalidAmount { value: String },
    /// The amount is below zero.
    #[error("amount must not be negative")]
    NegativeAmount { value: String },
    /// The amount carries more than two fractional digits.
    #[error("amount must have at most 2 decimal places")]
    AmountPrecision { value: String },
    /// The amount does not fit `NUMERIC(10,2)`.
    #[error("amount must be less than 100000000")]
    AmountOutOfRange { value: String },
    /// The status is not one of the known values.
    #[error("status must be one of Pending, Shipped, Delivered, Cancelled, Returned")]
    InvalidStatus { value: String },
}

impl OrderValidationError {
    /// Field the error refers to, when it refers to exactly one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingFields { .. } => None,
            Self::InvalidCustomerId { .. } => Some(FIELD_CUSTOMER_ID),
            Self::InvalidOrderDate { .. } => Some(FIELD_ORDER_DATE),
            Self::InvalidAmount { .. }
            | Self::NegativeAmount { .. }
            | Self::AmountPrecision { .. }
            | Self::AmountOutOfRange { .. } => Some(FIELD_AMOUNT),
            Self::InvalidStatus { .. } => Some(FIELD_STATUS),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "missing_fields",
            Self::InvalidCustomerId { .. } => "invalid_customer_id",
            Self::InvalidOrderDate { .. } => "invalid_order_date",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::NegativeAmount { .. } => "negative_amount",
            Self::AmountPrecision { .. } => "amount_precision",
            Self::AmountOutOfRange { .. } => "amount_out_of_range",
            Self::InvalidStatus { .. } => "invalid_status",
        }
    }

    /// Offending input value, when the error carries one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::MissingFields { .. } => None,
            Self::InvalidCustomerId { value }
            | Self::InvalidOrderDate { value }
            | Self::InvalidAmount { value }
            | Self::NegativeAmount { value }
            | Self::AmountPrecision { value }
            | Self::AmountOutOfRange { value }
            | Self::InvalidStatus { value } => Some(value.as_str()),
        }
    }
}

impl From<OrderValidationError> for Error {
    fn from(err: OrderValidationError) -> Self {
        // The missing-fields response is a fixed contract with no details.
        let (Some(field), Some(value)) = (err.field(), err.value()) else {
            return Error::invalid_request(err.to_string());
        };
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": field,
            "value": value,
            "code": err.code(),
        }))
    }
}

/// Store-assigned order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(i32);

impl OrderId {
    /// Wrap a raw identifier returned by the store.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer identifier. New orders require at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Wrap an identifier read back from the store without range checks.
    pub const fn from_stored(raw: i32) -> Self {
        Self(raw)
    }

    /// Validate a raw customer identifier.
    pub fn new(raw: i32) -> Result<Self, OrderValidationError> {
        if raw < 1 {
            return Err(OrderValidationError::InvalidCustomerId {
                value: raw.to_string(),
            });
        }
        Ok(Self(raw))
    }

    /// Parse an integer customer identifier from request text.
    pub fn parse(raw: &str) -> Result<Self, OrderValidationError> {
        let invalid = || OrderValidationError::InvalidCustomerId {
            value: raw.to_owned(),
        };
        let wide = i64::from_str(raw).map_err(|_| invalid())?;
        let narrow = i32::try_from(wide).map_err(|_| invalid())?;
        Self::new(narrow).map_err(|_| invalid())
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];

    /// Stored and serialised status name.
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

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status as read back from the store.
///
/// Legacy rows may hold names outside [`OrderStatus`]; those are kept
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoredStatus {
    Known(OrderStatus),
    Unrecognised(String),
}

impl StoredStatus {
    /// Stored status name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognised(raw) => raw,
        }
    }

    /// The known status, if the stored name is one.
    pub const fn known(&self) -> Option<OrderStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognised(_) => None,
        }
    }
}

impl From<String> for StoredStatus {
    fn from(raw: String) -> Self {
        match OrderStatus::from_str(&raw) {
            Ok(status) => Self::Known(status),
            Err(_) => Self::Unrecognised(raw),
        }
    }
}

impl From<OrderStatus> for StoredStatus {
    fn from(status: OrderStatus) -> Self {
        Self::Known(status)
    }
}

impl fmt::Display for StoredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderValidationError::InvalidStatus {
                value: s.to_owned(),
            })
    }
}

/// Order total with exactly two fractional digits.
///
/// [`Amount::new`] and [`Amount::parse`] also require a non-negative value
/// below `NUMERIC(10,2)`'s limit.
///
/// # Examples
/// ```
/// use orders_backend::domain::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::parse("99.9").expect("valid amount");
/// assert_eq!(amount.to_string(), "99.90");
/// assert!(Amount::new(Decimal::new(1_001, 3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Validate a decimal amount and rescale it to two places.
    pub fn new(value: Decimal) -> Result<Self, OrderValidationError> {
        if value.is_zero() {
            return Ok(Self(Decimal::new(0, AMOUNT_SCALE)));
        }
        if value.is_sign_negative() {
            return Err(OrderValidationError::NegativeAmount {
                value: value.to_string(),
            });
        }
        if value.normalize().scale() > AMOUNT_SCALE {
            return Err(OrderValidationError::AmountPrecision {
                value: value.to_string(),
            });
        }
        if value >= Decimal::new(AMOUNT_LIMIT, 0) {
            return Err(OrderValidationError::AmountOutOfRange {
                value: value.to_string(),
            });
        }
        let mut scaled = value;
        scaled.rescale(AMOUNT_SCALE);
        Ok(Self(scaled))
    }

    /// Parse a decimal amount from request text.
    pub fn parse(raw: &str) -> Result<Self, OrderValidationError> {
        let value = Decimal::from_str(raw).map_err(|_| OrderValidationError::InvalidAmount {
            value: raw.to_owned(),
        })?;
        Self::new(value)
    }

    /// Wrap an amount read back from the store without range checks.
    pub fn from_stored(value: Decimal) -> Self {
        let mut scaled = value;
        scaled.rescale(AMOUNT_SCALE);
        Self(scaled)
    }

    /// Decimal value, always at scale 2.
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a `YYYY-MM-DD` order date from request text.
///
/// Month and day must be zero-padded.
pub fn parse_order_date(raw: &str) -> Result<NaiveDate, OrderValidationError> {
    let invalid = || OrderValidationError::InvalidOrderDate {
        value: raw.to_owned(),
    };
    let date = NaiveDate::parse_from_str(raw, ORDER_DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(ORDER_DATE_FORMAT).to_string() != raw {
        return Err(invalid());
    }
    Ok(date)
}

/// Validated order awaiting an identifier from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    customer_id: CustomerId,
    order_date: NaiveDate,
    amount: Amount,
    status: OrderStatus,
}

impl NewOrder {
    /// Assemble an order from already validated parts.
    pub const fn new(
        customer_id: CustomerId,
        order_date: NaiveDate,
        amount: Amount,
        status: OrderStatus,
    ) -> Self {
        Self {
            customer_id,
            order_date,
            amount,
            status,
        }
    }

    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub const fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub const fn amount(&self) -> Amount {
        self.amount
    }

    pub const fn status(&self) -> OrderStatus {
        self.status
    }
}

/// Persisted order.
///
/// Built either from validated fields or from a stored row taken as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    order_date: NaiveDate,
    amount: Amount,
    status: StoredStatus,
}

impl Order {
    /// Attach a store-assigned identifier to validated order fields.
    pub fn new(id: OrderId, fields: NewOrder) -> Self {
        Self {
            id,
            customer_id: fields.customer_id,
            order_date: fields.order_date,
            amount: fields.amount,
            status: fields.status.into(),
        }
    }

    /// Rebuild an order from stored column values without validating them.
    pub fn from_stored(
        id: OrderId,
        customer_id: i32,
        order_date: NaiveDate,
        amount: Decimal,
        status: String,
    ) -> Self {
        Self {
            id,
            customer_id: CustomerId::from_stored(customer_id),
            order_date,
            amount: Amount::from_stored(amount),
            status: status.into(),
        }
    }

    pub const fn id(&self) -> OrderId {
        self.id
    }

    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub const fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub const fn amount(&self) -> Amount {
        self.amount
    }

    pub const fn status(&self) -> &StoredStatus {
        &self.status
    }

    /// First rule a new order with these values would break, if any.
    pub fn validation_error(&self) -> Option<OrderValidationError> {
        if let Err(err) = CustomerId::new(self.customer_id.get()) {
            return Some(err);
        }
        if let Err(err) = Amount::new(self.amount.as_decimal()) {
            return Some(err);
        }
        match &self.status {
            StoredStatus::Known(_) => None,
            StoredStatus::Unrecognised(raw) => Some(OrderValidationError::InvalidStatus {
                value: raw.clone(),
            }),
        }
    }

    /// Whether this order carries exactly the given fields.
    pub fn matches(&self, fields: &NewOrder) -> bool {
        self.customer_id == fields.customer_id
            && self.order_date == fields.order_date
            && self.amount == fields.amount
            && self.status.known() == Some(fields.status)
    }
}

/// Loosely typed order input as received from a client.
///
/// Each field holds the client's textual value. `None`, empty, and
/// whitespace-only values all count as missing; zero does not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_id: Option<String>,
    pub order_date: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|raw| raw.trim()).filter(|raw| !raw.is_empty())
}

impl OrderDraft {
    /// Names of the fields that are absent or blank, in request order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (FIELD_CUSTOMER_ID, self.customer_id.as_ref()),
            (FIELD_ORDER_DATE, self.order_date.as_ref()),
            (FIELD_AMOUNT, self.amount.as_ref()),
            (FIELD_STATUS, self.status.as_ref()),
        ]
        .into_iter()
        .filter(|(_, value)| present(*value).is_none())
        .map(|(field, _)| field)
        .collect()
    }
}

impl TryFrom<OrderDraft> for NewOrder {
    type Error = OrderValidationError;

    /// Checks presence of every field before validating any value.
    fn try_from(draft: OrderDraft) -> Result<Self, Self::Error> {
        let (Some(customer_id), Some(order_date), Some(amount), Some(status)) = (
            present(draft.customer_id.as_ref()),
            present(draft.order_date.as_ref()),
            present(draft.amount.as_ref()),
            present(draft.status.as_ref()),
        ) else {
            return Err(OrderValidationError::MissingFields {
                fields: draft.missing_fields(),
            });
        };

        Ok(NewOrder::new(
            CustomerId::parse(customer_id)?,
            parse_order_date(order_date)?,
            Amount::parse(amount)?,
            OrderStatus::from_str(status)?,
        ))
    }
}
