//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` against a migrated database when the schema changes.

diesel::table! {
    /// Sales orders.
    ///
    /// `order_id` is a `SERIAL` primary key assigned on insert.
    orders (order_id) {
        /// Primary key assigned by the store.
        order_id -> Int4,
        /// Customer placing the order.
        customer_id -> Int4,
        /// Calendar date of the order.
        order_date -> Date,
        /// Order total, `NUMERIC(10,2)`.
        amount -> Numeric,
        /// Fulfilment status (max 20 characters).
        status -> Varchar,
    }
}
