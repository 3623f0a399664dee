//! Deterministic order generation from a batch spec and seed.
//!
//! The same `(spec, seed)` pair always yields the same batch. Amounts are
//! drawn as whole cents so no floating-point rounding is involved.

use chrono::Days;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use crate::batch::OrderBatchSpec;
use crate::error::GenerationError;
use crate::seed::{ExampleOrderSeed, StatusSeed};

/// Fractional digits carried by generated amounts.
const AMOUNT_SCALE: u32 = 2;

/// Generates `spec.count()` orders using a ChaCha RNG seeded with `seed`.
///
/// Each field is drawn uniformly from the spec's inclusive range:
///
/// - `customer_id` from the customer id bounds
/// - `order_date` from the calendar days between the first and last date
/// - `amount` from the cent bounds, rendered with two decimal places
/// - `status` from the five [`StatusSeed`] values
///
/// # Errors
///
/// Returns [`GenerationError::DateOutOfRange`] if a drawn date cannot be
/// represented, which only happens for ranges touching chrono's limits.
///
/// # Example
///
/// ```
/// use example_orders::{OrderBatchSpec, generate_example_orders};
///
/// let orders = generate_example_orders(&OrderBatchSpec::default(), 7)
///     .expect("generation succeeds");
///
/// assert_eq!(orders.len(), 100);
/// assert!(orders.iter().all(|order| order.amount.scale() == 2));
/// ```
pub fn generate_example_orders(
    spec: &OrderBatchSpec,
    seed: u64,
) -> Result<Vec<ExampleOrderSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span_days = day_span(spec);

    (0..spec.count())
        .map(|_| generate_single_order(&mut rng, spec, span_days))
        .collect()
}

fn day_span(spec: &OrderBatchSpec) -> u64 {
    let days = spec
        .last_date()
        .signed_duration_since(spec.first_date())
        .num_days();
    // `OrderBatchSpec` guarantees first <= last, so the span is never negative.
    u64::try_from(days).unwrap_or(0)
}

fn generate_single_order(
    rng: &mut ChaCha8Rng,
    spec: &OrderBatchSpec,
    span_days: u64,
) -> Result<ExampleOrderSeed, GenerationError> {
    let (min_customer, max_customer) = spec.customer_ids();
    let customer_id = rng.random_range(min_customer..=max_customer);

    let offset_days = rng.random_range(0..=span_days);
    let first = spec.first_date();
    let order_date = first
        .checked_add_days(Days::new(offset_days))
        .ok_or(GenerationError::DateOutOfRange { first, offset_days })?;

    let (min_cents, max_cents) = spec.amount_cents();
    let amount = Decimal::new(rng.random_range(min_cents..=max_cents), AMOUNT_SCALE);

    let status = pick_status(rng);

    Ok(ExampleOrderSeed {
        customer_id,
        order_date,
        amount,
        status,
    })
}

fn pick_status(rng: &mut ChaCha8Rng) -> StatusSeed {
    match rng.random_range(0..5_u8) {
        0 => StatusSeed::Pending,
        1 => StatusSeed::Shipped,
        2 => StatusSeed::Delivered,
        3 => StatusSeed::Cancelled,
        _ => StatusSeed::Returned,
    }
}
