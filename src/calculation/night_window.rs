//! Clock-hour normalisation and night-window membership.

use rust_decimal::Decimal;

use crate::config::SurchargeThresholds;

/// Hours in one wall-clock day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Maps an absolute hour onto the wall clock, in `[0, 24)`.
///
/// Works for hours past the first day and for negative hours alike.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::clock_hour;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clock_hour(Decimal::new(455, 1)), Decimal::new(215, 1));
/// assert_eq!(clock_hour(Decimal::from(-2)), Decimal::from(22));
/// assert_eq!(clock_hour(Decimal::from(48)), Decimal::ZERO);
/// ```
pub fn clock_hour(absolute_hour: Decimal) -> Decimal {
    let rem = absolute_hour % HOURS_PER_DAY;
    if rem.is_zero() {
        Decimal::ZERO
    } else if rem < Decimal::ZERO {
        rem + HOURS_PER_DAY
    } else {
        rem
    }
}

/// Whether a clock hour falls inside the configured night window.
///
/// A window whose start is after its end wraps midnight and is the union of
/// `[start, 24)` and `[0, end)`, tested as `clock >= start || clock < end`.
/// Otherwise it is the same-day span `[start, end)`, empty when both bounds
/// are equal.
///
/// Note this departs from applying the single OR test to every window: that
/// test would treat a same-day window such as 0 to 6 as covering the whole
/// day, and equal bounds as all night. Wrapping windows (21 to 6, 19 to 6)
/// give identical results either way.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::is_night;
/// use surcharge_engine::config::SurchargeThresholds;
/// use rust_decimal::Decimal;
///
/// let thresholds = SurchargeThresholds::new(
///     Decimal::from(10),
///     Decimal::from(21),
///     Decimal::from(6),
/// ).unwrap();
///
/// assert!(is_night(Decimal::from(23), &thresholds));
/// assert!(is_night(Decimal::from(2), &thresholds));
/// assert!(!is_night(Decimal::from(6), &thresholds));
/// assert!(!is_night(Decimal::new(205, 1), &thresholds));
/// ```
pub fn is_night(clock_hour: Decimal, thresholds: &SurchargeThresholds) -> bool {
    let start = thresholds.night_start_hour();
    let end = thresholds.night_end_hour();
    if thresholds.night_wraps_midnight() {
        clock_hour >= start || clock_hour < end
    } else {
        clock_hour >= start && clock_hour < end
    }
}
