//! Surcharge classification.
//!
//! This module partitions a shift into night surcharge, Sunday/holiday
//! surcharge and the four overtime categories. The shift is swept in
//! half-hour slots; each slot is assigned by its start time, so the night
//! window, the ordinary/overtime cutoff and the shift's own bounds never need
//! interval-intersection arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::SurchargeThresholds;
use crate::models::{AuditStep, ShiftInput, SurchargeBreakdown, SurchargeCategory};

use super::night_window::{clock_hour, is_night};

/// Sweep quantum in hours.
pub const SLOT_HOURS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Decimal places every bucket is rounded to.
const RESULT_DECIMAL_PLACES: u32 = 1;

/// The result of a classification together with its audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeClassification {
    /// The category breakdown.
    pub breakdown: SurchargeBreakdown,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Classifies the hours of a shift into surcharge categories.
///
/// Each half-hour slot (the last one clipped to the shift end) is placed by
/// its start:
/// - within the ordinary portion, night slots accrue `rn` and holiday slots
///   accrue `rd`; a night slot on a holiday accrues both
/// - beyond it, the slot goes to exactly one of `hed`, `hen`, `hefd`, `hefn`
///
/// Buckets are rounded to one decimal once, after the sweep.
///
/// # Examples
///
/// ```
/// use surcharge_engine::calculation::classify;
/// use surcharge_engine::config::SurchargeThresholds;
/// use surcharge_engine::models::ShiftInput;
/// use rust_decimal::Decimal;
///
/// let thresholds = SurchargeThresholds::new(
///     Decimal::from(10),
///     Decimal::from(21),
///     Decimal::from(6),
/// ).unwrap();
///
/// // 06:00 to 18:00 on a weekday: two hours of daytime overtime
/// let shift = ShiftInput::new(Decimal::from(6), Decimal::from(12), false).unwrap();
/// let breakdown = classify(&shift, &thresholds);
///
/// assert_eq!(breakdown.hed, Decimal::from(2));
/// assert_eq!(breakdown.rn, Decimal::ZERO);
/// ```
pub fn classify(shift: &ShiftInput, thresholds: &SurchargeThresholds) -> SurchargeBreakdown {
    let start = shift.start_hour();
    let end = shift.end_hour();
    let holiday = shift.is_holiday_or_sunday();

    let mut breakdown = SurchargeBreakdown::default();
    let mut slot_start = start;

    while slot_start < end {
        let slot_end = (slot_start + SLOT_HOURS).min(end);
        let duration = slot_end - slot_start;

        let night = is_night(clock_hour(slot_start), thresholds);
        let ordinary = slot_start - start < thresholds.ordinary_day_hours();

        if ordinary {
            if night {
                breakdown.rn += duration;
            }
            if holiday {
                breakdown.rd += duration;
            }
        } else {
            *breakdown.get_mut(overtime_category(holiday, night)) += duration;
        }

        slot_start = slot_end;
    }

    for category in SurchargeCategory::ALL {
        let hours = breakdown.get_mut(category);
        *hours = hours
            .round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
    }

    breakdown
}

fn overtime_category(holiday: bool, night: bool) -> SurchargeCategory {
    match (holiday, night) {
        (true, true) => SurchargeCategory::Hefn,
        (true, false) => SurchargeCategory::Hefd,
        (false, true) => SurchargeCategory::Hen,
        (false, false) => SurchargeCategory::Hed,
    }
}

/// Classifies a shift and records the decision as an audit step.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::classify_with_audit;
/// use surcharge_engine::config::SurchargeThresholds;
/// use surcharge_engine::models::ShiftInput;
/// use rust_decimal::Decimal;
///
/// let thresholds = SurchargeThresholds::new(
///     Decimal::from(10),
///     Decimal::from(21),
///     Decimal::from(6),
/// ).unwrap();
/// let shift = ShiftInput::new(Decimal::from(22), Decimal::from(8), true).unwrap();
///
/// let result = classify_with_audit(&shift, &thresholds, 3);
/// assert_eq!(result.audit_step.step_number, 3);
/// assert_eq!(result.audit_step.output["rd"], "8");
/// ```
pub fn classify_with_audit(
    shift: &ShiftInput,
    thresholds: &SurchargeThresholds,
    step_number: u32,
) -> SurchargeClassification {
    let breakdown = classify(shift, thresholds);

    let overtime = breakdown.overtime_hours();
    let reasoning = if overtime > Decimal::ZERO {
        format!(
            "{} hour shift exceeds {} ordinary hours by {} hours ({})",
            shift.total_hours().normalize(),
            thresholds.ordinary_day_hours().normalize(),
            overtime.normalize(),
            describe_nonzero(&breakdown)
        )
    } else if breakdown.is_empty() {
        format!(
            "{} hour shift accrues no surcharge",
            shift.total_hours().normalize()
        )
    } else {
        format!(
            "{} hour shift within {} ordinary hours ({})",
            shift.total_hours().normalize(),
            thresholds.ordinary_day_hours().normalize(),
            describe_nonzero(&breakdown)
        )
    };

    let mut output = serde_json::Map::new();
    for (category, hours) in breakdown.iter() {
        output.insert(
            category.code().to_string(),
            serde_json::Value::String(hours.normalize().to_string()),
        );
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "surcharge_classification".to_string(),
        rule_name: "Surcharge Classification".to_string(),
        input: serde_json::json!({
            "start_hour": shift.start_hour().normalize().to_string(),
            "total_hours": shift.total_hours().normalize().to_string(),
            "is_holiday_or_sunday": shift.is_holiday_or_sunday(),
            "ordinary_day_hours": thresholds.ordinary_day_hours().normalize().to_string(),
            "night_start_hour": thresholds.night_start_hour().normalize().to_string(),
            "night_end_hour": thresholds.night_end_hour().normalize().to_string()
        }),
        output: serde_json::Value::Object(output),
        reasoning,
    };

    SurchargeClassification {
        breakdown,
        audit_step,
    }
}

fn describe_nonzero(breakdown: &SurchargeBreakdown) -> String {
    breakdown
        .iter()
        .filter(|(_, hours)| !hours.is_zero())
        .map(|(category, hours)| format!("{}: {}h", category, hours.normalize()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn thresholds_21() -> SurchargeThresholds {
        SurchargeThresholds::new(dec("10"), dec("21"), dec("6")).unwrap()
    }

    fn thresholds_19() -> SurchargeThresholds {
        SurchargeThresholds::new(dec("10"), dec("19"), dec("6")).unwrap()
    }

    fn shift(start: &str, total: &str, holiday: bool) -> ShiftInput {
        ShiftInput::new(dec(start), dec(total), holiday).unwrap()
    }

    fn expected(hed: &str, hen: &str, hefd: &str, hefn: &str, rn: &str, rd: &str) -> SurchargeBreakdown {
        SurchargeBreakdown {
            hed: dec(hed),
            hen: dec(hen),
            hefd: dec(hefd),
            hefn: dec(hefn),
            rn: dec(rn),
            rd: dec(rd),
        }
    }

    // ==========================================================================
    // Pinned scenarios, night window 21:00 to 06:00, 10 ordinary hours
    // ==========================================================================

    #[test]
    fn test_full_day_weekday() {
        let result = classify(&shift("0", "24", false), &thresholds_21());
        assert_eq!(result, expected("11", "3", "0", "0", "6", "0"));
    }

    #[test]
    fn test_day_shift_with_daytime_overtime() {
        let result = classify(&shift("6", "12", false), &thresholds_21());
        assert_eq!(result, expected("2", "0", "0", "0", "0", "0"));
    }

    #[test]
    fn test_full_day_holiday() {
        let result = classify(&shift("0", "24", true), &thresholds_21());
        assert_eq!(result, expected("0", "0", "11", "3", "6", "10"));
    }

    #[test]
    fn test_zero_length_shift() {
        assert!(classify(&shift("13", "0", false), &thresholds_21()).is_empty());
        assert!(classify(&shift("23", "0", true), &thresholds_21()).is_empty());
    }

    #[test]
    fn test_multi_day_wraparound() {
        let result = classify(&shift("20", "28", false), &thresholds_21());
        assert_eq!(result, expected("15", "3", "0", "0", "9", "0"));
    }

    // ==========================================================================
    // Additional boundary behaviour
    // ==========================================================================

    #[test]
    fn test_night_shift_within_ordinary_portion() {
        let result = classify(&shift("22", "8", false), &thresholds_21());
        assert_eq!(result, expected("0", "0", "0", "0", "8", "0"));
    }

    #[test]
    fn test_holiday_night_accrues_rn_and_rd() {
        let result = classify(&shift("22", "8", true), &thresholds_21());
        assert_eq!(result, expected("0", "0", "0", "0", "8", "8"));
    }

    #[test]
    fn test_overtime_running_into_night() {
        let result = classify(&shift("18", "12", false), &thresholds_21());
        assert_eq!(result, expected("0", "2", "0", "0", "7", "0"));
    }

    #[test]
    fn test_holiday_overtime_running_into_night() {
        let result = classify(&shift("18", "12", true), &thresholds_21());
        assert_eq!(result, expected("0", "0", "0", "2", "7", "10"));
    }

    #[test]
    fn test_half_hour_start_touches_night_once() {
        let result = classify(&shift("5.5", "13", false), &thresholds_21());
        assert_eq!(result, expected("3", "0", "0", "0", "0.5", "0"));
    }

    #[test]
    fn test_shift_equal_to_ordinary_day_has_no_overtime() {
        let result = classify(&shift("6", "10", false), &thresholds_21());
        assert_eq!(result.overtime_hours(), Decimal::ZERO);
        assert!(result.is_empty());
    }

    #[test]
    fn test_rd_capped_at_ordinary_day() {
        let result = classify(&shift("23", "10", true), &thresholds_21());
        assert_eq!(result, expected("0", "0", "0", "0", "7", "10"));
    }

    #[test]
    fn test_start_beyond_first_day_matches_normalised_start() {
        let shifted = classify(&shift("44", "12", false), &thresholds_21());
        let base = classify(&shift("20", "12", false), &thresholds_21());
        assert_eq!(shifted, base);
        assert_eq!(shifted, expected("2", "0", "0", "0", "9", "0"));
    }

    #[test]
    fn test_final_slot_is_clipped() {
        // 07:15 for 10.3 hours leaves 0.3 hours of overtime in the last slot
        let result = classify(&shift("7.25", "10.3", false), &thresholds_21());
        assert_eq!(result, expected("0.3", "0", "0", "0", "0", "0"));
    }

    #[test]
    fn test_buckets_rounded_once_to_one_decimal() {
        // 20 minute final slot: 1/3 hour is only rounded after summing
        let total = dec("10") + dec("1") / dec("3");
        let result = classify(
            &ShiftInput::new(dec("6"), total, false).unwrap(),
            &thresholds_21(),
        );
        assert_eq!(result.hed, dec("0.3"));
    }

    // ==========================================================================
    // Legacy 19:00 night window
    // ==========================================================================

    #[test]
    fn test_full_day_weekday_legacy_window() {
        let result = classify(&shift("0", "24", false), &thresholds_19());
        assert_eq!(result, expected("9", "5", "0", "0", "6", "0"));
    }

    #[test]
    fn test_multi_day_wraparound_legacy_window() {
        let result = classify(&shift("20", "28", false), &thresholds_19());
        assert_eq!(result, expected("13", "5", "0", "0", "10", "0"));
    }

    // ==========================================================================
    // Audit step
    // ==========================================================================

    #[test]
    fn test_audit_step_records_input_and_output() {
        let result = classify_with_audit(&shift("0", "24", true), &thresholds_21(), 7);

        assert_eq!(result.breakdown, expected("0", "0", "11", "3", "6", "10"));
        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "surcharge_classification");
        assert_eq!(result.audit_step.input["start_hour"], "0");
        assert_eq!(result.audit_step.input["is_holiday_or_sunday"], true);
        assert_eq!(result.audit_step.input["night_start_hour"], "21");
        assert_eq!(result.audit_step.output["hefd"], "11");
        assert_eq!(result.audit_step.output["hed"], "0");
    }

    #[test]
    fn test_audit_reasoning_for_overtime() {
        let result = classify_with_audit(&shift("6", "12", false), &thresholds_21(), 1);
        assert!(result.audit_step.reasoning.contains("exceeds"));
        assert!(result.audit_step.reasoning.contains("HED: 2h"));
    }

    #[test]
    fn test_audit_reasoning_for_empty_breakdown() {
        let result = classify_with_audit(&shift("8", "8", false), &thresholds_21(), 1);
        assert!(result.audit_step.reasoning.contains("no surcharge"));
    }

    #[test]
    fn test_audit_reasoning_within_ordinary_hours() {
        let result = classify_with_audit(&shift("22", "8", false), &thresholds_21(), 1);
        assert!(result.audit_step.reasoning.contains("within 10 ordinary hours"));
        assert!(result.audit_step.reasoning.contains("RN: 8h"));
    }

    #[test]
    fn test_serialization() {
        let result = classify_with_audit(&shift("6", "12", false), &thresholds_21(), 1);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"hed\":\"2\""));

        let deserialized: SurchargeClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.breakdown.hed, dec("2"));
    }
}
