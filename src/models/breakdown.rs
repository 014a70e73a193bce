//! Surcharge breakdown models.
//!
//! This module contains the [`SurchargeBreakdown`] produced by the classifier
//! and the [`SurchargeCategory`] naming each of its buckets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the six pay categories a shift hour can fall into.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::SurchargeCategory;
///
/// assert_eq!(SurchargeCategory::Hefn.code(), "hefn");
/// assert!(SurchargeCategory::Hefn.is_overtime());
/// assert!(!SurchargeCategory::Rn.is_overtime());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeCategory {
    /// Daytime overtime on an ordinary day.
    Hed,
    /// Night overtime on an ordinary day.
    Hen,
    /// Daytime overtime on a Sunday or holiday.
    Hefd,
    /// Night overtime on a Sunday or holiday.
    Hefn,
    /// Night surcharge on ordinary-portion hours.
    Rn,
    /// Sunday/holiday surcharge on ordinary-portion hours.
    Rd,
}

impl SurchargeCategory {
    /// All categories in reporting order.
    pub const ALL: [SurchargeCategory; 6] = [
        SurchargeCategory::Hed,
        SurchargeCategory::Hen,
        SurchargeCategory::Hefd,
        SurchargeCategory::Hefn,
        SurchargeCategory::Rn,
        SurchargeCategory::Rd,
    ];

    /// Short lowercase code used in payroll exports.
    pub fn code(&self) -> &'static str {
        match self {
            SurchargeCategory::Hed => "hed",
            SurchargeCategory::Hen => "hen",
            SurchargeCategory::Hefd => "hefd",
            SurchargeCategory::Hefn => "hefn",
            SurchargeCategory::Rn => "rn",
            SurchargeCategory::Rd => "rd",
        }
    }

    /// Whether the category counts hours beyond the ordinary portion.
    pub fn is_overtime(&self) -> bool {
        matches!(
            self,
            SurchargeCategory::Hed
                | SurchargeCategory::Hen
                | SurchargeCategory::Hefd
                | SurchargeCategory::Hefn
        )
    }
}

impl std::fmt::Display for SurchargeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code().to_uppercase())
    }
}

/// Hours of a single shift split into surcharge categories.
///
/// Overtime buckets partition exactly the hours beyond the ordinary portion.
/// `rn` and `rd` both draw from the ordinary portion and are additive: an
/// ordinary night hour on a holiday counts in each of them.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::{SurchargeBreakdown, SurchargeCategory};
/// use rust_decimal::Decimal;
///
/// let breakdown = SurchargeBreakdown {
///     hed: Decimal::from(11),
///     hen: Decimal::from(3),
///     rn: Decimal::from(6),
///     ..SurchargeBreakdown::default()
/// };
/// assert_eq!(breakdown.overtime_hours(), Decimal::from(14));
/// assert_eq!(breakdown.get(SurchargeCategory::Rn), Decimal::from(6));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeBreakdown {
    /// Daytime overtime hours, non-holiday.
    pub hed: Decimal,
    /// Night overtime hours, non-holiday.
    pub hen: Decimal,
    /// Daytime overtime hours, holiday or Sunday.
    pub hefd: Decimal,
    /// Night overtime hours, holiday or Sunday.
    pub hefn: Decimal,
    /// Night surcharge hours within the ordinary portion.
    pub rn: Decimal,
    /// Sunday/holiday surcharge hours within the ordinary portion.
    pub rd: Decimal,
}

impl SurchargeBreakdown {
    /// Hours in the given category.
    pub fn get(&self, category: SurchargeCategory) -> Decimal {
        match category {
            SurchargeCategory::Hed => self.hed,
            SurchargeCategory::Hen => self.hen,
            SurchargeCategory::Hefd => self.hefd,
            SurchargeCategory::Hefn => self.hefn,
            SurchargeCategory::Rn => self.rn,
            SurchargeCategory::Rd => self.rd,
        }
    }

    pub(crate) fn get_mut(&mut self, category: SurchargeCategory) -> &mut Decimal {
        match category {
            SurchargeCategory::Hed => &mut self.hed,
            SurchargeCategory::Hen => &mut self.hen,
            SurchargeCategory::Hefd => &mut self.hefd,
            SurchargeCategory::Hefn => &mut self.hefn,
            SurchargeCategory::Rn => &mut self.rn,
            SurchargeCategory::Rd => &mut self.rd,
        }
    }

    /// Sum of the four overtime buckets.
    pub fn overtime_hours(&self) -> Decimal {
        self.hed + self.hen + self.hefd + self.hefn
    }

    /// `(category, hours)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (SurchargeCategory, Decimal)> + '_ {
        SurchargeCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Whether every bucket is zero.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, hours)| hours.is_zero())
    }
}
