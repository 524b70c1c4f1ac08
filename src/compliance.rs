//! WCAG compliance tiers for contrast ratios

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::contrast::{AAA_THRESHOLD, AA_THRESHOLD, A_THRESHOLD, MIN_RATIO};

/// Pass level reached by a contrast ratio
///
/// Variants are ordered from weakest to strongest, so `tier >= ComplianceTier::AA`
/// reads as "meets AA".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplianceTier {
    Fail,
    A,
    AA,
    AAA,
}

/// Visual status shown next to a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Success,
    Warning,
    Error,
}

/// Classify a contrast ratio
///
/// Lower bounds are inclusive: exactly 7.0 is AAA, 4.5 is AA, 3.0 is A.
/// A NaN ratio classifies as [`ComplianceTier::Fail`].
pub fn classify(ratio: f64) -> ComplianceTier {
    if ratio >= AAA_THRESHOLD {
        ComplianceTier::AAA
    } else if ratio >= AA_THRESHOLD {
        ComplianceTier::AA
    } else if ratio >= A_THRESHOLD {
        ComplianceTier::A
    } else {
        ComplianceTier::Fail
    }
}

impl ComplianceTier {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            ComplianceTier::AAA => "AAA",
            ComplianceTier::AA => "AA",
            ComplianceTier::A => "A",
            ComplianceTier::Fail => "Fail",
        }
    }

    /// Minimum ratio needed for this tier
    pub fn min_ratio(self) -> f64 {
        match self {
            ComplianceTier::AAA => AAA_THRESHOLD,
            ComplianceTier::AA => AA_THRESHOLD,
            ComplianceTier::A => A_THRESHOLD,
            ComplianceTier::Fail => MIN_RATIO,
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            ComplianceTier::AAA | ComplianceTier::AA => Indicator::Success,
            ComplianceTier::A => Indicator::Warning,
            ComplianceTier::Fail => Indicator::Error,
        }
    }

    pub fn is_pass(self) -> bool {
        self != ComplianceTier::Fail
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indicator::Success => "success",
            Indicator::Warning => "warning",
            Indicator::Error => "error",
        };
        f.write_str(name)
    }
}
