//! Fixed-threshold doping verdict rule.

use std::fmt;

const ABNORMAL_TEST_LIMIT: usize = 2;
const SUSPICIOUS_TXN_LIMIT: usize = 1;
const FLAGGED_TRIP_LIMIT: usize = 1;

/// Outcome of the threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Suspicious,
    NotDoped,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Suspicious => f.write_str(
                "Suspicious activity detected: further investigation required for doping",
            ),
            Verdict::NotDoped => f.write_str("Not Doped"),
        }
    }
}

/// Apply the fixed thresholds. Any single category strictly over its limit
/// flags the athlete.
pub fn decide(abnormal_count: usize, suspicious_count: usize, flagged_count: usize) -> Verdict {
    if abnormal_count > ABNORMAL_TEST_LIMIT
        || suspicious_count > SUSPICIOUS_TXN_LIMIT
        || flagged_count > FLAGGED_TRIP_LIMIT
    {
        Verdict::Suspicious
    } else {
        Verdict::NotDoped
    }
}
