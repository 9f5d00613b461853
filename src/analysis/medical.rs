//! Medical test report screening.

use serde::Serialize;

use crate::dataset::{MedicalTest, TestStatus};

/// Abnormal-test summary for one athlete's medical reports.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalSummary {
    pub total_tests: usize,
    pub abnormal_count: usize,
    pub details: Vec<MedicalTest>,
}

/// Count abnormal test results, keeping the matching rows in input order.
pub fn summarize(reports: &[MedicalTest]) -> MedicalSummary {
    let details: Vec<MedicalTest> = reports
        .iter()
        .filter(|test| test.status == TestStatus::Abnormal)
        .cloned()
        .collect();

    MedicalSummary {
        total_tests: reports.len(),
        abnormal_count: details.len(),
        details,
    }
}
