//! Per-category record screening and the doping verdict rule.

pub mod financial;
pub mod medical;
pub mod travel;
pub mod verdict;

use serde::Serialize;

use crate::dataset::AthleteRecord;

pub use verdict::Verdict;

/// Full screening report for one athlete, assembled fresh per request.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub athlete_name: String,
    pub medical_analysis: medical::MedicalSummary,
    pub financial_analysis: financial::FinancialSummary,
    pub travel_analysis: travel::TravelSummary,
    pub result: String,
}

/// Run all three analyzers over a record and apply the verdict rule.
pub fn screen(record: &AthleteRecord) -> ScreeningReport {
    let medical_analysis = medical::summarize(&record.medical_reports);
    let financial_analysis = financial::summarize(&record.financial);
    let travel_analysis = travel::summarize(&record.travel_history);
    let verdict = verdict::decide(
        medical_analysis.abnormal_count,
        financial_analysis.suspicious_count,
        travel_analysis.flagged_count,
    );

    ScreeningReport {
        athlete_name: record.name.clone(),
        medical_analysis,
        financial_analysis,
        travel_analysis,
        result: verdict.to_string(),
    }
}
