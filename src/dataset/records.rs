//! Typed athlete record schema matching the dataset file layout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One dataset entry describing a single athlete.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AthleteRecord {
    #[serde(rename = "AthleteName")]
    pub name: String,
    #[serde(rename = "MedicalTestReports", default)]
    pub medical_reports: Vec<MedicalTest>,
    #[serde(rename = "FinancialTransactions", default)]
    pub financial: FinancialRecord,
    #[serde(rename = "TravelHistory", default)]
    pub travel_history: Vec<Trip>,
}

/// Wrapper object the dataset file uses for the transaction list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FinancialRecord {
    #[serde(rename = "TransactionHistory", default)]
    pub transactions: Vec<Transaction>,
}

/// Outcome of a single medical test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TestStatus {
    Normal,
    Abnormal,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Normal => f.write_str("Normal"),
            TestStatus::Abnormal => f.write_str("Abnormal"),
        }
    }
}

/// A single medical test report row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MedicalTest {
    #[serde(default)]
    pub test_name: String,
    #[serde(default)]
    pub date: String,
    pub status: TestStatus,
}

/// A single financial transaction row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    pub suspicious: bool,
}

/// A single travel history row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Trip {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "Flagged")]
    pub flagged: bool,
}
