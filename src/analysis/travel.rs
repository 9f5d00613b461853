//! Travel history screening.

use serde::Serialize;

use crate::dataset::Trip;

/// Flagged-trip summary for one athlete's travel history.
#[derive(Debug, Clone, Serialize)]
pub struct TravelSummary {
    pub total_trips: usize,
    pub flagged_count: usize,
    pub details: Vec<Trip>,
}

/// Count flagged trips, keeping the matching rows in input order.
pub fn summarize(trips: &[Trip]) -> TravelSummary {
    let details: Vec<Trip> = trips.iter().filter(|trip| trip.flagged).cloned().collect();

    TravelSummary {
        total_trips: trips.len(),
        flagged_count: details.len(),
        details,
    }
}
