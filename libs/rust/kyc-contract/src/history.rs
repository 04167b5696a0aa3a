//! Records returned by `GET /api/history`.

use crate::scalar;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A past verification as stored by the service.
///
/// Only the applicant name and risk level are interpreted; every other
/// column is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Applicant name
    #[serde(rename = "Name", default, deserialize_with = "scalar::opt_text")]
    pub name: Option<String>,
    /// Risk bucket assigned at verification time
    #[serde(rename = "Fraud_Risk_Level", default, deserialize_with = "scalar::opt_text")]
    pub fraud_risk_level: Option<String>,
    /// Remaining columns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Most recent record. The service appends, so this is the last element.
#[must_use]
pub fn latest(records: &[HistoryRecord]) -> Option<&HistoryRecord> {
    records.last()
}
