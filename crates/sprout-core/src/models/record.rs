use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A completed screening as stored by the host application. The engine
/// returns plain result types; the host wraps one in a record and performs
/// a single downstream write.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    /// Opaque identifier supplied by the session layer.
    pub user_id: String,
    pub questionnaire_id: String,
    pub administered_on: jiff::civil::Date,
    /// Serialized engine output (`RiskResult` or `GeneralScreeningResult`).
    pub result: serde_json::Value,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ScreeningRecord {
    /// Build a record around an engine result, serializing it for storage.
    pub fn new<T: Serialize>(
        user_id: String,
        questionnaire_id: String,
        administered_on: jiff::civil::Date,
        result: &T,
    ) -> Result<Self, CoreError> {
        let now = jiff::Timestamp::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            questionnaire_id,
            administered_on,
            result: serde_json::to_value(result)?,
            notes: None,
            created_at: now,
            updated_at: now,
        })
    }
}
