use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{types::Json, FromRow};

/// A persisted audit report. Rows are append-only: `id` and `created_at`
/// are assigned by the database at insertion and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Audit {
    pub id: i32,
    pub audit_name: String,
    pub created_at: DateTime<Utc>,
    pub report_data: Json<Value>,
}

/// Listing shape; the report payload is deliberately excluded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditSummary {
    pub id: i32,
    pub audit_name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating an audit. Validation is purely structural:
/// `report_data` is typed as a list of JSON objects so that non-array
/// bodies and non-object entries are rejected during deserialization,
/// before any database access. Any present, correctly typed name is
/// accepted, including the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuditPayload {
    #[serde(rename = "auditName")]
    pub audit_name: String,
    #[serde(rename = "reportData")]
    pub report_data: Vec<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuditResponse {
    pub id: i32,
    pub audit_name: String,
    pub created_at: DateTime<Utc>,
    pub report_data: Value,
}

impl From<Audit> for AuditResponse {
    fn from(audit: Audit) -> Self {
        Self {
            id: audit.id,
            audit_name: audit.audit_name,
            created_at: audit.created_at,
            report_data: audit.report_data.0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAuditResponse {
    pub message: String,
    #[serde(rename = "auditId")]
    pub audit_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_accepts_camel_case_fields() {
        let payload: CreateAuditPayload = serde_json::from_value(json!({
            "auditName": "Q1 Review",
            "reportData": [{"item": "x", "score": 5}]
        }))
        .expect("deserialize payload");

        assert_eq!(payload.audit_name, "Q1 Review");
        assert_eq!(payload.report_data.len(), 1);
        assert_eq!(payload.report_data[0]["score"], json!(5));
    }

    #[test]
    fn create_payload_rejects_missing_name() {
        let result = serde_json::from_value::<CreateAuditPayload>(json!({
            "reportData": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_payload_rejects_non_array_report() {
        let result = serde_json::from_value::<CreateAuditPayload>(json!({
            "auditName": "x",
            "reportData": {"item": "not-a-list"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_payload_rejects_non_object_entries() {
        let result = serde_json::from_value::<CreateAuditPayload>(json!({
            "auditName": "x",
            "reportData": [1, 2, 3]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn create_payload_accepts_empty_name() {
        let payload: CreateAuditPayload = serde_json::from_value(json!({
            "auditName": "",
            "reportData": []
        }))
        .expect("deserialize payload");
        assert_eq!(payload.audit_name, "");
        assert!(payload.report_data.is_empty());
    }
}
