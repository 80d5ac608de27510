//! Core types used throughout the fee engine
//!
//! Input records (payments, events) and the derived results handed back to
//! the HTTP layer. Field names serialize in camelCase to match the
//! application's JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coerce;

/// A payment record as exported by the application.
///
/// Only `amount` takes part in calculations; `id` and `status` are carried
/// through for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, deserialize_with = "coerce::deserialize_optional_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "coerce::deserialize_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "coerce::deserialize_optional_text")]
    pub status: Option<String>,
}

impl Transaction {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }
}

/// Commission withheld by the gateway and what remains for the organizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionResult {
    pub commission: f64,
    pub net_revenue: f64,
}

/// Aggregate over a batch of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCommissionResult {
    pub total_gross: f64,
    pub total_commission: f64,
    pub total_net: f64,
}

/// Fee configuration of an event, as stored on the event record.
///
/// `fees` and `event_fee` distinguish "not set" (`None`) from a configured
/// zero (`Some(0.0)`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFeeContext {
    #[serde(default, deserialize_with = "coerce::deserialize_flag")]
    pub created_by_admin: bool,
    #[serde(default, deserialize_with = "coerce::deserialize_flag")]
    pub student_fee_enabled: bool,
    #[serde(default, deserialize_with = "coerce::deserialize_amount")]
    pub student_fee_amount: f64,
    #[serde(default, deserialize_with = "coerce::deserialize_optional_amount")]
    pub event_fee: Option<f64>,
    #[serde(default, deserialize_with = "coerce::deserialize_optional_amount")]
    pub fees: Option<f64>,
}

/// Which fee concept was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeKind {
    Event,
    StudentRegistration,
}

impl Default for FeeKind {
    fn default() -> Self {
        FeeKind::Event
    }
}

impl FeeKind {
    /// Human-readable label for the UI ("Event fee" / "Registration fee")
    pub fn display_name(&self) -> &'static str {
        match self {
            FeeKind::Event => "Event fee",
            FeeKind::StudentRegistration => "Registration fee",
        }
    }
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeKind::Event => write!(f, "EVENT"),
            FeeKind::StudentRegistration => write!(f, "STUDENT_REGISTRATION"),
        }
    }
}

/// Display-ready fee descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeInfo {
    pub amount: f64,
    pub is_free: bool,
    pub kind: FeeKind,
    pub label: String,
}

/// Application roles of the viewing user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewerRole {
    Student,
    Coach,
    Club,
    Institute,
    Admin,
    Other(String),
}

impl ViewerRole {
    /// Parse from string (case-insensitive, no trimming)
    pub fn parse(s: &str) -> Self {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "STUDENT" => ViewerRole::Student,
            "COACH" => ViewerRole::Coach,
            "CLUB" => ViewerRole::Club,
            "INSTITUTE" => ViewerRole::Institute,
            "ADMIN" => ViewerRole::Admin,
            _ => ViewerRole::Other(upper),
        }
    }

    pub fn is_student(&self) -> bool {
        matches!(self, ViewerRole::Student)
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerRole::Student => write!(f, "STUDENT"),
            ViewerRole::Coach => write!(f, "COACH"),
            ViewerRole::Club => write!(f, "CLUB"),
            ViewerRole::Institute => write!(f, "INSTITUTE"),
            ViewerRole::Admin => write!(f, "ADMIN"),
            ViewerRole::Other(role) => write!(f, "{}", role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_lenient_amount() {
        let tx: Transaction = serde_json::from_str(r#"{"id": 7, "amount": "199.50"}"#).unwrap();
        assert_eq!(tx.amount, 199.5);
        assert_eq!(tx.id.as_deref(), Some("7"));

        let missing: Transaction = serde_json::from_str(r#"{"status": "SUCCESS"}"#).unwrap();
        assert_eq!(missing.amount, 0.0);

        let garbage: Transaction = serde_json::from_str(r#"{"amount": "n/a"}"#).unwrap();
        assert_eq!(garbage.amount, 0.0);
    }

    #[test]
    fn test_event_context_keeps_null_and_zero_apart() {
        let event: EventFeeContext =
            serde_json::from_str(r#"{"fees": null, "eventFee": 0, "createdByAdmin": 1}"#).unwrap();
        assert_eq!(event.fees, None);
        assert_eq!(event.event_fee, Some(0.0));
        assert!(event.created_by_admin);
        assert!(!event.student_fee_enabled);
        assert_eq!(event.student_fee_amount, 0.0);
    }

    #[test]
    fn test_event_context_ignores_unrelated_fields() {
        let event: EventFeeContext = serde_json::from_str(
            r#"{"id": "evt_1", "name": "District Meet", "studentFeeEnabled": "yes", "studentFeeAmount": "200"}"#,
        )
        .unwrap();
        assert!(event.student_fee_enabled);
        assert_eq!(event.student_fee_amount, 200.0);
    }

    #[test]
    fn test_fee_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&FeeKind::StudentRegistration).unwrap(),
            "\"STUDENT_REGISTRATION\""
        );
        assert_eq!(FeeKind::Event.to_string(), "EVENT");
        assert_eq!(FeeKind::StudentRegistration.display_name(), "Registration fee");
    }

    #[test]
    fn test_viewer_role_parse() {
        assert!(ViewerRole::parse("student").is_student());
        assert_eq!(ViewerRole::parse("Coach"), ViewerRole::Coach);
        assert_eq!(ViewerRole::parse("parent"), ViewerRole::Other("PARENT".to_string()));
        assert!(!ViewerRole::parse(" STUDENT").is_student());
    }
}
