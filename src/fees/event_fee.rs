//! Event Fee Resolver
//!
//! An event can carry two fee schemes at once: the generic event fee
//! (`fees`, or the older `eventFee` column) and a per-student registration
//! fee that only admin-created events may enable. Exactly one of them is
//! shown to a viewer.

use tracing::trace;

use crate::coerce::numeric_or_zero;
use crate::types::{EventFeeContext, FeeInfo, FeeKind, ViewerRole};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_FREE_LABEL: &str = "Free";

/// Resolves the fee a viewer sees for an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFeeResolver {
    currency_symbol: String,
    free_label: String,
}

impl Default for EventFeeResolver {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            free_label: DEFAULT_FREE_LABEL.to_string(),
        }
    }
}

impl EventFeeResolver {
    pub fn new(currency_symbol: impl Into<String>, free_label: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            free_label: free_label.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn free_label(&self) -> &str {
        &self.free_label
    }

    /// Pick the fee shown to a viewer with `user_role`.
    ///
    /// The student registration fee applies only when the viewer is a
    /// student, the event was created by an admin, the fee is enabled and
    /// its amount is positive. Otherwise the event fee applies, with `fees`
    /// taking priority over `eventFee` whenever it is set (even to 0).
    pub fn get_event_fee_info(&self, event: &EventFeeContext, user_role: &str) -> FeeInfo {
        let role = ViewerRole::parse(user_role);
        let student_fee_amount = numeric_or_zero(event.student_fee_amount);

        let has_student_fee = role.is_student()
            && event.created_by_admin
            && event.student_fee_enabled
            && student_fee_amount > 0.0;

        let event_fee_amount = event
            .fees
            .or(event.event_fee)
            .map(numeric_or_zero)
            .unwrap_or(0.0);

        let raw_amount = if has_student_fee {
            student_fee_amount
        } else {
            event_fee_amount
        };

        let is_free = !(raw_amount.is_finite() && raw_amount > 0.0);
        let amount = if is_free { 0.0 } else { raw_amount };

        let kind = if has_student_fee {
            FeeKind::StudentRegistration
        } else {
            FeeKind::Event
        };

        // Shortest round-trip `Display`: 200 -> "200", 99.5 -> "99.5". Unlike
        // JavaScript, values from 1e21 up print in full rather than as "1e+21".
        let label = if is_free {
            self.free_label.clone()
        } else {
            format!("{}{}", self.currency_symbol, amount)
        };

        trace!(%role, %kind, amount, is_free, "event fee resolved");

        FeeInfo {
            amount,
            is_free,
            kind,
            label,
        }
    }
}

/// [`EventFeeResolver::get_event_fee_info`] with the default display settings
pub fn get_event_fee_info(event: &EventFeeContext, user_role: &str) -> FeeInfo {
    EventFeeResolver::default().get_event_fee_info(event, user_role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_event_with_student_fee() -> EventFeeContext {
        EventFeeContext {
            created_by_admin: true,
            student_fee_enabled: true,
            student_fee_amount: 200.0,
            fees: Some(500.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_student_sees_registration_fee() {
        let info = get_event_fee_info(&admin_event_with_student_fee(), "STUDENT");
        assert_eq!(info.amount, 200.0);
        assert!(!info.is_free);
        assert_eq!(info.kind, FeeKind::StudentRegistration);
        assert_eq!(info.label, "₹200");
    }

    #[test]
    fn test_role_is_case_insensitive() {
        let info = get_event_fee_info(&admin_event_with_student_fee(), "student");
        assert_eq!(info.kind, FeeKind::StudentRegistration);
    }

    #[test]
    fn test_coach_sees_event_fee() {
        let info = get_event_fee_info(&admin_event_with_student_fee(), "COACH");
        assert_eq!(info.amount, 500.0);
        assert!(!info.is_free);
        assert_eq!(info.kind, FeeKind::Event);
        assert_eq!(info.label, "₹500");
    }

    #[test]
    fn test_non_admin_event_ignores_student_fee() {
        let event = EventFeeContext {
            created_by_admin: false,
            student_fee_enabled: true,
            student_fee_amount: 200.0,
            event_fee: Some(0.0),
            ..Default::default()
        };
        let info = get_event_fee_info(&event, "STUDENT");
        assert_eq!(info.amount, 0.0);
        assert!(info.is_free);
        assert_eq!(info.kind, FeeKind::Event);
        assert_eq!(info.label, "Free");
    }

    #[test]
    fn test_disabled_or_zero_student_fee_falls_back() {
        let mut event = admin_event_with_student_fee();
        event.student_fee_enabled = false;
        assert_eq!(get_event_fee_info(&event, "STUDENT").kind, FeeKind::Event);

        let mut event = admin_event_with_student_fee();
        event.student_fee_amount = 0.0;
        assert_eq!(get_event_fee_info(&event, "STUDENT").amount, 500.0);

        let mut event = admin_event_with_student_fee();
        event.student_fee_amount = f64::NAN;
        assert_eq!(get_event_fee_info(&event, "STUDENT").kind, FeeKind::Event);
    }

    #[test]
    fn test_event_fee_used_when_fees_missing() {
        let event = EventFeeContext {
            fees: None,
            event_fee: Some(150.0),
            ..Default::default()
        };
        let info = get_event_fee_info(&event, "COACH");
        assert_eq!(info.amount, 150.0);
        assert_eq!(info.label, "₹150");
    }

    #[test]
    fn test_zero_fees_wins_over_event_fee() {
        let event = EventFeeContext {
            fees: Some(0.0),
            event_fee: Some(150.0),
            ..Default::default()
        };
        let info = get_event_fee_info(&event, "COACH");
        assert_eq!(info.amount, 0.0);
        assert!(info.is_free);
    }

    #[test]
    fn test_negative_or_nan_fee_is_free() {
        for fee in [-50.0, f64::NAN, f64::INFINITY] {
            let event = EventFeeContext {
                fees: Some(fee),
                ..Default::default()
            };
            let info = get_event_fee_info(&event, "CLUB");
            assert!(info.is_free, "fee {}", fee);
            assert_eq!(info.amount, 0.0);
            assert_eq!(info.label, "Free");
        }
    }

    #[test]
    fn test_fractional_label_keeps_decimals() {
        let event = EventFeeContext {
            fees: Some(99.5),
            ..Default::default()
        };
        assert_eq!(get_event_fee_info(&event, "COACH").label, "₹99.5");
    }

    #[test]
    fn test_large_amount_label_is_not_exponential() {
        let event = EventFeeContext {
            fees: Some(1e21),
            ..Default::default()
        };
        assert_eq!(
            get_event_fee_info(&event, "COACH").label,
            "₹1000000000000000000000"
        );
    }

    #[test]
    fn test_default_display_settings() {
        let resolver = EventFeeResolver::default();
        assert_eq!(resolver.currency_symbol(), DEFAULT_CURRENCY_SYMBOL);
        assert_eq!(resolver.free_label(), DEFAULT_FREE_LABEL);
    }

    #[test]
    fn test_custom_display_settings() {
        let resolver = EventFeeResolver::new("Rs. ", "No charge");
        assert_eq!(resolver.currency_symbol(), "Rs. ");
        assert_eq!(resolver.free_label(), "No charge");
        let info = resolver.get_event_fee_info(&admin_event_with_student_fee(), "STUDENT");
        assert_eq!(info.label, "Rs. 200");

        let info = resolver.get_event_fee_info(&EventFeeContext::default(), "STUDENT");
        assert_eq!(info.label, "No charge");
    }
}
