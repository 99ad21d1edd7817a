//! Order status state machine.
//!
//! An order is `pending` from checkout until the processor confirms payment,
//! then `paid` forever. Publishing the memorial is the workflow's side effect
//! of the pending → paid edge, not a third stored status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, ValidationError};

/// Stored status of an order row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Checkout started, payment not yet confirmed.
    Pending,

    /// Payment confirmed by the processor.
    Paid,

    /// Any value in the `status` column this service does not write.
    /// The workflow leaves such rows alone.
    Unrecognized,
}

impl OrderStatus {
    /// Column value written to the datastore.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Unrecognized => "unrecognized",
        }
    }

    /// Parses a column value, mapping anything unknown to `Unrecognized`.
    pub fn from_column(value: &str) -> Self {
        value.parse().unwrap_or(OrderStatus::Unrecognized)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown order status '{}'", other),
            )),
        }
    }
}

impl StateMachine for OrderStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (OrderStatus::Pending, OrderStatus::Paid))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            OrderStatus::Pending => vec![OrderStatus::Paid],
            OrderStatus::Paid | OrderStatus::Unrecognized => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_status() -> impl Strategy<Value = OrderStatus> {
        prop_oneof![
            Just(OrderStatus::Pending),
            Just(OrderStatus::Paid),
            Just(OrderStatus::Unrecognized),
        ]
    }

    #[test]
    fn pending_can_transition_to_paid() {
        assert_eq!(
            OrderStatus::Pending.transition_to(OrderStatus::Paid),
            Ok(OrderStatus::Paid)
        );
    }

    #[test]
    fn paid_is_terminal() {
        assert!(OrderStatus::Paid.is_terminal());
        assert!(OrderStatus::Paid.transition_to(OrderStatus::Pending).is_err());
        assert!(OrderStatus::Paid.transition_to(OrderStatus::Paid).is_err());
    }

    #[test]
    fn unrecognized_never_transitions() {
        assert!(OrderStatus::Unrecognized.is_terminal());
        assert!(!OrderStatus::Unrecognized.can_transition_to(&OrderStatus::Paid));
    }

    #[test]
    fn parses_column_values_case_insensitively() {
        assert_eq!(OrderStatus::from_column("PAID"), OrderStatus::Paid);
        assert_eq!(OrderStatus::from_column(" pending "), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_column("refunded"), OrderStatus::Unrecognized);
    }

    #[test]
    fn valid_transitions_are_consistent_with_can_transition_to() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Unrecognized,
        ] {
            for target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    target
                );
            }
        }
    }

    proptest! {
        #[test]
        fn only_pending_to_paid_is_allowed(from in any_status(), to in any_status()) {
            let allowed = from == OrderStatus::Pending && to == OrderStatus::Paid;
            prop_assert_eq!(from.can_transition_to(&to), allowed);
            prop_assert_eq!(from.transition_to(to).is_ok(), allowed);
            prop_assert_eq!(from.valid_transitions().contains(&to), allowed);
        }

        #[test]
        fn unknown_column_values_are_unrecognized(value in "\\PC*") {
            let status = OrderStatus::from_column(&value);
            match value.trim().to_ascii_lowercase().as_str() {
                "pending" => prop_assert_eq!(status, OrderStatus::Pending),
                "paid" => prop_assert_eq!(status, OrderStatus::Paid),
                _ => prop_assert_eq!(status, OrderStatus::Unrecognized),
            }
        }
    }
}
