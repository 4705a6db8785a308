//! Display lookup tables keyed by status.

use serde::Serialize;

use crate::models::{DeliveryStatus, OrderStatus};

/// Visual emphasis for a status badge
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Info,
    Warning,
    Success,
    Muted,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub tone: Tone,
    pub icon: &'static str,
}

impl OrderStatus {
    pub fn presentation(self) -> StatusPresentation {
        match self {
            OrderStatus::New => StatusPresentation { label: "new order", tone: Tone::Info, icon: "clock" },
            OrderStatus::Preparing => StatusPresentation { label: "preparing", tone: Tone::Warning, icon: "package" },
            OrderStatus::Ready => StatusPresentation { label: "ready", tone: Tone::Success, icon: "check-circle" },
            OrderStatus::Dispatched => StatusPresentation { label: "dispatched", tone: Tone::Muted, icon: "truck" },
        }
    }

    pub fn label(self) -> &'static str {
        self.presentation().label
    }

    /// Button text for the transition out of this status.
    pub fn next_action(self) -> Option<&'static str> {
        match self {
            OrderStatus::New => Some("start preparing"),
            OrderStatus::Preparing => Some("mark ready"),
            OrderStatus::Ready => Some("dispatch"),
            OrderStatus::Dispatched => None,
        }
    }
}

impl DeliveryStatus {
    pub fn presentation(self) -> StatusPresentation {
        match self {
            DeliveryStatus::Available => StatusPresentation { label: "available", tone: Tone::Info, icon: "package" },
            DeliveryStatus::Accepted => StatusPresentation { label: "accepted", tone: Tone::Warning, icon: "navigation" },
            DeliveryStatus::PickedUp => StatusPresentation { label: "picked up", tone: Tone::Success, icon: "truck" },
            DeliveryStatus::Delivered => StatusPresentation { label: "delivered", tone: Tone::Muted, icon: "check-circle" },
        }
    }

    pub fn label(self) -> &'static str {
        self.presentation().label
    }

    pub fn next_action(self) -> Option<&'static str> {
        match self {
            DeliveryStatus::Available => Some("accept"),
            DeliveryStatus::Accepted => Some("pick up"),
            DeliveryStatus::PickedUp => Some("deliver"),
            DeliveryStatus::Delivered => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Lifecycle;

    #[test]
    fn test_restaurant_labels() {
        let labels: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["new order", "preparing", "ready", "dispatched"]);
    }

    #[test]
    fn test_next_action_only_for_non_terminal() {
        for s in OrderStatus::ALL {
            assert_eq!(s.next_action().is_some(), !s.is_terminal());
        }
        for s in DeliveryStatus::ALL {
            assert_eq!(s.next_action().is_some(), !s.is_terminal());
        }
    }

    #[test]
    fn test_restaurant_presentation_table() {
        let table: Vec<(&str, Tone, &str)> = OrderStatus::ALL
            .iter()
            .map(|s| {
                let p = s.presentation();
                (p.label, p.tone, p.icon)
            })
            .collect();

        assert_eq!(table, vec![
            ("new order", Tone::Info, "clock"),
            ("preparing", Tone::Warning, "package"),
            ("ready", Tone::Success, "check-circle"),
            ("dispatched", Tone::Muted, "truck"),
        ]);
    }

    #[test]
    fn test_delivery_presentation_table() {
        let table: Vec<(&str, Tone, &str)> = DeliveryStatus::ALL
            .iter()
            .map(|s| {
                let p = s.presentation();
                (p.label, p.tone, p.icon)
            })
            .collect();

        assert_eq!(table, vec![
            ("available", Tone::Info, "package"),
            ("accepted", Tone::Warning, "navigation"),
            ("picked up", Tone::Success, "truck"),
            ("delivered", Tone::Muted, "check-circle"),
        ]);

        let actions: Vec<Option<&str>> = DeliveryStatus::ALL.iter().map(|s| s.next_action()).collect();
        assert_eq!(actions, vec![Some("accept"), Some("pick up"), Some("deliver"), None]);
    }

    #[test]
    fn test_every_status_is_labelled() {
        for s in DeliveryStatus::ALL {
            assert!(!s.label().is_empty());
        }
        assert_eq!(DeliveryStatus::PickedUp.next_action(), Some("deliver"));
    }
}
