use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which board produced an event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Restaurant,
    Courier,
}

/// Emitted whenever an order moves one step forward in its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusChangedEvent {
    pub event_id: Uuid,
    pub order_id: String,
    pub role: Role,
    pub from: String,
    pub to: String,
    pub occurred_at: DateTime<Utc>,
}

impl StatusChangedEvent {
    pub fn new(role: Role, order_id: impl Into<String>, from: &str, to: &str) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            order_id: order_id.into(),
            role,
            from: from.to_string(),
            to: to.to_string(),
            occurred_at: Utc::now(),
        }
    }
}
