use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Order Value Objects
// ============================================================================

/// A single line of an order as the kitchen works it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LineItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    /// Free text from the customer, may be empty.
    pub special_instructions: String,
    pub completed: bool,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        special_instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            special_instructions: special_instructions.into(),
            completed: false,
        }
    }
}

/// Preparation lifecycle. The board never advances this on its own;
/// every transition is an explicit caller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    New,
    InProgress,
    Ready,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ];

    /// The single forward step in the lifecycle ladder, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::New => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    /// Label for the action that moves an order out of this status.
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::New => Some("Start Cooking"),
            OrderStatus::InProgress => Some("Mark Ready"),
            OrderStatus::Ready => Some("Complete"),
            OrderStatus::Completed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Station {
    Grill,
    Fryer,
    Salad,
    Beverages,
}

impl Station {
    pub const ALL: [Station; 4] = [
        Station::Grill,
        Station::Fryer,
        Station::Salad,
        Station::Beverages,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Station::Grill => "Grill",
            Station::Fryer => "Fryer",
            Station::Salad => "Salad",
            Station::Beverages => "Beverages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMethod {
    DineIn,
    Pickup,
    Delivery,
}

/// Display classification combining explicit priority with elapsed-vs-estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Warning,
    Overdue,
    High,
    Urgent,
}

impl Urgency {
    /// Pure classification over (priority, elapsed, estimate).
    ///
    /// Evaluation order is fixed: explicit priority always wins over the
    /// elapsed-time thresholds, and Overdue wins over Warning.
    pub fn classify(priority: Priority, elapsed_minutes: i64, estimated_minutes: i64) -> Urgency {
        if priority == Priority::Urgent {
            return Urgency::Urgent;
        }
        if priority == Priority::High {
            return Urgency::High;
        }
        if elapsed_minutes >= estimated_minutes {
            return Urgency::Overdue;
        }
        if elapsed_minutes as f64 >= estimated_minutes as f64 * 0.8 {
            return Urgency::Warning;
        }
        Urgency::Normal
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_starts_incomplete() {
        let item = LineItem::new("French Fries", 2, "Extra crispy");
        assert_eq!(item.quantity, 2);
        assert!(!item.completed);
    }

    #[test]
    fn test_status_ladder_is_forward_only() {
        assert_eq!(OrderStatus::New.next(), Some(OrderStatus::InProgress));
        assert_eq!(OrderStatus::InProgress.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::Completed.next(), None);
    }

    #[test]
    fn test_status_action_labels() {
        assert_eq!(OrderStatus::New.action_label(), Some("Start Cooking"));
        assert_eq!(OrderStatus::InProgress.action_label(), Some("Mark Ready"));
        assert_eq!(OrderStatus::Ready.action_label(), Some("Complete"));
        assert_eq!(OrderStatus::Completed.action_label(), None);
    }

    #[test]
    fn test_status_serialization_uses_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::InProgress);
    }

    #[test]
    fn test_delivery_method_serialization() {
        let json = serde_json::to_string(&DeliveryMethod::DineIn).unwrap();
        assert_eq!(json, "\"dine-in\"");
    }

    #[test]
    fn test_urgent_priority_wins_regardless_of_elapsed() {
        assert_eq!(Urgency::classify(Priority::Urgent, 0, 20), Urgency::Urgent);
        assert_eq!(Urgency::classify(Priority::Urgent, 500, 20), Urgency::Urgent);
    }

    #[test]
    fn test_high_priority_wins_over_overdue() {
        assert_eq!(Urgency::classify(Priority::High, 30, 20), Urgency::High);
    }

    #[test]
    fn test_elapsed_thresholds() {
        // Under 80% of the estimate.
        assert_eq!(Urgency::classify(Priority::Normal, 10, 20), Urgency::Normal);
        // 16 minutes is exactly 80% of 20.
        assert_eq!(Urgency::classify(Priority::Normal, 16, 20), Urgency::Warning);
        // At or past the estimate.
        assert_eq!(Urgency::classify(Priority::Normal, 20, 20), Urgency::Overdue);
        assert_eq!(Urgency::classify(Priority::Normal, 25, 20), Urgency::Overdue);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                Urgency::classify(Priority::Normal, 16, 20),
                Urgency::Warning
            );
        }
    }
}
