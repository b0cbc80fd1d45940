//! Budget category model
//!
//! A category is one envelope: income gets assigned into it, expenses are
//! charged against it. `assigned` and `activity` together give the spendable
//! remainder, and a goal (0 = none) can mark a monthly funding target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A budget envelope for a single month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Amount of income allocated to this envelope this month
    #[serde(default)]
    pub assigned: f64,

    /// Cumulative expense total, stored as a non-positive accumulator
    #[serde(default)]
    pub activity: f64,

    /// Funding target; 0 means no goal
    #[serde(default)]
    pub goal: f64,

    /// Optional target date for the goal, informational only
    #[serde(default)]
    pub goal_date: Option<NaiveDate>,
}

impl Category {
    /// Create a new category with zero balances.
    ///
    /// The name is stored trimmed; a non-finite or negative goal becomes 0.
    pub fn new(name: impl Into<String>, goal: f64, goal_date: Option<NaiveDate>) -> Self {
        let goal = if goal.is_finite() && goal > 0.0 {
            goal
        } else {
            0.0
        };
        Self {
            id: CategoryId::new(),
            name: name.into().trim().to_string(),
            assigned: 0.0,
            activity: 0.0,
            goal,
            goal_date,
        }
    }

    /// The spendable remainder: assigned + activity
    pub fn available(&self) -> f64 {
        self.assigned + self.activity
    }

    /// Whether a funding goal is set
    pub fn has_goal(&self) -> bool {
        self.goal > 0.0
    }

    /// How far the envelope is from its goal (negative once met).
    /// Only meaningful when a goal is set.
    pub fn goal_remaining(&self) -> f64 {
        self.goal - self.available()
    }

    /// Whether both balances are exactly zero.
    ///
    /// Exact float comparison on purpose: deletion requires the envelope to
    /// be drained to the same bits that arithmetic produced, not "close to".
    pub fn is_empty(&self) -> bool {
        self.assigned == 0.0 && self.activity == 0.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Groceries", 0.0, None);
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.assigned, 0.0);
        assert_eq!(category.activity, 0.0);
        assert!(!category.has_goal());
        assert!(category.is_empty());
    }

    #[test]
    fn test_name_is_trimmed() {
        let category = Category::new("  Rent  ", 0.0, None);
        assert_eq!(category.name, "Rent");
    }

    #[test]
    fn test_goal_clamping() {
        assert_eq!(Category::new("A", -50.0, None).goal, 0.0);
        assert_eq!(Category::new("B", f64::NAN, None).goal, 0.0);
        assert_eq!(Category::new("C", 1500.0, None).goal, 1500.0);
    }

    #[test]
    fn test_available() {
        let mut category = Category::new("Food", 0.0, None);
        category.assigned = 30000.0;
        category.activity = -12000.0;
        assert_eq!(category.available(), 18000.0);
        assert!(!category.is_empty());
    }

    #[test]
    fn test_goal_remaining() {
        let mut category = Category::new("Food", 50000.0, None);
        category.assigned = 30000.0;
        assert_eq!(category.goal_remaining(), 20000.0);

        category.assigned = 60000.0;
        assert!(category.goal_remaining() < 0.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let category = Category::new(
            "Savings",
            1000.0,
            NaiveDate::from_ymd_opt(2025, 6, 1),
        );
        let json = serde_json::to_string(&category).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, category.id);
        assert_eq!(back.name, category.name);
        assert_eq!(back.goal, category.goal);
        assert_eq!(back.goal_date, category.goal_date);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let json = format!(
            "{{\"id\":\"{}\",\"name\":\"Partial\"}}",
            CategoryId::new().as_uuid()
        );
        let category: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category.assigned, 0.0);
        assert_eq!(category.activity, 0.0);
        assert_eq!(category.goal, 0.0);
        assert!(category.goal_date.is_none());
    }
}
