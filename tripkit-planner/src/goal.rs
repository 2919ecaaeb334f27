use crate::models::SavingsPlan;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tripkit_catalog::TripStyle;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    Proposed,
    Confirmed,
}

/// A savings goal derived from a plan. Confirming only flips local state;
/// nothing is persisted and no external account is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub destination: String,
    pub style: TripStyle,
    pub monthly_amount: f64,
    pub total_goal: f64,
    pub target_date: NaiveDate,
    pub status: GoalStatus,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Propose a goal from a computed plan and its arrival date.
    pub fn from_plan(
        destination: impl Into<String>,
        style: TripStyle,
        plan: &SavingsPlan,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            destination: destination.into(),
            style,
            monthly_amount: plan.monthly_savings,
            total_goal: plan.total_cost,
            target_date,
            status: GoalStatus::Proposed,
            created_at: Utc::now(),
        }
    }

    pub fn confirm(&mut self) {
        self.status = GoalStatus::Confirmed;
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == GoalStatus::Confirmed
    }
}
