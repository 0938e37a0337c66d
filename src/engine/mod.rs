// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Finance summary engine.
//!
//! Pure functions over already-fetched records. Nothing in here performs I/O
//! or keeps state between calls, so every figure is recomputed from the full
//! input set it is given.

pub mod balance;
pub mod breakdown;
pub mod goals;
pub mod limits;
pub mod period;

pub use balance::{
    BalanceSummary, SavingsImpact, SkippedRecord, compute_balance, compute_savings_impact,
};
pub use breakdown::{CategoryBreakdown, CategoryTotal, UNCATEGORIZED, spend_by_category};
pub use goals::{
    ContributionPlan, GoalConfirmation, GoalEstimate, GoalProgress, MAX_ACTIVE_GOALS,
    PlannedContribution, active_goal_count, can_add_active_goal, completion_meets_deadline,
    estimate_goal_completion, evaluate_goal_creation_confirmation, first_contribution,
    goal_progress, plan_monthly_contributions, required_monthly_for_deadline,
};
pub use limits::{
    LimitEvaluation, LimitUsage, LimitVerdict, WARNING_PERCENTAGE, evaluate_category_limit,
    predictive_verdict,
};
pub use period::Period;
