// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::engine::Period;
use crate::models::{GoalStatus, SavingsGoal};

pub const MAX_ACTIVE_GOALS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalConfirmation {
    pub requires_confirmation: bool,
    pub one_third_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalEstimate {
    pub months_needed: u32,
    pub completion_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub progress_percentage: Decimal,
    pub remaining_amount: Decimal,
    pub months_remaining: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedContribution {
    pub goal_id: i64,
    pub goal_name: String,
    pub amount: Decimal,
    pub new_total: Decimal,
    pub completes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionPlan {
    pub total_required: Decimal,
    pub one_third_balance: Decimal,
    pub requires_permission: bool,
    pub contributions: Vec<PlannedContribution>,
    pub total_contributed: Decimal,
}

/// Soft guardrail for a new goal: a monthly contribution above a third of
/// the current balance needs explicit confirmation. Equal is allowed.
pub fn evaluate_goal_creation_confirmation(
    current_balance: Decimal,
    monthly_contribution: Decimal,
) -> GoalConfirmation {
    let one_third_balance = current_balance / Decimal::from(3);
    GoalConfirmation {
        requires_confirmation: monthly_contribution > one_third_balance,
        one_third_balance,
    }
}

/// Months needed to reach `target_amount` at `monthly_contribution`, and the
/// date that lands on counting from `start_date`.
pub fn estimate_goal_completion(
    target_amount: Decimal,
    monthly_contribution: Decimal,
    start_date: NaiveDate,
) -> Option<GoalEstimate> {
    if target_amount <= Decimal::ZERO || monthly_contribution <= Decimal::ZERO {
        return None;
    }
    let months_needed = (target_amount / monthly_contribution).ceil().to_u32()?;
    let completion_date = start_date.checked_add_months(Months::new(months_needed))?;
    Some(GoalEstimate {
        months_needed,
        completion_date,
    })
}

pub fn completion_meets_deadline(estimate: &GoalEstimate, deadline: NaiveDate) -> bool {
    estimate.completion_date <= deadline
}

/// Smallest whole monthly contribution whose estimate still lands on or
/// before `deadline`. `None` when not even one full month fits in between.
pub fn required_monthly_for_deadline(
    target_amount: Decimal,
    start_date: NaiveDate,
    deadline: NaiveDate,
) -> Option<Decimal> {
    if target_amount <= Decimal::ZERO {
        return None;
    }
    let span = (deadline.year() - start_date.year()) * 12 + deadline.month() as i32
        - start_date.month() as i32;
    let mut months = u32::try_from(span).ok()?;
    // A later day of month in `start_date` costs one month
    while months > 0
        && start_date
            .checked_add_months(Months::new(months))
            .is_none_or(|d| d > deadline)
    {
        months -= 1;
    }
    if months == 0 {
        return None;
    }
    Some((target_amount / Decimal::from(months)).ceil())
}

pub fn goal_progress(goal: &SavingsGoal) -> GoalProgress {
    let progress_percentage = if goal.target_amount > Decimal::ZERO {
        goal.current_amount * Decimal::ONE_HUNDRED / goal.target_amount
    } else {
        Decimal::ZERO
    };
    let remaining_amount = (goal.target_amount - goal.current_amount).max(Decimal::ZERO);
    let months_remaining = if remaining_amount.is_zero() {
        Some(0)
    } else if goal.monthly_contribution > Decimal::ZERO {
        (remaining_amount / goal.monthly_contribution).ceil().to_u32()
    } else {
        None
    };
    GoalProgress {
        progress_percentage,
        remaining_amount,
        months_remaining,
    }
}

/// Amount deducted right away when a goal is created.
pub fn first_contribution(monthly_contribution: Decimal, target_amount: Decimal) -> Decimal {
    monthly_contribution.min(target_amount)
}

pub fn active_goal_count(goals: &[SavingsGoal]) -> usize {
    goals
        .iter()
        .filter(|g| g.status == GoalStatus::Active)
        .count()
}

pub fn can_add_active_goal(goals: &[SavingsGoal]) -> bool {
    active_goal_count(goals) < MAX_ACTIVE_GOALS
}

/// Plans one round of monthly contributions.
///
/// Every active goal below its target counts towards `total_required`, which
/// is checked against a third of the balance. Goals that already received a
/// contribution in `today`'s month are left out of the plan; the others get
/// their monthly contribution capped at what is still missing.
pub fn plan_monthly_contributions(
    goals: &[SavingsGoal],
    current_balance: Decimal,
    today: NaiveDate,
) -> ContributionPlan {
    let period = Period::current(today);
    let pending: Vec<&SavingsGoal> = goals
        .iter()
        .filter(|g| g.status == GoalStatus::Active && g.current_amount < g.target_amount)
        .collect();

    let total_required: Decimal = pending.iter().map(|g| g.monthly_contribution).sum();
    let one_third_balance = current_balance / Decimal::from(3);

    let mut contributions = Vec::new();
    for g in pending {
        if g
            .last_contribution_date
            .is_some_and(|d| period.contains_date(&d))
        {
            continue;
        }
        let amount = g.monthly_contribution.min(g.target_amount - g.current_amount);
        let new_total = g.current_amount + amount;
        contributions.push(PlannedContribution {
            goal_id: g.id,
            goal_name: g.name.clone(),
            amount,
            new_total,
            completes: new_total >= g.target_amount,
        });
    }
    let total_contributed = contributions.iter().map(|c| c.amount).sum();

    ContributionPlan {
        total_required,
        one_third_balance,
        requires_permission: total_required > one_third_balance,
        contributions,
        total_contributed,
    }
}
