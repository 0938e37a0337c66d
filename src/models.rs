// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub income: Option<Decimal>, // monthly
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A single income or expense record. `amount` is always a magnitude; the
/// direction comes from `is_income`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub category: Option<i64>,
    pub amount: Decimal,
    pub is_income: bool,
    #[serde(deserialize_with = "crate::utils::de_datetime")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitStatus {
    pub total_spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
    pub exceeded: bool,
    pub warning: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLimit {
    pub id: i64,
    pub category: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    pub limit_amount: Decimal, // monthly
    #[serde(default)]
    pub current_spending: Option<LimitStatus>,
}

/// Answer of the per-category spending lookup used before a transaction is
/// submitted. Limit fields are only present when `has_limit` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub has_limit: bool,
    pub total_spent: Decimal,
    #[serde(default)]
    pub limit_amount: Option<Decimal>,
}

/// Authoritative limit evaluation attached to a saved transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitCheck {
    #[serde(default)]
    pub has_limit: Option<bool>,
    pub exceeded: bool,
    pub warning: bool,
    pub percentage: Decimal,
    pub limit_amount: Decimal,
    pub total_spent: Decimal,
    pub remaining: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(default)]
    pub limit_check: Option<LimitCheck>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub monthly_contribution: Decimal,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub current_amount: Decimal,
    #[serde(default)]
    pub progress_percentage: Decimal,
    #[serde(default)]
    pub is_on_track: bool,
    #[serde(default)]
    pub months_remaining: Option<i64>,
    #[serde(default)]
    pub last_contribution_date: Option<NaiveDate>,
    pub status: GoalStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGoal {
    #[serde(flatten)]
    pub goal: SavingsGoal,
    #[serde(default)]
    pub first_contribution_processed: bool,
    #[serde(default)]
    pub contribution_amount: Option<Decimal>,
}

// Request bodies

#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub name: String,
    pub income: Decimal,
    pub birthday: NaiveDate,
    pub password: String,
    pub repassword: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub user_id: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub user: i64,
    pub category: Option<i64>,
    pub amount: Decimal,
    pub description: String,
    pub is_income: bool,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_income: Option<bool>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
            && self.is_income.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCategoryLimit {
    pub category: i64,
    pub limit_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalRequest {
    pub name: String,
    pub target_amount: Decimal,
    pub monthly_contribution: Decimal,
    pub deadline: Option<NaiveDate>,
    pub force_create: bool,
}

/// Filters accepted by the history endpoint. Empty fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub amount: Option<Decimal>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub description: Option<String>,
    pub is_income: Option<bool>,
    pub category_id: Option<i64>,
}

impl HistoryFilter {
    pub fn query_pairs(&self, user_id: i64) -> Vec<(&'static str, String)> {
        let mut q = vec![("user_id", user_id.to_string())];
        if let Some(a) = self.amount {
            q.push(("amount", a.to_string()));
        }
        if let Some(d) = self.date_from {
            q.push(("date_from", d.to_string()));
        }
        if let Some(d) = self.date_to {
            q.push(("date_to", d.to_string()));
        }
        if let Some(ref s) = self.description {
            q.push(("description", s.clone()));
        }
        if let Some(inc) = self.is_income {
            q.push(("is_income", if inc { "1" } else { "0" }.to_string()));
        }
        if let Some(c) = self.category_id {
            q.push(("category_id", c.to_string()));
        }
        q
    }
}

// Two-step confirmation payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfirmationRequest {
    #[serde(default)]
    pub message: String,
    pub current_balance: Decimal,
    pub monthly_contribution: Decimal,
    pub one_third_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionGuard {
    #[serde(default)]
    pub message: String,
    pub current_balance: Decimal,
    pub total_contribution: Decimal,
    pub one_third_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionResult {
    pub goal_id: i64,
    pub goal_name: String,
    pub contribution_amount: Decimal,
    pub new_total: Decimal,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionReport {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub contributions: Vec<ContributionResult>,
    #[serde(default)]
    pub total_contributed: Decimal,
}
