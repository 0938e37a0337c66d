// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::engine::{
    BalanceSummary, CategoryBreakdown, LimitEvaluation, LimitUsage, Period, SavingsImpact,
    compute_balance, compute_savings_impact, evaluate_category_limit, spend_by_category,
};
use crate::models::{Account, Category, CategoryLimit, SavingsGoal, Transaction};

#[derive(Debug, Clone, Serialize)]
pub struct LimitLine {
    pub limit_id: i64,
    pub category_id: i64,
    pub category: String,
    pub limit_amount: rust_decimal::Decimal,
    pub evaluation: LimitEvaluation,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub period: Period,
    pub balance: BalanceSummary,
    pub savings: SavingsImpact,
    pub breakdown: CategoryBreakdown,
    pub limits: Vec<LimitLine>,
}

pub struct DashboardInput<'a> {
    pub account: &'a Account,
    pub transactions: &'a [Transaction],
    pub goals: &'a [SavingsGoal],
    pub limits: &'a [CategoryLimit],
    pub categories: &'a [Category],
}

/// Every dashboard figure for `period`, from scratch.
pub fn summarize(input: &DashboardInput<'_>, period: Period) -> DashboardSummary {
    let in_period = period.filter(input.transactions);
    let balance = compute_balance(input.account, &in_period);
    let savings = compute_savings_impact(balance.balance, input.goals);
    let breakdown = spend_by_category(&in_period, input.categories);

    let limits = input
        .limits
        .iter()
        .map(|l| LimitLine {
            limit_id: l.id,
            category_id: l.category,
            category: l
                .category_name
                .clone()
                .or_else(|| {
                    input
                        .categories
                        .iter()
                        .find(|c| c.id == l.category)
                        .map(|c| c.name.clone())
                })
                .unwrap_or_else(|| format!("Category #{}", l.category)),
            limit_amount: l.limit_amount,
            evaluation: evaluate_category_limit(&LimitUsage::from_limit(l), None),
        })
        .collect();

    DashboardSummary {
        period,
        balance,
        savings,
        breakdown,
        limits,
    }
}
