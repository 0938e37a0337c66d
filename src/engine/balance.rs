// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::models::{Account, GoalStatus, SavingsGoal, Transaction};

/// A transaction left out of an aggregate because its data was unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub id: i64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceSummary {
    pub monthly_income: Decimal,
    pub extra_income: Decimal,
    pub expenses: Decimal,
    pub total_income: Decimal,
    pub balance: Decimal,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsImpact {
    pub total_contributions: Decimal,
    pub available_after_savings: Decimal,
}

/// Balance for one period: fixed monthly income plus income transactions,
/// minus expense transactions.
///
/// Records carrying a negative amount are not aggregated; they are listed in
/// `skipped` instead. The result does not depend on input order.
pub fn compute_balance(account: &Account, transactions: &[Transaction]) -> BalanceSummary {
    let monthly_income = account.income.unwrap_or(Decimal::ZERO);
    let mut extra_income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut skipped = Vec::new();

    for t in transactions {
        if t.amount.is_sign_negative() && !t.amount.is_zero() {
            warn!(id = t.id, amount = %t.amount, "skipping transaction with negative amount");
            skipped.push(SkippedRecord {
                id: t.id,
                reason: format!("negative amount {}", t.amount),
            });
            continue;
        }
        if t.is_income {
            extra_income += t.amount;
        } else {
            expenses += t.amount;
        }
    }
    skipped.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.reason.cmp(&b.reason)));

    let total_income = monthly_income + extra_income;
    BalanceSummary {
        monthly_income,
        extra_income,
        expenses,
        total_income,
        balance: total_income - expenses,
        skipped,
    }
}

/// What is left of `balance` once every active goal takes its monthly
/// contribution. A negative result is a valid state.
pub fn compute_savings_impact(balance: Decimal, goals: &[SavingsGoal]) -> SavingsImpact {
    let total_contributions: Decimal = goals
        .iter()
        .filter(|g| g.status == GoalStatus::Active)
        .map(|g| g.monthly_contribution)
        .sum();
    SavingsImpact {
        total_contributions,
        available_after_savings: balance - total_contributions,
    }
}
