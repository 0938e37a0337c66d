// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryLimit, CategorySpending};

/// Usage at or above this share of the limit raises a warning.
pub const WARNING_PERCENTAGE: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitUsage {
    pub limit_amount: Decimal,
    pub total_spent: Decimal,
}

impl LimitUsage {
    pub fn from_limit(limit: &CategoryLimit) -> Self {
        LimitUsage {
            limit_amount: limit.limit_amount,
            total_spent: limit
                .current_spending
                .as_ref()
                .map(|s| s.total_spent)
                .unwrap_or(Decimal::ZERO),
        }
    }

    /// `None` when the category has no limit configured.
    pub fn from_spending(spending: &CategorySpending) -> Option<Self> {
        if !spending.has_limit {
            return None;
        }
        spending.limit_amount.map(|limit_amount| LimitUsage {
            limit_amount,
            total_spent: spending.total_spent,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitEvaluation {
    pub percentage: Decimal,
    pub remaining: Decimal,
    pub warning: bool,
    pub exceeded: bool,
}

/// Evaluates spending against a monthly category limit, optionally counting
/// an amount that is about to be submitted.
///
/// Only spending strictly above the limit counts as exceeded; the warning
/// band starts at exactly 80% and ends where `exceeded` begins. Percentages
/// above 100 are kept as they are.
pub fn evaluate_category_limit(usage: &LimitUsage, proposed: Option<Decimal>) -> LimitEvaluation {
    let spent = usage.total_spent + proposed.unwrap_or(Decimal::ZERO);
    let percentage = if usage.limit_amount > Decimal::ZERO {
        spent * Decimal::ONE_HUNDRED / usage.limit_amount
    } else {
        Decimal::ZERO
    };
    let exceeded = spent > usage.limit_amount;
    LimitEvaluation {
        percentage,
        remaining: usage.limit_amount - spent,
        warning: percentage >= WARNING_PERCENTAGE && !exceeded,
        exceeded,
    }
}

/// What to do with an expense before it is submitted, given its limit
/// evaluation and whether the user passed an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitVerdict {
    Proceed,
    Warn,
    /// Over the limit and overridden.
    Forced,
    Blocked,
}

pub fn predictive_verdict(eval: &LimitEvaluation, force: bool) -> LimitVerdict {
    match (eval.exceeded, force) {
        (true, false) => LimitVerdict::Blocked,
        (true, true) => LimitVerdict::Forced,
        _ if eval.warning => LimitVerdict::Warn,
        _ => LimitVerdict::Proceed,
    }
}
