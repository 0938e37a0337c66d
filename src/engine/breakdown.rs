// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Category, Transaction};

pub const UNCATEGORIZED: &str = "(uncategorized)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category_id: Option<i64>,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub expenses: Vec<CategoryTotal>,
    pub income: Vec<CategoryTotal>,
}

/// Per-category totals of income and expenses, largest first.
pub fn spend_by_category(transactions: &[Transaction], categories: &[Category]) -> CategoryBreakdown {
    let names: HashMap<i64, &str> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();

    let mut expense_agg: BTreeMap<Option<i64>, Decimal> = BTreeMap::new();
    let mut income_agg: BTreeMap<Option<i64>, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| !t.amount.is_sign_negative()) {
        let agg = if t.is_income {
            &mut income_agg
        } else {
            &mut expense_agg
        };
        *agg.entry(t.category).or_insert(Decimal::ZERO) += t.amount;
    }

    let collect = |agg: BTreeMap<Option<i64>, Decimal>| -> Vec<CategoryTotal> {
        let mut items: Vec<CategoryTotal> = agg
            .into_iter()
            .map(|(id, amount)| CategoryTotal {
                category_id: id,
                name: match id {
                    Some(id) => names
                        .get(&id)
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| format!("Category #{}", id)),
                    None => UNCATEGORIZED.to_string(),
                },
                amount,
            })
            .collect();
        items.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
        items
    };

    CategoryBreakdown {
        expenses: collect(expense_agg),
        income: collect(income_agg),
    }
}
