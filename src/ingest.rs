// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record-by-record decoding of list responses.
//!
//! One malformed record must not throw away the whole list, so each element
//! is decoded on its own and failures are reported next to the good records.

use anyhow::{Result, anyhow};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    pub index: usize,
    pub id: Option<i64>,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Ingested<T> {
    pub records: Vec<T>,
    pub rejected: Vec<Rejected>,
}

impl<T> Ingested<T> {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Decodes a JSON array, or an object wrapping one under `data`.
pub fn decode_records<T: DeserializeOwned>(value: Value) -> Result<Ingested<T>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return Err(anyhow!("Expected a list of records")),
        },
        other => return Err(anyhow!("Expected a list of records, got {}", kind(&other))),
    };

    let mut records = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let id = item.get("id").and_then(Value::as_i64);
        match serde_json::from_value::<T>(item) {
            Ok(r) => records.push(r),
            Err(e) => {
                warn!(index, ?id, error = %e, "rejecting malformed record");
                rejected.push(Rejected {
                    index,
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(Ingested { records, rejected })
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
