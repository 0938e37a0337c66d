// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::LoginResponse;

/// The logged-in user's credentials. Loaded once at startup and handed to
/// whatever needs it; nothing reads the session file on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: i64,
    pub name: String,
}

impl Session {
    pub fn from_login(resp: LoginResponse) -> Self {
        Session {
            access_token: resp.access,
            refresh_token: resp.refresh,
            user_id: resp.user.id,
            name: resp.user.name,
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(crate::config::data_dir()?.join("session.json"))
    }

    pub fn load_from(path: &Path) -> Result<Option<Session>> {
        if !path.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        let session = serde_json::from_str(&s)
            .with_context(|| format!("Corrupt session file {}", path.display()))?;
        Ok(Some(session))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write session file {}", path.display()))?;
        Ok(())
    }

    pub fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove session file {}", path.display()))?;
        }
        Ok(())
    }
}
