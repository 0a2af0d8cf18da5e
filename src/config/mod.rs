// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, which selects the
//! storage backend and where logs are written.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "bookshelf";

/// Where the shelf is persisted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Backend {
    /// A local SQLite file holding the whole collection under a single key.
    #[default]
    Local,
    /// The Bookshelf REST API at [`AppConfig::api_url`].
    Remote,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) backend: Backend,
    pub(crate) database_file: String,
    pub(crate) api_url: String,
    pub(crate) log_file: String,
    pub(crate) log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            backend: Backend::Local,
            database_file: "bookshelf.db".to_string(),
            api_url: "http://localhost:9000".to_string(),
            log_file: "bookshelf.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
