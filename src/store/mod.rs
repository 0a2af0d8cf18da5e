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

//! Record store.
//!
//! This module defines the [`BookStore`] contract shared by both persistence
//! backends and the error type they report.
//!
//! # Backends
//!
//! * [`local`]: the whole collection serialised under one key in a local
//!   SQLite file, rewritten in full on every mutation.
//! * [`remote`]: the Bookshelf REST API, one request per operation.

pub(crate) mod local;
pub(crate) mod remote;

use thiserror::Error;
use tracing::info;

use crate::{
    config::{AppConfig, Backend},
    model::{Book, BookChanges, BookId, Filter, NewBook},
    store::{local::LocalStore, remote::RemoteStore},
};

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("book {0} was not found")]
    NotFound(BookId),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("invalid book data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-2xx response, `message` is the service's own text.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl StoreError {
    pub(crate) fn is_not_found(&self) -> bool {
        match self {
            StoreError::NotFound(_) => true,
            StoreError::Api { status, .. } => *status == 404,
            _ => false,
        }
    }
}

/// The authoritative holder of the book records.
///
/// Every call goes to the backing storage; nothing is cached between calls.
/// Missing identifiers are always reported as errors.
pub(crate) trait BookStore {
    /// Returns all records matching `filter`, in insertion/arrival order.
    fn list(&self, filter: &Filter) -> Result<Vec<Book>, StoreError>;

    fn get(&self, id: &BookId) -> Result<Book, StoreError>;

    /// Stores a new record under a freshly allocated identifier.
    fn create(&self, new_book: NewBook) -> Result<Book, StoreError>;

    /// Replaces the mutable fields of an existing record.
    fn update(&self, id: &BookId, changes: BookChanges) -> Result<Book, StoreError>;

    fn delete(&self, id: &BookId) -> Result<(), StoreError>;
}

/// Opens the store selected by the configuration.
pub(crate) fn open_store(config: &AppConfig) -> Result<Box<dyn BookStore>, StoreError> {
    match config.backend {
        Backend::Local => {
            info!(path = %config.database_file, "opening local book store");
            Ok(Box::new(LocalStore::open(&config.database_file)?))
        }
        Backend::Remote => {
            info!(url = %config.api_url, "using remote book store");
            Ok(Box::new(RemoteStore::new(&config.api_url)?))
        }
    }
}
