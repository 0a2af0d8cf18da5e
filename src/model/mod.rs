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

//! Domain models and core data structures.
//!
//! This module defines the book record, the shapes used to create and change
//! records, and the title filter applied when listing the shelf.

pub(crate) mod progress;

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque record identifier.
///
/// Generated once when a record is created and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct BookId(String);

impl BookId {
    /// Generates a fresh identifier of the form `<unix-millis>-<random hex>`.
    pub(crate) fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let salt: u64 = rand::random();

        Self(format!("{}-{:x}", millis, salt))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single book on the shelf.
///
/// Field names on the wire follow the stored collection format, where the
/// title is kept under `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Book {
    pub(crate) id: BookId,
    #[serde(rename = "name")]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) author: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub(crate) year: Option<i32>,
    #[serde(default)]
    pub(crate) finished: bool,
}

impl Book {
    pub(crate) fn from_new(id: BookId, new_book: NewBook) -> Self {
        Self {
            id,
            title: new_book.title,
            author: new_book.author,
            year: Some(new_book.year),
            finished: new_book.finished,
        }
    }

    /// Overwrites every mutable field, the identifier is left untouched.
    pub(crate) fn apply(&mut self, changes: BookChanges) {
        self.title = changes.title;
        self.author = changes.author;
        self.year = changes.year;
        self.finished = changes.finished;
    }
}

/// Validated input for a record that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewBook {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: i32,
    pub(crate) finished: bool,
}

/// Replacement values for the mutable fields of an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BookChanges {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: Option<i32>,
    pub(crate) finished: bool,
}

impl BookChanges {
    /// Changes that flip the completion flag and keep everything else.
    pub(crate) fn toggled(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            finished: !book.finished,
        }
    }
}

/// Case-insensitive title filter.
///
/// Built from raw search text: surrounding whitespace is ignored and an empty
/// term means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Filter {
    term: Option<String>,
}

impl Filter {
    pub(crate) fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self {
            term: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    pub(crate) fn none() -> Self {
        Self::default()
    }

    pub(crate) fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub(crate) fn matches(&self, book: &Book) -> bool {
        match &self.term {
            Some(term) => book.title.to_lowercase().contains(term),
            None => true,
        }
    }
}

pub(crate) fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Parses user-entered year text.
///
/// Returns `None` for blank, non-numeric or zero input so callers can pick
/// their own fallback.
pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|year| *year != 0)
}

/// Accepts numbers, numeric strings or null for a stored year, anything
/// without a meaningful value becomes `None`.
pub(crate) fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    let year = match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Some(serde_json::Value::String(s)) => parse_year(&s),
        _ => None,
    };

    Ok(year.filter(|y| *y != 0))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn book(id: &str, title: &str, finished: bool) -> Book {
        Book {
            id: BookId::from(id),
            title: title.to_string(),
            author: String::new(),
            year: Some(2000),
            finished,
        }
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = BookId::generate();
        let b = BookId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().contains('-'));
    }

    #[test]
    fn filter_is_trimmed_and_case_insensitive() {
        let filter = Filter::new("  FOO ");
        assert_eq!(filter.term(), Some("foo"));
        assert!(filter.matches(&book("1", "Foobar", false)));
        assert!(!filter.matches(&book("2", "Dune", false)));
    }

    #[test]
    fn blank_filter_matches_everything() {
        let filter = Filter::new("   ");
        assert_eq!(filter, Filter::none());
        assert!(filter.matches(&book("1", "Anything", true)));
    }

    #[test]
    fn parse_year_rejects_blank_zero_and_garbage() {
        assert_eq!(parse_year(" 1965 "), Some(1965));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("0"), None);
        assert_eq!(parse_year("nineteen"), None);
    }

    #[test]
    fn toggled_changes_only_flip_completion() {
        let mut dune = book("1", "Dune", false);
        dune.author = "Herbert".to_string();

        let changes = BookChanges::toggled(&dune);
        let mut updated = dune.clone();
        updated.apply(changes);

        assert!(updated.finished);
        assert_eq!(updated.id, dune.id);
        assert_eq!(updated.title, dune.title);
        assert_eq!(updated.author, dune.author);
        assert_eq!(updated.year, dune.year);
    }

    #[test]
    fn stored_records_use_name_for_title() {
        let json = serde_json::to_value(book("1", "Dune", true)).unwrap();
        assert_eq!(json["name"], "Dune");
        assert_eq!(json["id"], "1");
        assert_eq!(json["finished"], true);
    }

    #[test]
    fn stored_years_without_value_become_none() {
        let records: Vec<Book> = serde_json::from_str(
            r#"[
                {"id": "a", "name": "A", "year": 0},
                {"id": "b", "name": "B", "year": null},
                {"id": "c", "name": "C", "year": "abc"},
                {"id": "d", "name": "D"},
                {"id": "e", "name": "E", "year": "1999"}
            ]"#,
        )
        .unwrap();

        let years: Vec<Option<i32>> = records.iter().map(|b| b.year).collect();
        assert_eq!(years, vec![None, None, None, None, Some(1999)]);
        assert!(records.iter().all(|b| b.author.is_empty() && !b.finished));
    }
}
