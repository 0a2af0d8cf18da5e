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

//! Local book store.
//!
//! The shelf is kept the way a browser keeps local storage: one key/value
//! table in a SQLite file, with the entire collection serialised as a JSON
//! array under [`STORAGE_KEY`].
//!
//! Every mutation reads the whole collection, changes it in memory and writes
//! it back in full. There is no incremental update and no locking, so a
//! single running instance is assumed.

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, warn};

use crate::{
    model::{Book, BookChanges, BookId, Filter, NewBook},
    store::{BookStore, StoreError},
};

pub(crate) const STORAGE_KEY: &str = "bookshelf_books";

pub(crate) struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Opens (or creates) the store file and configures the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The database file cannot be opened.
    /// * The journal mode cannot be switched to WAL.
    /// * The storage table cannot be created.
    pub(crate) fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;

        let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
        if journal_mode != "wal" {
            warn!(journal_mode, "WAL mode unavailable, continuing with current journal mode");
        }

        conn.execute_batch(
            "
            PRAGMA synchronous = NORMAL;

            CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
        ",
        )?;

        Ok(Self { conn })
    }

    /// Reads the whole collection.
    ///
    /// A missing key or a value that does not parse is treated as an empty
    /// shelf.
    fn load_books(&self) -> Result<Vec<Book>, StoreError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM storage WHERE key = ?")?;
        let value: Option<String> = stmt
            .query_row([STORAGE_KEY], |row| row.get(0))
            .optional()?;

        let Some(value) = value else {
            return Ok(vec![]);
        };

        match serde_json::from_str::<Vec<Book>>(&value) {
            Ok(books) => Ok(books),
            Err(e) => {
                warn!(error = %e, "stored shelf is unreadable, starting from an empty shelf");
                Ok(vec![])
            }
        }
    }

    /// Overwrites the whole collection.
    fn save_books(&self, books: &[Book]) -> Result<(), StoreError> {
        let value = serde_json::to_string(books)?;

        let sql = "
            INSERT INTO storage (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key)
            DO UPDATE SET value = ?2";

        let mut stmt = self.conn.prepare_cached(sql)?;
        stmt.execute(params![STORAGE_KEY, value])?;

        debug!(count = books.len(), "saved shelf");
        Ok(())
    }
}

impl BookStore for LocalStore {
    fn list(&self, filter: &Filter) -> Result<Vec<Book>, StoreError> {
        let books = self.load_books()?;
        Ok(books.into_iter().filter(|b| filter.matches(b)).collect())
    }

    fn get(&self, id: &BookId) -> Result<Book, StoreError> {
        self.load_books()?
            .into_iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn create(&self, new_book: NewBook) -> Result<Book, StoreError> {
        let mut books = self.load_books()?;

        let mut id = BookId::generate();
        while books.iter().any(|b| b.id == id) {
            id = BookId::generate();
        }

        let book = Book::from_new(id, new_book);
        books.push(book.clone());
        self.save_books(&books)?;

        Ok(book)
    }

    fn update(&self, id: &BookId, changes: BookChanges) -> Result<Book, StoreError> {
        let mut books = self.load_books()?;

        let book = books
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        book.apply(changes);
        let updated = book.clone();

        self.save_books(&books)?;

        Ok(updated)
    }

    fn delete(&self, id: &BookId) -> Result<(), StoreError> {
        let mut books = self.load_books()?;

        let before = books.len();
        books.retain(|b| &b.id != id);
        if books.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }

        self.save_books(&books)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn open_temp() -> (TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.db");
        let store = LocalStore::open(path.to_str().unwrap()).unwrap();
        (dir, store)
    }

    fn new_book(title: &str, finished: bool) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Someone".to_string(),
            year: 2001,
            finished,
        }
    }

    fn write_raw(store: &LocalStore, value: &str) {
        store
            .conn
            .execute(
                "INSERT INTO storage (key, value) VALUES (?1, ?2)
                 ON CONFLICT (key) DO UPDATE SET value = ?2",
                params![STORAGE_KEY, value],
            )
            .unwrap();
    }

    #[test]
    fn empty_store_lists_nothing() {
        let (_dir, store) = open_temp();
        assert!(store.list(&Filter::none()).unwrap().is_empty());
    }

    #[test]
    fn create_appends_one_record_with_submitted_flag() {
        let (_dir, store) = open_temp();
        store.create(new_book("First", false)).unwrap();

        let created = store.create(new_book("Second", true)).unwrap();
        let books = store.list(&Filter::none()).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[1], created);
        assert!(created.finished);
        assert_eq!(books[0].title, "First");
    }

    #[test]
    fn records_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.db");
        let path = path.to_str().unwrap();

        let created = LocalStore::open(path)
            .unwrap()
            .create(new_book("Dune", false))
            .unwrap();

        let reopened = LocalStore::open(path).unwrap();
        assert_eq!(reopened.get(&created.id).unwrap(), created);
    }

    #[test]
    fn corrupt_data_recovers_as_empty_shelf() {
        let (_dir, store) = open_temp();
        write_raw(&store, "{not json");

        assert!(store.list(&Filter::none()).unwrap().is_empty());

        store.create(new_book("Fresh", false)).unwrap();
        assert_eq!(store.list(&Filter::none()).unwrap().len(), 1);
    }

    #[test]
    fn reads_collection_written_by_older_clients() {
        let (_dir, store) = open_temp();
        write_raw(
            &store,
            r#"[{"id":"1700000000000-abc","name":"Laskar Pelangi","author":"Andrea Hirata","year":2005,"finished":true}]"#,
        );

        let book = store.get(&BookId::from("1700000000000-abc")).unwrap();
        assert_eq!(book.title, "Laskar Pelangi");
        assert_eq!(book.year, Some(2005));
        assert!(book.finished);
    }

    #[test]
    fn search_matches_title_substring_case_insensitively() {
        let (_dir, store) = open_temp();
        store.create(new_book("Foo", false)).unwrap();
        store.create(new_book("Foobar", true)).unwrap();
        store.create(new_book("Dune", false)).unwrap();

        let titles = |q: &str| -> Vec<String> {
            store
                .list(&Filter::new(q))
                .unwrap()
                .into_iter()
                .map(|b| b.title)
                .collect()
        };

        assert_eq!(titles("foo"), vec!["Foo", "Foobar"]);
        assert_eq!(titles("BAR"), vec!["Foobar"]);
        assert_eq!(titles("  "), vec!["Foo", "Foobar", "Dune"]);
    }

    #[test]
    fn toggle_changes_only_the_target() {
        let (_dir, store) = open_temp();
        let dune = store.create(new_book("Dune", false)).unwrap();
        let other = store.create(new_book("Emma", false)).unwrap();

        let updated = store.update(&dune.id, BookChanges::toggled(&dune)).unwrap();

        assert!(updated.finished);
        assert_eq!(updated.title, "Dune");
        assert_eq!(store.get(&other.id).unwrap(), other);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let (_dir, store) = open_temp();
        let a = store.create(new_book("A", false)).unwrap();
        let b = store.create(new_book("B", true)).unwrap();

        store.delete(&a.id).unwrap();

        let remaining = store.list(&Filter::none()).unwrap();
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn missing_ids_are_reported() {
        let (_dir, store) = open_temp();
        store.create(new_book("A", false)).unwrap();
        let missing = BookId::from("missing");

        let changes = BookChanges {
            title: "X".to_string(),
            author: String::new(),
            year: None,
            finished: false,
        };

        assert!(store.get(&missing).unwrap_err().is_not_found());
        assert!(store.update(&missing, changes).unwrap_err().is_not_found());
        assert!(store.delete(&missing).unwrap_err().is_not_found());
        assert_eq!(store.list(&Filter::none()).unwrap().len(), 1);
    }
}
