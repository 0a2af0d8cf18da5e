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

//! Remote book store.
//!
//! This module talks to the Bookshelf REST API with a blocking HTTP client.
//! Each store operation issues its own requests; nothing is batched or cached
//! and there is no optimistic local state.
//!
//! # Endpoints
//!
//! * `GET /books?finished={0|1}` / `GET /books?name={q}` - summary projection.
//! * `GET /books/{id}` - one full record.
//! * `POST /books`, `PUT /books/{id}` - full record body.
//! * `DELETE /books/{id}`.
//!
//! Non-2xx responses carry `{ message }`, which is passed through verbatim.

use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    model::{Book, BookChanges, BookId, Filter, NewBook, lenient_year, progress::ReadingProgress},
    store::{BookStore, StoreError},
};

/// A book as the remote service stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RemoteBook {
    id: BookId,
    name: String,
    #[serde(default, deserialize_with = "lenient_year")]
    year: Option<i32>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    finished: bool,
    #[serde(flatten)]
    progress: ReadingProgress,
}

impl RemoteBook {
    fn from_new(id: BookId, new_book: NewBook) -> Self {
        Self {
            id,
            progress: ReadingProgress::new(new_book.finished),
            name: new_book.title,
            year: Some(new_book.year),
            author: new_book.author,
            finished: new_book.finished,
        }
    }

    fn apply(&mut self, changes: BookChanges) {
        self.name = changes.title;
        self.author = changes.author;
        self.year = changes.year;
        self.finished = changes.finished;
        self.progress.derive_from(self.finished);
    }

    fn into_book(self) -> Book {
        if !self.progress.is_consistent_with(self.finished) {
            debug!(id = %self.id, "reading progress disagrees with completion flag");
        }

        Book {
            id: self.id,
            title: self.name,
            author: self.author,
            year: self.year,
            finished: self.finished,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct BooksData {
    books: Vec<BookSummary>,
}

/// List endpoints only return `{ id, name, publisher }`, the id is all that
/// is needed to fetch the full record.
#[derive(Deserialize)]
struct BookSummary {
    id: BookId,
}

#[derive(Deserialize)]
struct BookData {
    book: RemoteBook,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub(crate) struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    pub(crate) fn new(base_url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: &BookId) -> String {
        format!("{}/books/{}", self.base_url, id)
    }

    fn fetch_summaries(&self, query: &[(&str, &str)]) -> Result<Vec<BookSummary>, StoreError> {
        let response = self.client.get(self.books_url()).query(query).send()?;
        let envelope: Envelope<BooksData> = check(response)?.json()?;

        Ok(envelope.data.books)
    }

    fn fetch_book(&self, id: &BookId) -> Result<RemoteBook, StoreError> {
        let response = self.client.get(self.book_url(id)).send()?;
        let envelope: Envelope<BookData> = check(response)?.json()?;

        Ok(envelope.data.book)
    }
}

impl BookStore for RemoteStore {
    /// Lists the shelf, unfinished books first when unfiltered.
    ///
    /// The list endpoints only return a summary projection and the API has no
    /// bulk detail endpoint, so every listed book costs one more sequential
    /// `GET /books/{id}`. An unfiltered list is therefore `N + 2` requests, a
    /// filtered one `N + 1`.
    fn list(&self, filter: &Filter) -> Result<Vec<Book>, StoreError> {
        let summaries = match filter.term() {
            Some(term) => self.fetch_summaries(&[("name", term)])?,
            None => {
                let mut summaries = self.fetch_summaries(&[("finished", "0")])?;
                summaries.extend(self.fetch_summaries(&[("finished", "1")])?);
                summaries
            }
        };

        debug!(count = summaries.len(), "fetching book details one by one");

        let mut books = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let book = self.fetch_book(&summary.id)?.into_book();
            // The server-side name match is not guaranteed to ignore case.
            if filter.matches(&book) {
                books.push(book);
            }
        }

        Ok(books)
    }

    fn get(&self, id: &BookId) -> Result<Book, StoreError> {
        Ok(self.fetch_book(id)?.into_book())
    }

    fn create(&self, new_book: NewBook) -> Result<Book, StoreError> {
        let mut remote = RemoteBook::from_new(BookId::generate(), new_book);

        let response = self.client.post(self.books_url()).json(&remote).send()?;
        let body = check(response)?.text()?;

        // The service may allocate its own identifier.
        let assigned = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.pointer("/data/bookId")?.as_str().map(BookId::from));
        if let Some(id) = assigned {
            remote.id = id;
        }

        Ok(remote.into_book())
    }

    fn update(&self, id: &BookId, changes: BookChanges) -> Result<Book, StoreError> {
        let mut remote = self.fetch_book(id)?;
        remote.apply(changes);

        let response = self.client.put(self.book_url(id)).json(&remote).send()?;
        check(response)?;

        Ok(remote.into_book())
    }

    fn delete(&self, id: &BookId) -> Result<(), StoreError> {
        let response = self.client.delete(self.book_url(id)).send()?;
        check(response)?;

        Ok(())
    }
}

/// Turns a non-2xx response into [`StoreError::Api`], keeping the service's
/// message when the body has one.
fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .map(|body| body.message)
        .unwrap_or_else(|_| fallback_message(status));

    Err(StoreError::Api {
        status: status.as_u16(),
        message,
    })
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
