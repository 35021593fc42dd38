use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::CodecError;
use crate::model::{Author, Book, Genre};

/// Flat, persisted form of a book. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub genre: String,
    pub publication_date: String,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author_name(),
            price: book.price,
            genre: book.genre_name(),
            publication_date: format_date(book.publication_date),
        }
    }
}

impl BookRecord {
    /// Rebuilds a book around a fresh author (empty bio) and a fresh genre.
    /// Availability is not persisted, so the book comes back available.
    pub fn into_book(self) -> Result<Book, CodecError> {
        let publication_date = parse_date(&self.publication_date)?;
        Ok(Book::new(
            self.title,
            Author::new(self.author, String::new()).into_shared(),
            self.price,
            Genre::new(self.genre).into_shared(),
            publication_date,
        ))
    }
}

pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Accepts RFC 3339, a naive ISO-8601 date-time (taken as UTC) or a bare date.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, CodecError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|source| CodecError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
