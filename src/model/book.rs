use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{AuthorRef, GenreRef};

/// Shared, mutable handle used for every cross-reference in the model.
pub type Shared<T> = Rc<RefCell<T>>;
pub type BookRef = Shared<Book>;

#[derive(Debug, Clone)]
pub struct Book {
    pub title: String,
    pub author: AuthorRef,
    pub price: f64,
    pub genre: GenreRef,
    pub publication_date: DateTime<Utc>,
    pub is_available: bool,
}

impl Book {
    pub fn new(
        title: String,
        author: AuthorRef,
        price: f64,
        genre: GenreRef,
        publication_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            author,
            price,
            genre,
            publication_date,
            is_available: true,
        }
    }

    pub fn into_shared(self) -> BookRef {
        Rc::new(RefCell::new(self))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_name(&self) -> String {
        self.author.borrow().name.clone()
    }

    pub fn genre_name(&self) -> String {
        self.genre.borrow().name.clone()
    }

    /// Scales the price by `1 - percentage / 100`.
    ///
    /// The percentage is not bounded: values above 100 drive the price
    /// negative and negative values raise it. Repeated calls compound.
    pub fn discount(&mut self, percentage: f64) {
        self.price *= 1.0 - percentage / 100.0;
    }
}
