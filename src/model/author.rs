use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{BookRef, Shared};

pub type AuthorRef = Shared<Author>;

/// A writer and the books explicitly attributed to them through `add_book`.
///
/// The list is not kept in sync with `Book::author`. Adding a book whose
/// `author` points back here forms an `Rc` cycle that is never freed.
#[derive(Debug, Clone, Default)]
pub struct Author {
    pub name: String,
    pub bio: String,
    pub books: Vec<BookRef>,
}

impl Author {
    pub fn new(name: String, bio: String) -> Self {
        Self {
            name,
            bio,
            books: Vec::new(),
        }
    }

    pub fn into_shared(self) -> AuthorRef {
        Rc::new(RefCell::new(self))
    }

    pub fn add_book(&mut self, book: &BookRef) {
        self.books.push(Rc::clone(book));
    }

    pub fn books(&self) -> &[BookRef] {
        &self.books
    }
}
