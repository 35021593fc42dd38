use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{BookRef, Shared};

pub type GenreRef = Shared<Genre>;

/// Same caveat as `Author`: membership is whatever `add_book` was given.
#[derive(Debug, Clone, Default)]
pub struct Genre {
    pub name: String,
    pub books: Vec<BookRef>,
}

impl Genre {
    pub fn new(name: String) -> Self {
        Self {
            name,
            books: Vec::new(),
        }
    }

    pub fn into_shared(self) -> GenreRef {
        Rc::new(RefCell::new(self))
    }

    pub fn add_book(&mut self, book: &BookRef) {
        self.books.push(Rc::clone(book));
    }

    pub fn books(&self) -> &[BookRef] {
        &self.books
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Book};
    use chrono::Utc;

    #[test]
    fn test_added_books_are_kept() {
        let genre = Genre::new("SciFi".to_string()).into_shared();
        let author = Author::new("A".to_string(), String::new()).into_shared();
        let kept = Book::new("Kept".to_string(), author.clone(), 1.0, genre.clone(), Utc::now())
            .into_shared();
        genre.borrow_mut().add_book(&kept);
        {
            let scoped = Book::new("Scoped".to_string(), author, 1.0, genre.clone(), Utc::now())
                .into_shared();
            genre.borrow_mut().add_book(&scoped);
        }

        let genre = genre.borrow();
        assert_eq!(genre.books().len(), 2);
        assert!(Rc::ptr_eq(&genre.books()[0], &kept));
        assert_eq!(genre.books()[1].borrow().title, "Scoped");
    }

    #[test]
    fn test_add_book_does_not_set_book_genre() {
        let scifi = Genre::new("SciFi".to_string()).into_shared();
        let classic = Genre::new("Classic".to_string()).into_shared();
        let book = Book::new(
            "Emma".to_string(),
            Author::new("Jane Austen".to_string(), String::new()).into_shared(),
            5.0,
            classic.clone(),
            Utc::now(),
        )
        .into_shared();

        scifi.borrow_mut().add_book(&book);

        assert!(Rc::ptr_eq(&book.borrow().genre, &classic));
        assert!(classic.borrow().books().is_empty());
    }
}
