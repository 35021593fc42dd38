use crate::model::BookRef;

/// In-memory catalog of books, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DigitalLibrary {
    books: Vec<BookRef>,
}

impl DigitalLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: BookRef) {
        self.books.push(book);
    }

    /// Case-insensitive substring match on titles. An empty keyword matches
    /// every book.
    pub fn search_books(&self, keyword: &str) -> Vec<BookRef> {
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.borrow().title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn books(&self) -> &[BookRef] {
        &self.books
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookRef> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<BookRef> for DigitalLibrary {
    fn from_iter<I: IntoIterator<Item = BookRef>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}
