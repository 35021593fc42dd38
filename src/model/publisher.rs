use crate::model::BookRef;

/// Not linked from `Book`; a publisher only knows what it was told it published.
#[derive(Debug, Clone, Default)]
pub struct Publisher {
    pub name: String,
    pub books_published: Vec<BookRef>,
}

impl Publisher {
    pub fn new(name: String) -> Self {
        Self {
            name,
            books_published: Vec::new(),
        }
    }

    pub fn publish_book(&mut self, book: BookRef) {
        self.books_published.push(book);
    }
}
