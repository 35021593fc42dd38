use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

use crate::model::{BookRef, CustomerRef};

#[derive(Debug, Error)]
pub enum CartError {
    #[error("book not found in cart: {title}")]
    ItemNotFound { title: String },
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub customer: CustomerRef,
    pub items: Vec<BookRef>,
}

impl Cart {
    pub fn new(customer: CustomerRef) -> Self {
        Self {
            customer,
            items: Vec::new(),
        }
    }

    pub fn add_to_cart(&mut self, book: BookRef) {
        self.items.push(book);
    }

    /// Removes the first item that is the very same book as `book`.
    pub fn remove_from_cart(&mut self, book: &BookRef) -> Result<BookRef, CartError> {
        match self.items.iter().position(|item| Rc::ptr_eq(item, book)) {
            Some(idx) => Ok(self.items.remove(idx)),
            None => {
                let title = book.borrow().title.clone();
                debug!(%title, "remove from cart missed");
                Err(CartError::ItemNotFound { title })
            }
        }
    }

    pub fn items(&self) -> &[BookRef] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
