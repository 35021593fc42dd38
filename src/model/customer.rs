use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{info, warn};

use crate::model::{BookRef, Shared};

pub type CustomerRef = Shared<Customer>;

/// Result of a purchase attempt. Business-rule failures are values, not errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PurchaseOutcome {
    Purchased,
    Unavailable,
    InsufficientFunds { balance: f64, price: f64 },
}

impl PurchaseOutcome {
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased)
    }
}

impl fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseOutcome::Purchased => write!(f, "purchased"),
            PurchaseOutcome::Unavailable => write!(f, "book is not available"),
            PurchaseOutcome::InsufficientFunds { balance, price } => {
                write!(f, "insufficient funds: balance {balance:.2}, price {price:.2}")
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub balance: f64,
    pub purchases: Vec<BookRef>,
}

impl Customer {
    pub fn new(name: String, email: String, balance: f64) -> Self {
        Self {
            name,
            email,
            balance,
            purchases: Vec::new(),
        }
    }

    pub fn into_shared(self) -> CustomerRef {
        Rc::new(RefCell::new(self))
    }

    pub fn purchases(&self) -> &[BookRef] {
        &self.purchases
    }

    /// Attempts to buy `book`.
    ///
    /// Availability is checked before funds. On success the balance is
    /// debited, the book is appended to the purchases and flagged
    /// unavailable; on failure nothing changes and the reason is logged.
    /// The outcome is returned for callers that want to react, but a failed
    /// purchase never aborts the caller.
    pub fn buy_book(&mut self, book: &BookRef) -> PurchaseOutcome {
        let outcome = {
            let mut target = book.borrow_mut();
            if !target.is_available {
                PurchaseOutcome::Unavailable
            } else if self.balance < target.price {
                PurchaseOutcome::InsufficientFunds {
                    balance: self.balance,
                    price: target.price,
                }
            } else {
                self.balance -= target.price;
                target.is_available = false;
                PurchaseOutcome::Purchased
            }
        };

        let title = book.borrow().title.clone();
        match outcome {
            PurchaseOutcome::Purchased => {
                self.purchases.push(Rc::clone(book));
                info!(customer = %self.name, %title, balance = self.balance, "book purchased");
            }
            PurchaseOutcome::Unavailable | PurchaseOutcome::InsufficientFunds { .. } => {
                warn!(customer = %self.name, %title, reason = %outcome, "purchase failed");
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Book, Genre};
    use chrono::Utc;

    fn book(price: f64) -> BookRef {
        Book::new(
            "Dune".to_string(),
            Author::new("Frank Herbert".to_string(), String::new()).into_shared(),
            price,
            Genre::new("SciFi".to_string()).into_shared(),
            Utc::now(),
        )
        .into_shared()
    }

    fn customer(balance: f64) -> Customer {
        Customer::new("Ada".to_string(), "ada@example.com".to_string(), balance)
    }

    #[test]
    fn test_buy_book_success() {
        let dune = book(20.0);
        let mut ada = customer(50.0);

        let outcome = ada.buy_book(&dune);

        assert_eq!(outcome, PurchaseOutcome::Purchased);
        assert!((ada.balance - 30.0).abs() < 1e-12);
        assert!(!dune.borrow().is_available);
        assert_eq!(ada.purchases().len(), 1);
        assert!(Rc::ptr_eq(&ada.purchases()[0], &dune));
    }

    #[test]
    fn test_buy_book_exact_balance() {
        let dune = book(20.0);
        let mut ada = customer(20.0);
        assert!(ada.buy_book(&dune).is_purchased());
        assert_eq!(ada.balance, 0.0);
    }

    #[test]
    fn test_buy_book_unavailable_leaves_state() {
        let dune = book(20.0);
        dune.borrow_mut().is_available = false;
        let mut ada = customer(50.0);

        let outcome = ada.buy_book(&dune);

        assert_eq!(outcome, PurchaseOutcome::Unavailable);
        assert_eq!(ada.balance, 50.0);
        assert!(ada.purchases().is_empty());
        assert!(!dune.borrow().is_available);
    }

    #[test]
    fn test_buy_book_insufficient_funds_leaves_state() {
        let dune = book(20.0);
        let mut ada = customer(19.99);

        let outcome = ada.buy_book(&dune);

        assert!(matches!(outcome, PurchaseOutcome::InsufficientFunds { .. }));
        assert_eq!(ada.balance, 19.99);
        assert!(ada.purchases().is_empty());
        assert!(dune.borrow().is_available);
    }

    #[test]
    fn test_unavailable_checked_before_funds() {
        let dune = book(20.0);
        dune.borrow_mut().is_available = false;
        let mut broke = customer(0.0);
        assert_eq!(broke.buy_book(&dune), PurchaseOutcome::Unavailable);
    }

    #[test]
    fn test_second_purchase_of_same_book_fails() {
        let dune = book(20.0);
        let mut ada = customer(100.0);
        let mut bob = customer(100.0);

        assert!(ada.buy_book(&dune).is_purchased());
        assert_eq!(bob.buy_book(&dune), PurchaseOutcome::Unavailable);
        assert_eq!(bob.balance, 100.0);
        assert_eq!(ada.purchases().len(), 1);
    }
}
