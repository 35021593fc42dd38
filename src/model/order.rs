use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::{BookRef, CustomerRef};

/// A purchase intent. Completing it does not touch the customer's purchases.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer: CustomerRef,
    pub book: BookRef,
    pub date: DateTime<Utc>,
    pub is_completed: bool,
}

impl Order {
    pub fn new(customer: CustomerRef, book: BookRef) -> Self {
        Self::with_date(customer, book, Utc::now())
    }

    pub fn with_date(customer: CustomerRef, book: BookRef, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer,
            book,
            date,
            is_completed: false,
        }
    }

    /// Returns `false` if the order was already completed.
    pub fn complete_order(&mut self) -> bool {
        if self.is_completed {
            return false;
        }
        self.is_completed = true;
        true
    }
}
