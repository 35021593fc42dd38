use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::model::BookRef;

/// A use-once percentage discount valid until `expiry_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountCode {
    pub code: String,
    pub percentage: f64,
    pub expiry_date: DateTime<Utc>,
    pub is_used: bool,
}

impl DiscountCode {
    pub fn new(code: String, percentage: f64, expiry_date: DateTime<Utc>) -> Self {
        Self {
            code,
            percentage,
            expiry_date,
            is_used: false,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry_date
    }

    pub fn apply_discount(&mut self, book: &BookRef) -> bool {
        self.apply_discount_at(book, Utc::now())
    }

    /// Discounts `book` unless the code is spent or expired at `now`.
    /// Returns whether the discount was applied.
    pub fn apply_discount_at(&mut self, book: &BookRef, now: DateTime<Utc>) -> bool {
        if self.is_used {
            debug!(code = %self.code, "discount code already used");
            return false;
        }
        if self.is_expired_at(now) {
            debug!(code = %self.code, expiry = %self.expiry_date, "discount code expired");
            return false;
        }

        let mut target = book.borrow_mut();
        target.discount(self.percentage);
        self.is_used = true;
        info!(code = %self.code, title = %target.title, price = target.price, "discount applied");
        true
    }
}
