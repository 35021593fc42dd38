use chrono::{DateTime, Utc};

use crate::model::{BookRef, CustomerRef};

/// The rating is stored as given; no range is enforced.
#[derive(Debug, Clone)]
pub struct Review {
    pub customer: CustomerRef,
    pub book: BookRef,
    pub rating: i32,
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl Review {
    pub fn new(customer: CustomerRef, book: BookRef, rating: i32, comment: String) -> Self {
        Self {
            customer,
            book,
            rating,
            comment,
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Book, Customer, Genre};

    #[test]
    fn test_review_keeps_out_of_range_rating() {
        let customer = Customer::new("Ada".to_string(), "ada@example.com".to_string(), 0.0);
        let book = Book::new(
            "Dune".to_string(),
            Author::new("Frank Herbert".to_string(), String::new()).into_shared(),
            20.0,
            Genre::new("SciFi".to_string()).into_shared(),
            Utc::now(),
        );
        let review = Review::new(
            customer.into_shared(),
            book.into_shared(),
            11,
            "Spice must flow".to_string(),
        );
        assert_eq!(review.rating, 11);
        assert_eq!(review.comment, "Spice must flow");
        assert!(review.date <= Utc::now());
    }
}
