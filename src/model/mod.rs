pub mod author;
pub mod book;
pub mod cart;
pub mod customer;
pub mod discount_code;
pub mod genre;
pub mod library;
pub mod order;
pub mod publisher;
pub mod review;

pub use author::*;
pub use book::*;
pub use cart::*;
pub use customer::*;
pub use discount_code::*;
pub use genre::*;
pub use library::*;
pub use order::*;
pub use publisher::*;
pub use review::*;
