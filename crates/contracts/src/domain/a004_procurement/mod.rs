pub mod aggregate;
pub mod book;
pub mod error;
