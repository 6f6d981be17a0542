mod types;

pub use types::{Author, Book, NewAuthor, NewBook};
