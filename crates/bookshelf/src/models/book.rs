use serde::{Deserialize, Serialize};

use bookshelf_core::catalog;

/// A book as exposed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
}

/// Request payload for creating a new book.
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author_id: i64,
}

impl CreateBook {
    /// Converts the create request into a draft for the repository.
    pub fn into_new_book(self) -> catalog::NewBook {
        catalog::NewBook::new(self.title, self.author_id)
    }
}

impl From<catalog::Book> for Book {
    fn from(book: catalog::Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
        }
    }
}
