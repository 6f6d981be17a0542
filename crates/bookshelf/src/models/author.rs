use serde::{Deserialize, Serialize};

use bookshelf_core::catalog;

/// An author as exposed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Request payload for creating a new author.
#[derive(Debug, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
}

impl CreateAuthor {
    /// Converts the create request into a draft for the repository.
    pub fn into_new_author(self) -> catalog::NewAuthor {
        catalog::NewAuthor::new(self.name)
    }
}

impl From<catalog::Author> for Author {
    fn from(author: catalog::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}
