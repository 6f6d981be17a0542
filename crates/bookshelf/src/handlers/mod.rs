pub mod authors;
pub mod books;
pub mod error;
pub mod root;

pub use error::AppError;
