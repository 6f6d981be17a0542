//! Core domain types and storage abstractions for the bookshelf catalog.
//!
//! This crate is I/O free. Concrete storage backends and the HTTP surface
//! live in the `bookshelf` binary crate and depend on the traits and types
//! defined here.

pub mod catalog;
pub mod storage;
