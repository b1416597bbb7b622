//! Database access layer

pub mod repository;
