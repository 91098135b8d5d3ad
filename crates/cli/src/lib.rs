//! Interactive glue around the catalog library.

pub mod confirm;

pub use confirm::StdinConfirmation;
