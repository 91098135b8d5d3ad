//! Orders domain module.
//!
//! Business rules for placing orders against catalog stock (no IO, no HTTP,
//! no storage).

pub mod order;

pub use order::Order;
