//! Core value types for the order book.
//!
//! This module contains the plain-data types the book stores and
//! returns:
//!
//! - [`order`] - The [`Order`](order::Order) value type and [`Side`](order::Side) tag
//!
//! plus the scalar aliases used throughout the crate.

pub mod order;

pub use order::{Order, Side};

/// Limit price of a resting order.
///
/// Prices are plain `f64` on the public surface; internally the book
/// keys its ladder on the exact bit pattern, so two orders rest at the
/// same level only when their prices compare bitwise equal.
pub type Price = f64;

/// Displayed quantity of an order.
///
/// `u64` makes negative sizes unrepresentable; zero is accepted and
/// stored as given (the book does not police sizes).
pub type Quantity = u64;

/// Caller-assigned order identifier.
///
/// Ids are only guaranteed unique within one side; the same id may
/// rest on both sides, in which case id lookups resolve Bid first.
pub type OrderId = u64;
