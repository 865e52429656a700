//! Price-time priority order book.
//!
//! This module provides the [`OrderBook`] structure: two independently
//! locked sides, each a dual-indexed price ladder keeping price-level
//! ordering, within-level arrival ordering, and direct id lookup
//! mutually consistent under concurrent mutation.
//!
//! # Example
//!
//! ```rust
//! use limitbook::{Order, OrderBook, Side};
//!
//! let book = OrderBook::new();
//!
//! book.add_order(Order::new(1, 4.4, Side::Bid, 10));
//! book.add_order(Order::new(2, 4.7, Side::Bid, 10));
//! book.add_order(Order::new(3, 3.8, Side::Bid, 10));
//!
//! // Best bid first, arrival order within a level
//! let ids: Vec<u64> = book.orders(Side::Bid).iter().map(|o| o.id).collect();
//! assert_eq!(ids, vec![2, 1, 3]);
//! ```

pub mod book;
mod side;

pub use book::OrderBook;
