//! # limitbook
//!
//! An in-memory, price-time priority limit order book for trading
//! systems: the pricing/display layer a matching engine or market-data
//! publisher sits on top of.
//!
//! ## Features
//!
//! - **Price-time priority** - Better price ranks first; equal prices
//!   rank by arrival
//! - **O(1)-ish id lookup** - A per-side id index makes cancel and
//!   resize direct, no ladder scan
//! - **Per-side locking** - Bid and offer mutations never contend;
//!   each side's two indexes are updated in one critical section
//! - **Ranked level queries** - Price and aggregate size by 1-based
//!   level rank, best level = 1
//!
//! ## Quick Start
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
//! assert_eq!(book.price_at_level(Side::Bid, 1), Some(4.7));
//! assert_eq!(book.size_at_level(Side::Bid, 1), Some(10));
//!
//! book.modify_size(3, 15); // keeps time priority
//! book.remove_order(1);
//!
//! assert_eq!(book.price_at_level(Side::Bid, 2), Some(3.8));
//! ```
//!
//! ## Architecture
//!
//! - [`orderbook`] - The book itself: per-side dual-indexed ladders
//! - [`types`] - [`Order`], [`Side`], and scalar aliases
//! - [`error`] - The single contract error, [`Error::InvalidSide`]
//!
//! ## Scope
//!
//! One [`OrderBook`] instance holds one instrument's book. Matching,
//! trade generation, persistence, and transport live elsewhere; this
//! crate is only the storage and query structure.
//!
//! ## Performance
//!
//! - `BTreeMap` price ladders: O(log n) level operations, ordered
//!   iteration for depth queries
//! - `FxHashMap` id index (faster than std for small integer keys)
//! - `parking_lot` locks (no poisoning, spin-first)
//! - Queries return owned snapshots; no lock is held past a call

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod orderbook;
pub mod types;

// Re-export main types at crate root for convenience
pub use error::Error;
pub use orderbook::OrderBook;
pub use types::{Order, OrderId, Price, Quantity, Side};

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
