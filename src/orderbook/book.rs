//! Core orderbook data structure.
//!
//! This implementation uses a `BTreeMap` price ladder per side,
//! providing:
//!
//! - O(log n) price level insertion, deletion, and lookup
//! - O(1) amortized order lookup by id (via a side-local `FxHashMap`)
//! - Ordered iteration for depth-of-book queries
//!
//! Each side is guarded by its own `parking_lot::RwLock`, so bid and
//! offer traffic never contend with each other.

use parking_lot::RwLock;
use tracing::trace;

use crate::types::{Order, OrderId, Price, Quantity, Side};

use super::side::SideBook;

/// A price-time priority limit order book for a single instrument.
///
/// # Design Decisions
///
/// 1. **Two indexes per side**: a sorted price ladder (price -> orders
///    in arrival order) plus an id -> order map. Both are updated in
///    the same critical section, so they can never be observed
///    disagreeing on membership or price.
///
/// 2. **Per-side locks**: mutations take the write lock of exactly one
///    side; bid and offer operations proceed fully in parallel.
///
/// 3. **Value-type orders**: size modification replaces the stored
///    [`Order`] with a new value, never mutating in place, so equality
///    and hashing stay coherent across the two indexes.
///
/// # Thread Safety
///
/// All operations take `&self`; share the book across threads via
/// `Arc<OrderBook>`. Queries return owned snapshots and never hold a
/// lock past the call.
///
/// # Example
///
/// ```rust
/// use limitbook::{Order, OrderBook, Side};
///
/// let book = OrderBook::new();
/// book.add_order(Order::new(1, 4.4, Side::Bid, 10));
/// book.add_order(Order::new(2, 4.7, Side::Bid, 10));
///
/// assert_eq!(book.price_at_level(Side::Bid, 1), Some(4.7));
/// assert_eq!(book.size_at_level(Side::Bid, 2), Some(10));
/// ```
#[derive(Debug)]
pub struct OrderBook {
    /// Bid side (buyers), best = highest price
    bids: RwLock<SideBook>,
    /// Offer side (sellers), best = lowest price
    offers: RwLock<SideBook>,
}

impl OrderBook {
    /// Create a new order book, empty on both sides
    #[must_use]
    pub fn new() -> Self {
        Self {
            bids: RwLock::new(SideBook::new(Side::Bid)),
            offers: RwLock::new(SideBook::new(Side::Offer)),
        }
    }

    fn side_book(&self, side: Side) -> &RwLock<SideBook> {
        match side {
            Side::Bid => &self.bids,
            Side::Offer => &self.offers,
        }
    }

    /// Insert an order into the side named by its `side` field.
    ///
    /// The price level is created on first use. An order with the same
    /// id already resting at that price is overwritten (last write
    /// wins) without losing its arrival slot; inserting a duplicate id
    /// is not an error.
    pub fn add_order(&self, order: Order) {
        self.side_book(order.side).write().insert(order);
        trace!(
            id = order.id,
            side = %order.side,
            price = order.price,
            size = order.size,
            "order added"
        );
    }

    /// Remove an order by id from whichever side holds it.
    ///
    /// The side is resolved Bid-first: if the same id rests on both
    /// sides, the bid order is the one removed. If removal empties the
    /// order's price level, the level disappears from ranked queries.
    /// An unknown id is a no-op returning `None`.
    pub fn remove_order(&self, order_id: OrderId) -> Option<Order> {
        let removed = {
            let mut bids = self.bids.write();
            bids.remove(order_id)
        }
        .or_else(|| self.offers.write().remove(order_id));

        if let Some(order) = removed {
            trace!(id = order.id, side = %order.side, "order removed");
        }
        removed
    }

    /// Replace the order with id `order_id` by the same order at
    /// `new_size`, preserving its position in its level's arrival
    /// order (size modification does not reset time priority).
    ///
    /// The side is resolved Bid-first, like [`remove_order`]. An
    /// unknown id is a no-op returning `None`. A zero size is stored
    /// as given; the book does not police sizes.
    ///
    /// [`remove_order`]: OrderBook::remove_order
    pub fn modify_size(&self, order_id: OrderId, new_size: Quantity) -> Option<Order> {
        let updated = {
            let mut bids = self.bids.write();
            bids.set_size(order_id, new_size)
        }
        .or_else(|| self.offers.write().set_size(order_id, new_size));

        if let Some(order) = updated {
            trace!(id = order.id, side = %order.side, size = order.size, "order resized");
        }
        updated
    }

    /// Snapshot of all orders on `side`, grouped by price level in the
    /// side's priority direction (descending prices for Bid, ascending
    /// for Offer) and in arrival order within each level.
    ///
    /// An empty side yields an empty vec.
    #[must_use]
    pub fn orders(&self, side: Side) -> Vec<Order> {
        self.side_book(side).read().orders()
    }

    /// Price of the `level`-th best non-empty price level on `side`
    /// (1-based, 1 = best). Returns `None` when `level` is 0 or
    /// exceeds the current number of levels.
    #[must_use]
    pub fn price_at_level(&self, side: Side, level: usize) -> Option<Price> {
        self.side_book(side).read().price_at_level(level)
    }

    /// Total displayed quantity at the `level`-th best price level on
    /// `side`, ranked as in [`price_at_level`]. Returns `None` when
    /// the level is absent.
    ///
    /// [`price_at_level`]: OrderBook::price_at_level
    #[must_use]
    pub fn size_at_level(&self, side: Side, level: usize) -> Option<Quantity> {
        self.side_book(side).read().size_at_level(level)
    }

    /// Look up a resting order by id, Bid side first
    #[must_use]
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        self.bids
            .read()
            .get(order_id)
            .or_else(|| self.offers.read().get(order_id))
    }

    /// Best price on `side`: highest bid or lowest offer
    #[must_use]
    pub fn best_price(&self, side: Side) -> Option<Price> {
        self.price_at_level(side, 1)
    }

    /// Number of non-empty price levels on `side`
    #[must_use]
    pub fn depth(&self, side: Side) -> usize {
        self.side_book(side).read().depth()
    }

    /// Number of resting orders on `side`
    #[must_use]
    pub fn order_count(&self, side: Side) -> usize {
        self.side_book(side).read().len()
    }

    /// Whether both sides are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.read().is_empty() && self.offers.read().is_empty()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
