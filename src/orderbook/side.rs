//! One side of the book: the dual-indexed price ladder.
//!
//! [`SideBook`] keeps two structures that must always agree:
//!
//! - A `BTreeMap` from price to the orders resting at that price, each
//!   level an insertion-ordered `IndexMap` (arrival order = time
//!   priority within the level)
//! - An `FxHashMap` from order id to the order, for O(1) lookup,
//!   removal, and size modification without scanning the ladder
//!
//! `SideBook` is not synchronized; [`OrderBook`](super::OrderBook)
//! wraps one per side in a `RwLock`, so every mutator here runs inside
//! a single critical section and the two indexes are never observed
//! half-updated.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::types::{Order, OrderId, Price, Quantity, Side};

/// Orders resting at one price, in arrival order.
///
/// Keyed by order id so a duplicate id overwrites the stored value
/// while keeping its arrival slot (`IndexMap::insert` preserves the
/// position of an existing key).
type Level = IndexMap<OrderId, Order, FxBuildHasher>;

/// One side's price ladder plus id index.
#[derive(Debug, Clone)]
pub(crate) struct SideBook {
    /// Which side this ladder holds; decides ranking direction
    side: Side,

    /// Price levels, sorted ascending by price.
    ///
    /// The bid side iterates this in reverse so the best (highest)
    /// level always comes first; the offer side iterates forward.
    levels: BTreeMap<OrderedFloat<Price>, Level>,

    /// Direct id -> order lookup, always in step with `levels`
    by_id: FxHashMap<OrderId, Order>,
}

impl SideBook {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            by_id: FxHashMap::default(),
        }
    }

    /// Insert an order, creating its price level if needed.
    ///
    /// An order with the same id already resting at this price is
    /// overwritten in place (last write wins, arrival slot kept). An
    /// id re-added at a different price moves to the new level; the
    /// two indexes never disagree on an order's recorded price.
    pub(crate) fn insert(&mut self, order: Order) {
        debug_assert_eq!(order.side, self.side);
        if let Some(prev) = self.by_id.insert(order.id, order) {
            // Same id arriving at a new price: its stale ladder entry
            // must not outlive the id index update
            if prev.price.to_bits() != order.price.to_bits() {
                let old_price = OrderedFloat(prev.price);
                if let Some(level) = self.levels.get_mut(&old_price) {
                    level.shift_remove(&order.id);
                    if level.is_empty() {
                        self.levels.remove(&old_price);
                    }
                }
            }
        }
        self.levels
            .entry(OrderedFloat(order.price))
            .or_default()
            .insert(order.id, order);
    }

    /// Remove an order by id from both indexes.
    ///
    /// Drops the price level once its last order is gone, so empty
    /// levels never show up in ranked queries. Returns the removed
    /// order, or `None` if the id is not resting on this side.
    pub(crate) fn remove(&mut self, order_id: OrderId) -> Option<Order> {
        let order = self.by_id.remove(&order_id)?;
        let price = OrderedFloat(order.price);
        if let Some(level) = self.levels.get_mut(&price) {
            // shift_remove keeps the arrival order of the survivors
            level.shift_remove(&order_id);
            if level.is_empty() {
                self.levels.remove(&price);
            }
        }
        Some(order)
    }

    /// Replace an order's stored value with the same order at a new
    /// size, keeping its arrival slot in the level.
    ///
    /// Returns the updated order, or `None` if the id is unknown.
    pub(crate) fn set_size(&mut self, order_id: OrderId, new_size: Quantity) -> Option<Order> {
        let updated = self.by_id.get(&order_id)?.with_size(new_size);
        self.by_id.insert(order_id, updated);
        if let Some(level) = self.levels.get_mut(&OrderedFloat(updated.price)) {
            level.insert(order_id, updated);
        }
        Some(updated)
    }

    /// Look up an order by id
    pub(crate) fn get(&self, order_id: OrderId) -> Option<Order> {
        self.by_id.get(&order_id).copied()
    }

    /// All orders on this side: best price level first, arrival order
    /// within each level.
    pub(crate) fn orders(&self) -> Vec<Order> {
        let mut out = Vec::with_capacity(self.by_id.len());
        match self.side {
            Side::Bid => {
                for level in self.levels.values().rev() {
                    out.extend(level.values().copied());
                }
            }
            Side::Offer => {
                for level in self.levels.values() {
                    out.extend(level.values().copied());
                }
            }
        }
        out
    }

    /// The level at 1-based rank `level` (1 = best price), or `None`
    /// if the rank is 0 or past the ladder depth.
    fn level_at(&self, level: usize) -> Option<(Price, &Level)> {
        if level < 1 {
            return None;
        }
        let nth = match self.side {
            Side::Bid => self.levels.iter().rev().nth(level - 1),
            Side::Offer => self.levels.iter().nth(level - 1),
        };
        nth.map(|(price, orders)| (price.into_inner(), orders))
    }

    /// Price at the given 1-based level rank
    pub(crate) fn price_at_level(&self, level: usize) -> Option<Price> {
        self.level_at(level).map(|(price, _)| price)
    }

    /// Aggregate displayed quantity at the given 1-based level rank
    pub(crate) fn size_at_level(&self, level: usize) -> Option<Quantity> {
        self.level_at(level)
            .map(|(_, orders)| orders.values().map(|order| order.size).sum())
    }

    /// Number of non-empty price levels
    pub(crate) fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Number of resting orders
    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
