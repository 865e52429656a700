//! Order-related types.
//!
//! This module contains the [`Side`] tag and the immutable [`Order`]
//! value the book stores on each side.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{OrderId, Price, Quantity};

/// Book side (bid or offer)
///
/// Bid orders rank by price descending (highest bid is best); offer
/// orders rank by price ascending (lowest offer is best). There is no
/// third value: any operation taking a `Side` is total, and untrusted
/// tags must come through [`Side::try_from`], which rejects anything
/// but `'B'` and `'O'` with [`Error::InvalidSide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy side - highest price is best
    Bid,
    /// Sell side - lowest price is best
    Offer,
}

impl Side {
    /// Get the opposite side
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Offer,
            Side::Offer => Side::Bid,
        }
    }

    /// The wire-style character tag for this side (`'B'` / `'O'`)
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Side::Bid => 'B',
            Side::Offer => 'O',
        }
    }
}

impl TryFrom<char> for Side {
    type Error = Error;

    /// Parse a character side tag, failing with [`Error::InvalidSide`]
    /// for anything but `'B'` (bid) or `'O'` (offer).
    fn try_from(tag: char) -> Result<Self, Error> {
        match tag {
            'B' => Ok(Side::Bid),
            'O' => Ok(Side::Offer),
            other => Err(Error::InvalidSide(other)),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Offer => write!(f, "offer"),
        }
    }
}

/// A resting limit order.
///
/// `Order` is an immutable value: size modification replaces the
/// stored order with a new value (see [`Order::with_size`]) rather than
/// mutating in place, so equality and hashing stay consistent across
/// the book's two indexes.
///
/// Equality and hashing cover all four fields. The price participates
/// bitwise (`f64::to_bits`), which makes `Eq`/`Hash` lawful and matches
/// the exact-price keying of the book's ladder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned id, unique within one side
    pub id: OrderId,
    /// Limit price
    pub price: Price,
    /// Which side of the book this order rests on
    pub side: Side,
    /// Displayed quantity
    pub size: Quantity,
}

impl Order {
    /// Create a new order value
    #[must_use]
    pub fn new(id: OrderId, price: Price, side: Side, size: Quantity) -> Self {
        Self {
            id,
            price,
            side,
            size,
        }
    }

    /// The same order with a different size.
    ///
    /// This is the replacement value used by size modification: id,
    /// price, and side are untouched, so the order keeps its arrival
    /// slot in its price level.
    #[must_use]
    pub fn with_size(self, size: Quantity) -> Self {
        Self { size, ..self }
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.price.to_bits() == other.price.to_bits()
            && self.side == other.side
            && self.size == other.size
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.price.to_bits().hash(state);
        self.side.hash(state);
        self.size.hash(state);
    }
}
