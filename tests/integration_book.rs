//! End-to-end tests for the order book.
//!
//! Covers price-time priority on both sides, removal and resize
//! semantics, ranked level queries, the invalid-side contract, and
//! concurrent mutation from multiple threads.
//!
//! # Running
//!
//! ```bash
//! cargo test --test integration_book
//! ```

use std::sync::Arc;
use std::thread;

use limitbook::{Error, Order, OrderBook, Side};

fn ids(orders: &[Order]) -> Vec<u64> {
    orders.iter().map(|o| o.id).collect()
}

/// A book with the canonical four-order fixture on one side:
/// (1, 4.4), (2, 4.7), (3, 3.8), (4, 3.8), all size 10.
fn fixture(side: Side) -> OrderBook {
    let book = OrderBook::new();
    book.add_order(Order::new(1, 4.4, side, 10));
    book.add_order(Order::new(2, 4.7, side, 10));
    book.add_order(Order::new(3, 3.8, side, 10));
    book.add_order(Order::new(4, 3.8, side, 10));
    book
}

#[test]
fn bid_orders_ranked_highest_price_first_then_arrival() {
    let book = fixture(Side::Bid);

    let orders = book.orders(Side::Bid);
    assert_eq!(ids(&orders), vec![2, 1, 3, 4]);

    assert_eq!(book.price_at_level(Side::Bid, 1), Some(4.7));
    assert_eq!(book.price_at_level(Side::Bid, 2), Some(4.4));
    assert_eq!(book.price_at_level(Side::Bid, 3), Some(3.8));
    assert_eq!(book.price_at_level(Side::Bid, 4), None);
}

#[test]
fn offer_orders_ranked_lowest_price_first_then_arrival() {
    let book = fixture(Side::Offer);

    let orders = book.orders(Side::Offer);
    assert_eq!(ids(&orders), vec![3, 4, 1, 2]);

    assert_eq!(book.price_at_level(Side::Offer, 1), Some(3.8));
    assert_eq!(book.price_at_level(Side::Offer, 2), Some(4.4));
    assert_eq!(book.price_at_level(Side::Offer, 3), Some(4.7));
}

#[test]
fn empty_side_yields_empty_snapshot_and_absent_levels() {
    let book = OrderBook::new();

    assert!(book.orders(Side::Offer).is_empty());
    assert_eq!(book.price_at_level(Side::Offer, 1), None);
    assert_eq!(book.size_at_level(Side::Offer, 1), None);
}

#[test]
fn remove_offer_order_by_id() {
    let book = fixture(Side::Offer);

    book.remove_order(4);

    assert_eq!(ids(&book.orders(Side::Offer)), vec![3, 1, 2]);
}

#[test]
fn remove_bid_order_leaves_other_side_untouched() {
    let book = OrderBook::new();
    book.add_order(Order::new(1, 4.4, Side::Offer, 10));
    book.add_order(Order::new(2, 4.7, Side::Bid, 10));
    book.add_order(Order::new(3, 3.8, Side::Bid, 10));
    book.add_order(Order::new(4, 3.8, Side::Bid, 10));

    book.remove_order(4);

    assert_eq!(ids(&book.orders(Side::Bid)), vec![2, 3]);
    assert_eq!(book.orders(Side::Offer).len(), 1);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let book = OrderBook::new();
    book.add_order(Order::new(1, 4.4, Side::Offer, 10));
    book.add_order(Order::new(2, 4.7, Side::Bid, 10));
    book.add_order(Order::new(3, 3.8, Side::Bid, 10));
    book.add_order(Order::new(4, 3.8, Side::Bid, 10));

    assert_eq!(book.remove_order(100), None);

    assert_eq!(ids(&book.orders(Side::Bid)), vec![2, 3, 4]);
    assert_eq!(ids(&book.orders(Side::Offer)), vec![1]);
}

#[test]
fn removing_a_levels_last_order_drops_the_level() {
    let book = fixture(Side::Bid);

    book.remove_order(2); // sole order at 4.7

    assert_eq!(book.depth(Side::Bid), 2);
    assert_eq!(book.price_at_level(Side::Bid, 1), Some(4.4));
    assert_eq!(book.price_at_level(Side::Bid, 3), None);
    assert_eq!(book.size_at_level(Side::Bid, 3), None);
}

#[test]
fn modify_size_replaces_value_and_keeps_time_priority() {
    let book = fixture(Side::Bid);

    book.modify_size(3, 15);

    let orders = book.orders(Side::Bid);
    // Position unchanged: id 3 still ahead of id 4 at 3.8
    assert_eq!(ids(&orders), vec![2, 1, 3, 4]);
    assert!(orders.contains(&Order::new(3, 3.8, Side::Bid, 15)));
    assert!(!orders.contains(&Order::new(3, 3.8, Side::Bid, 10)));
}

#[test]
fn modify_size_of_unknown_id_is_a_noop() {
    let book = fixture(Side::Bid);

    assert_eq!(book.modify_size(100, 15), None);
    assert_eq!(ids(&book.orders(Side::Bid)), vec![2, 1, 3, 4]);
}

#[test]
fn modify_size_to_zero_is_stored_as_given() {
    let book = fixture(Side::Bid);

    book.modify_size(2, 0);

    // The order still rests at its level; only its size changed
    assert_eq!(ids(&book.orders(Side::Bid)), vec![2, 1, 3, 4]);
    assert_eq!(book.size_at_level(Side::Bid, 1), Some(0));
}

#[test]
fn size_by_level_sums_all_orders_at_the_price() {
    let book = fixture(Side::Offer);

    assert_eq!(book.size_at_level(Side::Offer, 1), Some(20)); // 3.8 holds ids 3 and 4
    assert_eq!(book.size_at_level(Side::Offer, 2), Some(10));
    assert_eq!(book.size_at_level(Side::Offer, 3), Some(10));
    assert_eq!(book.size_at_level(Side::Offer, 4), None);
}

#[test]
fn level_rank_zero_is_absent() {
    let book = fixture(Side::Bid);

    assert_eq!(book.price_at_level(Side::Bid, 0), None);
    assert_eq!(book.size_at_level(Side::Bid, 0), None);
}

#[test]
fn duplicate_id_at_same_price_overwrites_without_losing_the_slot() {
    let book = OrderBook::new();
    book.add_order(Order::new(1, 3.8, Side::Bid, 10));
    book.add_order(Order::new(2, 3.8, Side::Bid, 10));
    book.add_order(Order::new(1, 3.8, Side::Bid, 30)); // duplicate id

    let orders = book.orders(Side::Bid);
    assert_eq!(ids(&orders), vec![1, 2]);
    assert_eq!(orders[0], Order::new(1, 3.8, Side::Bid, 30));
    assert_eq!(book.size_at_level(Side::Bid, 1), Some(40));
}

#[test]
fn unrecognized_side_tag_fails_with_invalid_side() {
    // Side is a closed enum: book calls are total. An untrusted tag
    // fails at the conversion boundary.
    assert_eq!(Side::try_from('L'), Err(Error::InvalidSide('L')));

    let book = fixture(Side::Bid);
    let side = Side::try_from('B').expect("valid tag");
    assert_eq!(ids(&book.orders(side)), vec![2, 1, 3, 4]);
}

#[test]
fn same_id_on_both_sides_resolves_to_bid() {
    let book = OrderBook::new();
    book.add_order(Order::new(9, 4.4, Side::Bid, 10));
    book.add_order(Order::new(9, 5.0, Side::Offer, 20));

    assert_eq!(book.modify_size(9, 11).map(|o| o.side), Some(Side::Bid));
    assert_eq!(book.remove_order(9).map(|o| o.side), Some(Side::Bid));

    // Only the offer remains; it was never touched
    assert_eq!(
        book.orders(Side::Offer),
        vec![Order::new(9, 5.0, Side::Offer, 20)]
    );
}

#[test]
fn concurrent_inserts_on_both_sides_lose_nothing() {
    let _ = tracing_subscriber::fmt::try_init();

    let book = Arc::new(OrderBook::new());
    let threads = 4;
    let per_thread = 250u64;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                for i in 0..per_thread {
                    let id = t * per_thread + i;
                    // A handful of shared price levels per side
                    let price = 4.0 + (id % 5) as f64 * 0.1;
                    book.add_order(Order::new(id, price, Side::Bid, 10));
                    book.add_order(Order::new(id, price, Side::Offer, 10));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let total = (threads * per_thread) as usize;
    assert_eq!(book.order_count(Side::Bid), total);
    assert_eq!(book.order_count(Side::Offer), total);
    assert_eq!(book.depth(Side::Bid), 5);
    assert_eq!(book.depth(Side::Offer), 5);

    // Every level's aggregate size accounts for every insert
    let bid_sum: u64 = (1..=5)
        .map(|lvl| book.size_at_level(Side::Bid, lvl).unwrap())
        .sum();
    assert_eq!(bid_sum, total as u64 * 10);
}

#[test]
fn concurrent_mutators_and_readers_never_observe_torn_state() {
    let book = Arc::new(OrderBook::new());
    for id in 0..500u64 {
        book.add_order(Order::new(id, 4.0 + (id % 3) as f64, Side::Bid, 10));
    }

    let writer = {
        let book = Arc::clone(&book);
        thread::spawn(move || {
            for id in 0..500u64 {
                if id % 2 == 0 {
                    book.remove_order(id);
                } else {
                    book.modify_size(id, 20);
                }
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                for _ in 0..200 {
                    let orders = book.orders(Side::Bid);
                    // Snapshot is price-grouped: prices never increase
                    let mut last = f64::INFINITY;
                    for order in &orders {
                        assert!(order.price <= last);
                        last = order.price;
                    }
                    // A non-empty ladder always has a rankable best level
                    if book.best_price(Side::Bid).is_some() {
                        assert!(book.size_at_level(Side::Bid, 1).is_some());
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    // Survivors: the 250 odd ids, each resized to 20
    let orders = book.orders(Side::Bid);
    assert_eq!(orders.len(), 250);
    assert!(orders.iter().all(|o| o.id % 2 == 1 && o.size == 20));
}
