//! Property tests over random sequences of store operations.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use cartstore_core::{Price, ProductId, Quantity};
use cartstore_integration_tests::{fresh_store, small_catalog};
use cartstore_storefront::storage::keys;
use cartstore_storefront::{Cart, CartStore, MemoryStore};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(i64),
    Increase(i64),
    Decrease(i64),
    Clear,
}

/// IDs 1..=3 are in the catalog; 4 never is.
fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..3usize).prop_map(Op::Add),
        1 => (1..=4i64).prop_map(Op::Remove),
        3 => (1..=4i64).prop_map(Op::Increase),
        3 => (1..=4i64).prop_map(Op::Decrease),
        1 => Just(Op::Clear),
    ]
}

fn apply(store: &mut CartStore<MemoryStore>, op: &Op) {
    let result = match op {
        Op::Add(index) => {
            let product = small_catalog().swap_remove(*index);
            store.add_to_cart(&product)
        }
        Op::Remove(id) => store.remove_from_cart(ProductId::new(*id)),
        Op::Increase(id) => store.increase_quantity(ProductId::new(*id)),
        Op::Decrease(id) => store.decrease_quantity(ProductId::new(*id)),
        Op::Clear => store.clear_cart(),
    };
    assert!(result.is_ok(), "in-memory backend never fails: {result:?}");
}

fn persisted(store: &CartStore<MemoryStore>) -> Option<Cart> {
    store
        .storage()
        .raw(keys::CART)
        .map(|raw| Cart::from_json(raw).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Property: every line stays within 1..=5 after every operation.
    #[test]
    fn quantities_stay_in_bounds(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
            for line in store.cart() {
                let q = line.quantity().get();
                prop_assert!((Quantity::MIN..=Quantity::MAX).contains(&q));
            }
        }
    }

    /// Property: at most one line per product ID.
    #[test]
    fn lines_are_unique(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
            let ids: HashSet<ProductId> = store.cart().iter().map(|l| l.id()).collect();
            prop_assert_eq!(ids.len(), store.cart().len());
        }
    }

    /// Property: the total is always the sum of quantity * price.
    #[test]
    fn total_matches_lines(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let expected: Price = store
            .cart()
            .iter()
            .map(|l| l.price().times(l.quantity()))
            .sum();
        prop_assert_eq!(store.cart_total(), expected);
        prop_assert_eq!(store.is_cart_empty(), store.cart().iter().next().is_none());
        if store.is_cart_empty() {
            prop_assert_eq!(store.cart_total(), Price::ZERO);
        }
    }

    /// Property: once anything was written, the persisted cart equals the
    /// in-memory cart after every operation.
    #[test]
    fn persisted_cart_matches_memory(ops in prop::collection::vec(op(), 1..60)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
            match persisted(&store) {
                Some(saved) => prop_assert_eq!(&saved, store.cart()),
                None => prop_assert!(store.is_cart_empty()),
            }
        }
    }

    /// Property: reopening over the same backend restores the same cart.
    #[test]
    fn reinitialize_restores_cart(ops in prop::collection::vec(op(), 1..40)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let cart = store.cart().clone();

        let reopened = CartStore::initialize(store.into_storage(), &small_catalog()).unwrap();
        prop_assert_eq!(reopened.cart(), &cart);
    }

    /// Property: operations on IDs that are not in the cart change nothing.
    #[test]
    fn absent_ids_are_noops(ops in prop::collection::vec(op(), 0..30)) {
        let mut store = fresh_store();
        for op in &ops {
            apply(&mut store, op);
        }
        let before = store.cart().clone();
        let writes = store.storage().write_count();

        let absent = ProductId::new(4);
        store.remove_from_cart(absent).unwrap();
        store.increase_quantity(absent).unwrap();
        store.decrease_quantity(absent).unwrap();

        prop_assert_eq!(store.cart(), &before);
        prop_assert_eq!(store.storage().write_count(), writes);
    }
}
