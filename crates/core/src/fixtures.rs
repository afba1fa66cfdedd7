//! Fixture orders inserted into an empty store on first start.

use crate::types::Quantity;

/// A hardcoded order used to seed an empty `products` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureOrder {
    pub product: &'static str,
    pub qty_stk: Quantity,
}

/// Seed rows, in insertion order.
pub const FIXTURE_ORDERS: &[FixtureOrder] = &[
    FixtureOrder {
        product: "Cloak of invisibility",
        qty_stk: 1,
    },
    FixtureOrder {
        product: "Deluminator",
        qty_stk: 2,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_set_has_two_distinct_products() {
        assert_eq!(FIXTURE_ORDERS.len(), 2);
        assert_ne!(FIXTURE_ORDERS[0].product, FIXTURE_ORDERS[1].product);
        assert_eq!(FIXTURE_ORDERS[0].qty_stk, 1);
        assert_eq!(FIXTURE_ORDERS[1].qty_stk, 2);
    }
}
