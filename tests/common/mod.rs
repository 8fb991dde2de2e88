#![allow(dead_code)]

use checkout::domain::order::Order;
use rand::Rng;
use rust_decimal::Decimal;

/// Builds an order from `(name, quantity, price)` rows.
pub fn order_from(rows: &[(&str, u32, Decimal)]) -> Order {
    let mut order = Order::new();
    for (name, quantity, price) in rows {
        order.add_item(*name, *quantity, *price);
    }
    order
}

/// Generates random line items with prices in cents (two decimal places).
pub fn random_rows(rng: &mut impl Rng, count: usize) -> Vec<(String, u32, Decimal)> {
    (0..count)
        .map(|i| {
            let quantity: u32 = rng.gen_range(0..=20);
            let cents: i64 = rng.gen_range(0..=1_000_000);
            (format!("item-{i}"), quantity, Decimal::new(cents, 2))
        })
        .collect()
}
