//! Domain model: orders, authorizers and the payment processors that settle orders.

pub mod authorizer;
pub mod order;
pub mod processor;
