//! Application layer orchestrating the checkout.
//!
//! This module defines `run_checkout`, the entry point that builds an order and
//! settles it through the payment processors in a fixed sequence. Every
//! authorizer and processor is constructed inside the run and passed by
//! reference; there is no shared state between runs.

pub mod checkout;
