use crate::domain::authorizer::{RobotAuthorizer, SmsAuthorizer};
use crate::domain::order::Order;
use crate::domain::processor::{
    Confirmable, CreditProcessor, DebitProcessor, PaymentProcessor, WalletProcessor,
};
use crate::error::Result;
use rust_decimal_macros::dec;
use std::io::Write;
use tracing::info;

pub const DEBIT_CODE: &str = "0372846";
pub const CREDIT_CODE: &str = "7383903";
pub const WALLET_EMAIL: &str = "some@mail.com";

/// A single payment step applied to the order.
pub type PaymentFlow = fn(&mut Order) -> Result<()>;

/// Debit then wallet, in that order.
pub const CHECKOUT_FLOWS: [PaymentFlow; 2] = [pay_by_debit, pay_by_wallet];

/// Builds the order used by the checkout scenario.
pub fn sample_order() -> Order {
    let mut order = Order::new();
    order.add_item("Keyboard", 1, dec!(2500));
    order.add_item("SSD", 1, dec!(7500));
    order.add_item("Cable", 2, dec!(250));
    order
}

/// Runs the checkout scenario and returns the settled order.
///
/// The order total is written to `out` before any payment is attempted, then
/// the order is paid by debit card and again through the wallet. The second
/// payment leaves the order paid. The first unauthorized attempt aborts the run.
pub fn run_checkout(out: &mut impl Write) -> Result<Order> {
    run_flows(out, &CHECKOUT_FLOWS)
}

/// Builds the sample order, writes its total to `out`, then applies `flows` in order.
pub fn run_flows(out: &mut impl Write, flows: &[PaymentFlow]) -> Result<Order> {
    let mut order = sample_order();
    info!(items = order.len(), total = %order.total_price(), "order created");
    writeln!(out, "{}", order.total_price().normalize())?;

    for flow in flows {
        flow(&mut order)?;
    }
    Ok(order)
}

/// Confirms an SMS authorizer and the debit processor, then pays.
pub fn pay_by_debit(order: &mut Order) -> Result<()> {
    let mut sms = SmsAuthorizer::new();
    sms.confirm_sms();
    let mut debit = DebitProcessor::new(DEBIT_CODE, &sms);
    debit.confirm();
    settle(&debit, order)
}

/// Passes a robot check and pays through the wallet.
pub fn pay_by_wallet(order: &mut Order) -> Result<()> {
    let mut robot = RobotAuthorizer::new();
    robot.confirm_human();
    let wallet = WalletProcessor::new(WALLET_EMAIL, &robot);
    settle(&wallet, order)
}

/// Pays by credit card. There is no authorization step.
pub fn pay_by_credit(order: &mut Order) -> Result<()> {
    let credit = CreditProcessor::new(CREDIT_CODE);
    settle(&credit, order)
}

/// Pays `order` through any processor, logging the resulting status.
pub fn settle(processor: &dyn PaymentProcessor, order: &mut Order) -> Result<()> {
    processor.pay(order)?;
    info!(processor = %processor.kind(), status = %order.status(), "payment settled");
    Ok(())
}
