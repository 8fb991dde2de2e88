mod common;

use checkout::application::checkout::{
    CHECKOUT_FLOWS, PaymentFlow, pay_by_credit, run_checkout, run_flows, sample_order, settle,
};
use checkout::domain::authorizer::{RobotAuthorizer, SmsAuthorizer};
use checkout::domain::order::{Order, OrderStatus};
use checkout::domain::processor::{
    Confirmable, CreditProcessor, DebitProcessor, PaymentProcessor, ProcessorKind, WalletProcessor,
};
use checkout::error::PaymentError;
use rust_decimal_macros::dec;

#[test]
fn test_end_to_end_scenario() {
    let mut order = common::order_from(&[
        ("Keyboard", 1, dec!(2500)),
        ("SSD", 1, dec!(7500)),
        ("Cable", 2, dec!(250)),
    ]);
    assert_eq!(order.total_price(), dec!(10500));
    assert_eq!(order.status(), OrderStatus::Open);

    let mut sms = SmsAuthorizer::new();
    sms.confirm_sms();
    let mut debit = DebitProcessor::new("0372846", &sms);
    debit.confirm();
    debit.pay(&mut order).unwrap();
    assert_eq!(order.status(), OrderStatus::Paid);

    let mut robot = RobotAuthorizer::new();
    robot.confirm_human();
    let wallet = WalletProcessor::new("some@mail.com", &robot);
    wallet.pay(&mut order).unwrap();
    assert_eq!(order.status(), OrderStatus::Paid);
}

#[test]
fn test_debit_without_confirmation_leaves_order_open() {
    let mut sms = SmsAuthorizer::new();
    sms.confirm_sms();
    let debit = DebitProcessor::new("0372846", &sms);
    let mut order = sample_order();

    let err = debit.pay(&mut order).unwrap_err();
    assert!(matches!(
        err,
        PaymentError::Unauthorized {
            processor: ProcessorKind::Debit
        }
    ));
    assert_eq!(order.status(), OrderStatus::Open);
}

#[test]
fn test_debit_pays_with_unconfirmed_authorizer() {
    let sms = SmsAuthorizer::new();
    let mut debit = DebitProcessor::new("0372846", &sms);
    debit.confirm();
    let mut order = sample_order();

    debit.pay(&mut order).unwrap();
    assert!(order.is_paid());
}

#[test]
fn test_wallet_unauthorized_then_authorized() {
    let mut order = sample_order();

    let unconfirmed = RobotAuthorizer::new();
    let wallet = WalletProcessor::new("some@mail.com", &unconfirmed);
    assert!(matches!(
        wallet.pay(&mut order),
        Err(PaymentError::Unauthorized {
            processor: ProcessorKind::Wallet
        })
    ));
    assert_eq!(order.status(), OrderStatus::Open);

    let mut confirmed = RobotAuthorizer::new();
    confirmed.confirm_human();
    let wallet = WalletProcessor::new("some@mail.com", &confirmed);
    wallet.pay(&mut order).unwrap();
    assert_eq!(order.status(), OrderStatus::Paid);
}

#[test]
fn test_wallet_accepts_sms_authorizer() {
    let mut sms = SmsAuthorizer::new();
    sms.confirm_sms();
    let wallet = WalletProcessor::new("some@mail.com", &sms);
    let mut order = sample_order();

    settle(&wallet, &mut order).unwrap();
    assert!(order.is_paid());
}

#[test]
fn test_credit_pays_without_any_confirmation() {
    let credit = CreditProcessor::new("7383903");
    let mut order = sample_order();

    credit.pay(&mut order).unwrap();
    assert_eq!(order.status(), OrderStatus::Paid);

    // Already paid: paying again is accepted.
    credit.pay(&mut order).unwrap();
    assert_eq!(order.status(), OrderStatus::Paid);
}

#[test]
fn test_failed_payment_after_success_keeps_paid() {
    let credit = CreditProcessor::new("7383903");
    let robot = RobotAuthorizer::new();
    let wallet = WalletProcessor::new("some@mail.com", &robot);
    let mut order = sample_order();

    credit.pay(&mut order).unwrap();
    assert!(wallet.pay(&mut order).is_err());
    assert_eq!(order.status(), OrderStatus::Paid);
}

#[test]
fn test_run_checkout_then_credit() {
    let mut out = Vec::new();
    let mut order = run_checkout(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "10500\n");
    assert_eq!(order.status(), OrderStatus::Paid);

    pay_by_credit(&mut order).unwrap();
    assert_eq!(order.status(), OrderStatus::Paid);
    assert_eq!(order.total_price(), dec!(10500));
}

#[test]
fn test_checkout_stops_at_first_unauthorized_flow() {
    fn pay_with_unconfirmed_debit(order: &mut Order) -> Result<(), PaymentError> {
        let sms = SmsAuthorizer::new();
        let debit = DebitProcessor::new("0372846", &sms);
        settle(&debit, order)
    }

    let mut out = Vec::new();
    let flows = [pay_with_unconfirmed_debit as PaymentFlow, CHECKOUT_FLOWS[1]];
    let err = run_flows(&mut out, &flows).unwrap_err();

    assert!(matches!(
        err,
        PaymentError::Unauthorized {
            processor: ProcessorKind::Debit
        }
    ));
    assert_eq!(String::from_utf8(out).unwrap(), "10500\n");
}
