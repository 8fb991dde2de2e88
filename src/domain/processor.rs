use super::authorizer::Authorizer;
use super::order::Order;
use crate::error::{PaymentError, Result};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    Debit,
    Credit,
    Wallet,
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorKind::Debit => f.write_str("debit"),
            ProcessorKind::Credit => f.write_str("credit"),
            ProcessorKind::Wallet => f.write_str("wallet"),
        }
    }
}

/// A payment strategy that can settle an order.
///
/// `pay` either marks the order as paid or returns
/// [`PaymentError::Unauthorized`] and leaves the order untouched.
/// Paying an order that is already paid succeeds.
pub trait PaymentProcessor {
    fn kind(&self) -> ProcessorKind;
    fn pay(&self, order: &mut Order) -> Result<()>;
}

/// Processors that carry their own verification step before paying.
pub trait Confirmable {
    fn confirm(&mut self);
    fn is_verified(&self) -> bool;
}

fn unauthorized(kind: ProcessorKind) -> PaymentError {
    warn!(processor = %kind, "payment rejected, authorization missing");
    PaymentError::Unauthorized { processor: kind }
}

/// Debit card payments.
///
/// Paying requires the processor's own [`Confirmable::confirm`] step. The
/// authorizer handed to the constructor is kept but does not gate `pay`;
/// its state is only reported in the debug log of each attempt.
#[derive(Debug)]
pub struct DebitProcessor<'a> {
    security_code: String,
    authorizer: &'a dyn Authorizer,
    verified: bool,
}

impl<'a> DebitProcessor<'a> {
    pub fn new(security_code: impl Into<String>, authorizer: &'a dyn Authorizer) -> Self {
        Self {
            security_code: security_code.into(),
            authorizer,
            verified: false,
        }
    }

    pub fn authorizer(&self) -> &dyn Authorizer {
        self.authorizer
    }
}

impl Confirmable for DebitProcessor<'_> {
    fn confirm(&mut self) {
        info!(security_code = %self.security_code, "checking security code");
        self.verified = true;
    }

    fn is_verified(&self) -> bool {
        self.verified
    }
}

impl PaymentProcessor for DebitProcessor<'_> {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Debit
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        debug!(
            verified = self.verified,
            authorizer_authorized = self.authorizer.is_authorized(),
            "debit payment gated on processor verification"
        );
        if !self.verified {
            return Err(unauthorized(self.kind()));
        }
        info!(total = %order.total_price(), "processing debit payment");
        order.mark_paid();
        Ok(())
    }
}

/// Credit card payments. There is no authorization step.
#[derive(Debug, Clone)]
pub struct CreditProcessor {
    security_code: String,
}

impl CreditProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
        }
    }
}

impl PaymentProcessor for CreditProcessor {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Credit
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        info!(total = %order.total_price(), "processing credit payment");
        info!(security_code = %self.security_code, "checking security code");
        order.mark_paid();
        Ok(())
    }
}

/// Third-party wallet payments, identified by the account's email address.
///
/// `pay` is gated on the injected authorizer. The processor's own
/// verification flag is tracked but not consulted.
#[derive(Debug)]
pub struct WalletProcessor<'a> {
    email_address: String,
    authorizer: &'a dyn Authorizer,
    verified: bool,
}

impl<'a> WalletProcessor<'a> {
    pub fn new(email_address: impl Into<String>, authorizer: &'a dyn Authorizer) -> Self {
        Self {
            email_address: email_address.into(),
            authorizer,
            verified: false,
        }
    }
}

impl Confirmable for WalletProcessor<'_> {
    fn confirm(&mut self) {
        info!(email = %self.email_address, "checking email");
        self.verified = true;
    }

    fn is_verified(&self) -> bool {
        self.verified
    }
}

impl PaymentProcessor for WalletProcessor<'_> {
    fn kind(&self) -> ProcessorKind {
        ProcessorKind::Wallet
    }

    fn pay(&self, order: &mut Order) -> Result<()> {
        if !self.authorizer.is_authorized() {
            return Err(unauthorized(self.kind()));
        }
        info!(
            total = %order.total_price(),
            email = %self.email_address,
            "processing wallet payment"
        );
        order.mark_paid();
        Ok(())
    }
}
