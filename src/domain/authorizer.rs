use std::fmt;
use tracing::info;

/// Something that can tell whether a payment has been authorized.
pub trait Authorizer: fmt::Debug {
    fn is_authorized(&self) -> bool;
}

/// Authorization granted by confirming a one-time SMS code.
#[derive(Debug, Default)]
pub struct SmsAuthorizer {
    authorized: bool,
}

impl SmsAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the SMS code as confirmed. No code is compared.
    pub fn confirm_sms(&mut self) {
        info!("sms code confirmed");
        self.authorized = true;
    }
}

impl Authorizer for SmsAuthorizer {
    fn is_authorized(&self) -> bool {
        self.authorized
    }
}

/// Authorization granted by passing a human-verification challenge.
#[derive(Debug, Default)]
pub struct RobotAuthorizer {
    authorized: bool,
}

impl RobotAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm_human(&mut self) {
        info!("human verification passed");
        self.authorized = true;
    }
}

impl Authorizer for RobotAuthorizer {
    fn is_authorized(&self) -> bool {
        self.authorized
    }
}
