use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Paid => f.write_str("paid"),
        }
    }
}

/// A single purchased item with its quantity and unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// An order made of line items plus a payment status.
///
/// Names, quantities and prices are kept together per line, so the three
/// sequences exposed by the accessors always have the same length.
/// The status starts as `Open` and only payment processors can move it to `Paid`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    items: Vec<LineItem>,
    status: OrderStatus,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line item. Quantities and prices are taken as given.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32, price: Decimal) {
        self.items.push(LineItem {
            name: name.into(),
            quantity,
            unit_price: price,
        });
    }

    /// Sum of quantity × unit price over all lines, zero for an empty order.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn quantities(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().map(|item| item.quantity)
    }

    pub fn prices(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.items.iter().map(|item| item.unit_price)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Paying twice is allowed; the status simply stays `Paid`.
    pub(crate) fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}
