use crate::domain::order::{LineItem, Order, OrderStatus};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReceiptFormat {
    Csv,
    Json,
}

#[derive(Serialize)]
struct ReceiptRow<'a> {
    item: &'a str,
    quantity: u32,
    price: Decimal,
    subtotal: Decimal,
}

impl<'a> From<&'a LineItem> for ReceiptRow<'a> {
    fn from(item: &'a LineItem) -> Self {
        Self {
            item: &item.name,
            quantity: item.quantity,
            price: item.unit_price.normalize(),
            subtotal: item.subtotal().normalize(),
        }
    }
}

#[derive(Serialize)]
struct Receipt<'a> {
    status: OrderStatus,
    total: Decimal,
    items: Vec<ReceiptRow<'a>>,
}

/// Writes a settled order to any `Write` sink (e.g., Stdout, a file).
///
/// CSV output has one row per line item; JSON output is a single object with
/// the status, total and items.
pub struct ReceiptWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_receipt(&mut self, order: &Order, format: ReceiptFormat) -> Result<()> {
        match format {
            ReceiptFormat::Csv => self.write_csv(order),
            ReceiptFormat::Json => self.write_json(order),
        }
    }

    fn write_csv(&mut self, order: &Order) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(&mut self.writer);
        for item in order.line_items() {
            wtr.serialize(ReceiptRow::from(item))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_json(&mut self, order: &Order) -> Result<()> {
        let receipt = Receipt {
            status: order.status(),
            total: order.total_price().normalize(),
            items: order.line_items().iter().map(ReceiptRow::from).collect(),
        };
        serde_json::to_writer(&mut self.writer, &receipt)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
