//! One-shot walkthrough of every warehouse operation, including the ways
//! each of them fails.

use std::io::Write;

use warehouse_core::fmt_amount;
use warehouse_inventory::{ItemUpdate, Notify, Warehouse, calculate_total};

use crate::menu::GREETING;

/// Runs the walkthrough against `warehouse`, printing results to `out`.
///
/// Stock added here stays in the warehouse for whatever runs next.
pub fn run<N: Notify>(warehouse: &mut Warehouse<N>, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::info!("demonstration started");
    writeln!(out, "{GREETING}")?;

    writeln!(out, "{}", warehouse.add_item("Samsung S24", 10, 60000.0)?)?;
    writeln!(out, "{}", warehouse.add_item("Iphone 16", 5, 100000.0)?)?;

    writeln!(out, "{}", fmt_amount(calculate_total(150.0, 10)?))?;

    writeln!(out, "{}", warehouse.display_item_details("Samsung S24"))?;

    if let Some(summary) =
        warehouse.update_item("Samsung S24", ItemUpdate::new(Some(20), Some(55000.0)))
    {
        writeln!(out, "{summary}")?;
    }
    if let Some(message) = warehouse.apply_discount("Samsung S24", 25.0) {
        writeln!(out, "{message}")?;
    }
    warehouse.complete_order("order_123", &["Samsung S24", "Iphone 16"]);
    if let Some(message) = warehouse.remove_item("Samsung S24", 5) {
        writeln!(out, "{message}")?;
    }

    show_failures(warehouse, out)?;
    tracing::info!("demonstration finished");
    Ok(())
}

/// The three ways callers meet errors: propagated from `add_item` and
/// `calculate_total`, and handled inside `remove_item`.
fn show_failures<N: Notify>(warehouse: &mut Warehouse<N>, out: &mut impl Write) -> anyhow::Result<()> {
    if let Err(err) = warehouse.add_item("Nokia 3310", -5, 100.0) {
        writeln!(out, "{err}")?;
    }
    if let Err(err) = calculate_total(-10.0, 2) {
        writeln!(out, "{err}")?;
    }
    warehouse.remove_item("Xiaomi 14", 2);
    Ok(())
}
