use std::io;

use anyhow::Context;

use warehouse_cli::{CliConfig, Menu, demo};
use warehouse_inventory::Warehouse;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    warehouse_observability::init(&config.log);
    tracing::info!(run_demo = config.run_demo, "warehouse starting");

    let mut warehouse = Warehouse::new();

    if config.run_demo {
        demo::run(&mut warehouse, &mut io::stdout()).context("demonstration failed")?;
    }

    Menu::new(&mut warehouse, io::stdin().lock(), io::stdout())
        .run()
        .context("menu stopped on an I/O error")?;

    tracing::info!("warehouse stopped");
    Ok(())
}
