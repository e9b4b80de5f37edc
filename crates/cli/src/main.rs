use anyhow::Context;

use uniinv_cli::{AppConfig, InventorySystem, Menu};

fn main() -> anyhow::Result<()> {
    let (config, warnings) = AppConfig::from_env();
    uniinv_observability::init_with(&config.observability);
    for warning in warnings {
        tracing::warn!("{warning}");
    }

    let system = if config.seed_demo_data {
        InventorySystem::with_demo_data().context("failed to load demo data")?
    } else {
        InventorySystem::new()
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), system, config.report_format);
    menu.run().context("terminal session failed")?;

    tracing::info!("session ended");
    Ok(())
}
