use anyhow::{Context, Result};
use avocado_board::cli::Cli;
use avocado_board::dashboard::Dashboard;
use avocado_board::server::{AppState, DashboardServer};
use avocado_board::settings::Settings;
use avocado_board::telemetry::init_tracing;
use clap::Parser;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::load(cli.settings.as_deref())?;
    cli.apply_to(&mut settings);

    let dashboard = Dashboard::load(&settings)
        .with_context(|| format!("Failed to load {}", settings.data_path.display()))?;

    if cli.print_layout {
        println!("{}", serde_json::to_string_pretty(&dashboard.layout())?);
        return Ok(());
    }

    let state = Arc::new(AppState::new(dashboard, settings.max_sessions));
    let server = DashboardServer::start(state, &settings.bind_addr())?;

    if settings.open_browser {
        let url = server.url();
        if let Err(e) = open::that(&url) {
            tracing::warn!("Could not open {} in a browser: {}", url, e);
        }
    }

    server.wait();
    Ok(())
}
