//! Quiet Timer - A countdown timer with a progress ring view
//!
//! This is the main entry point for the quiet-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use quiet_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{spawn_countdown, IntervalTicks},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("quiet_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting quiet-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}s, theme={:?}, accent={:?}",
          config.host, config.port, config.duration, config.theme, config.accent);

    // Start the countdown dispatcher
    let options = config.timer_options();
    let (timer, countdown_task) = spawn_countdown(&options, IntervalTicks::default());

    let state = Arc::new(AppState::new(
        timer.clone(),
        options.view,
        config.port,
        config.host.clone(),
    ));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer                   - Current timer view");
    info!("  POST /timer/toggle            - Start or pause");
    info!("  POST /timer/reset             - Reset to the full span");
    info!("  POST /timer/duration/:minutes - Set the span");
    info!("  GET  /presets                 - Preset spans");
    info!("  GET  /status                  - Timer view and server status");
    info!("  GET  /health                  - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Disarm the tick source before exiting
    if let Err(e) = timer.teardown().await {
        tracing::warn!("{}", e);
    }
    countdown_task.await?;

    info!("Server shutdown complete");
    Ok(())
}
