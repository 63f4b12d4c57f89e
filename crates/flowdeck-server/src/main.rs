//! Flowdeck dashboard server binary.

use std::sync::Arc;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use flowdeck_core::{AuthConfig, FlowScheduler, NoopFlowTrigger};
use flowdeck_server::{create_router, telemetry, AppState, Args, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line args
    let args = Args::parse();
    let config = ServerConfig::from(&args);

    telemetry::init(&args.log_level, &config.log_dir)
        .with_context(|| format!("failed to open log files in {}", config.log_dir.display()))?;

    let auth = AuthConfig::from_env()?;

    info!(
        listen = %config.listen_addr,
        log_dir = %config.log_dir.display(),
        users = auth.users.len(),
        "Flowdeck server is starting up at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    // The only trigger available is the stub; see flowdeck_core::flow.
    let state = AppState::new(auth, Arc::new(NoopFlowTrigger), config.clone());

    // Set up graceful shutdown
    let (shutdown_tx, _) = tokio::sync::broadcast::channel::<()>(1);

    let shutdown_signal = shutdown_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            return;
        }
        info!("received shutdown signal");
        let _ = shutdown_signal.send(());
    });

    let scheduler = match config.flow_interval {
        Some(period) => {
            let scheduler = FlowScheduler::new(state.flow.clone(), period);
            let handle = tokio::spawn(scheduler.run_until_shutdown(shutdown_tx.subscribe()));
            info!(
                "Scheduler started at {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            );
            Some(handle)
        }
        None => {
            info!("flow scheduler disabled");
            None
        }
    };

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!("Dashboard listening on {}", config.listen_addr);

    let mut server_shutdown = shutdown_tx.subscribe();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.recv().await;
        })
        .await?;

    if let Some(handle) = scheduler {
        let _ = handle.await;
    }

    info!(
        "Flowdeck server is shutting down at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
