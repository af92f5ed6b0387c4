//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::cli::{NodeArgs, ServeArgs};
use crate::config::AppConfig;
use crate::health::HealthChecker;
use crate::logging::init_tracing;
use crate::pidfile::PidFile;
use crate::status::MySqlStatusSource;
use std::sync::Arc;

/// Load configuration and apply the flags shared by all node commands
pub fn load_node_config(args: &NodeArgs) -> Result<AppConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        AppConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        AppConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(ref user) = args.user {
        config.mysql.user = user.clone();
    }
    if let Some(ref password) = args.password {
        config.mysql.password = password.clone();
    }
    if let Some(ref host) = args.mysql_host {
        config.mysql.host = host.clone();
    }
    if let Some(port) = args.mysql_port {
        config.mysql.port = port;
    }
    if let Some(ref socket) = args.socket {
        config.mysql.socket = Some(socket.clone());
    }
    if let Some(donor) = args.avail_when_donor {
        config.health.available_when_donor = donor;
    }
    if let Some(read_only) = args.avail_when_read_only {
        config.health.available_when_read_only = read_only;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = load_node_config(&args.node)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref pidfile) = args.pidfile {
        config.server.pidfile = Some(pidfile.clone());
    }
    if args.no_pidfile {
        config.server.pidfile = None;
    }

    Ok(config)
}

/// Build the checker backed by the configured database
pub fn build_checker(config: &AppConfig) -> HealthChecker {
    let source = Arc::new(MySqlStatusSource::connect_lazy(&config.mysql));
    HealthChecker::new(source, config.health)
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load, merge and validate configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;

    tracing::info!("Starting galera-healthcheck");
    tracing::debug!(?config, "Loaded configuration");

    // 3. Claim the pid file before binding so a second instance fails early
    let pidfile = match &config.server.pidfile {
        Some(path) => Some(PidFile::create(path)?),
        None => None,
    };
    if let Some(pidfile) = &pidfile {
        tracing::info!(path = %pidfile.path().display(), "Pid file created");
    }

    // 4. Build checker and router
    let checker = build_checker(&config);
    let policy = checker.config();
    tracing::info!(
        available_when_donor = policy.available_when_donor,
        available_when_read_only = policy.available_when_read_only,
        "Health policy"
    );
    let config = Arc::new(config);
    let app = create_router(Arc::new(AppState::new(checker, Arc::clone(&config))));

    // 5. Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Healthcheck server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 6. Cleanup
    if let Some(pidfile) = pidfile {
        pidfile.remove()?;
    }

    tracing::info!("galera-healthcheck stopped");
    Ok(())
}
