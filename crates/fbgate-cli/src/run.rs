use anyhow::{Context, Result};
use figment::{
    providers::{Format, Json as FigmentJson},
    Figment,
};
use fbgate_core::Config;
use fbgate_svr::router;
use serde_json::json;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::utils::clean_json;

use super::command::SubcommandRun;

pub async fn run(cli: &SubcommandRun) -> Result<()> {
    let configfile = cli.configfile.clone().map(FigmentJson::file);
    let config: Config = Figment::new()
        .merge(configfile.unwrap_or(FigmentJson::string("{}")))
        .merge(figment_merge(cli)?)
        .extract()
        .context("Failed to load configuration")?;

    let env_filter = config
        .application
        .log_filter
        .as_deref()
        .unwrap_or("info")
        .parse::<EnvFilter>()
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(env_filter)
        .init();
    // app_secret serializes redacted
    tracing::info!("{}", serde_json::to_string_pretty(&config)?);

    let app = router(&config).context("Failed to build router")?;
    let listener = tokio::net::TcpListener::bind(config.server.addr).await?;
    tracing::info!("Server started at: {}", config.server.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = ?err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = ?err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("ctrl-c received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}

fn figment_merge(
    cli: &SubcommandRun,
) -> Result<figment::providers::Serialized<figment::value::Value>> {
    let result = json!({
        "application": {
            "log_filter": cli.log_filter,
        },
        "server": {
            "addr": cli.addr,
        },
        "facebook": {
            "app_id": cli.app_id,
            "app_secret": cli.app_secret,
            "login_uri": cli.login_uri,
            "redirect_uri": cli.redirect_uri,
            "graph": {
                "base_url": cli.graph_url,
                "timeout_secs": cli.graph_timeout_secs,
            },
        },
        "registration": {
            "users": cli.registered_users,
        },
    });

    let figment_value: figment::value::Value = serde_json::from_value(clean_json(result))
        .context("Failed to convert command line options")?;
    Ok(figment::providers::Serialized::from(
        figment_value,
        figment::Profile::Default,
    ))
}
