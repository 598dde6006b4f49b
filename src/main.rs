//! Answers Mercado Libre links shared in Slack with a summary of the listing.
//!
//! Slack delivers `link_shared` events to `/slack-message`; the listing is
//! looked up on the marketplace's public API and posted back to the channel.

use config::Config;
use dotenvy::dotenv;
use meli::api::MeliClient;
use router::Deps;
use slack::api::SlackClient;
use std::{net::SocketAddr, process};
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{error, info, warn};

mod config;
mod de;
mod error;
mod meli;
mod router;
mod slack;

/// Application entrypoint. Initialises tracing, loads configuration, binds to
/// 0.0.0.0, and starts the server.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let config = match Config::from_env() {
        Ok(x) => x,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match TcpListener::bind(addr).await {
        Ok(x) => x,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };

    if let Err(e) = server_(listener, deps(config)).await {
        error!("Server failed: {}", e);
        process::exit(1);
    }
}

fn deps(config: Config) -> Deps {
    Deps {
        meli_client: MeliClient::new(config.meli_api_base),
        slack_client: SlackClient::new(config.slack_api_base),
        slack_token: config.slack_token,
    }
}

/// Run a server without graceful shutdown.
async fn server_(listener: TcpListener, deps: Deps) -> std::io::Result<()> {
    // Giving a receiver that will never resolve.
    let (_tx, rx) = oneshot::channel::<()>();
    server(listener, deps, rx).await
}

/// Run a server with graceful shutdown via `rx`.
async fn server(
    listener: TcpListener,
    deps: Deps,
    rx: oneshot::Receiver<()>,
) -> std::io::Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router::new(deps))
        .with_graceful_shutdown(async {
            rx.await.ok();
        })
        .await
}
