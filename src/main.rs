mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::time::Duration;

const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    tracing_subscriber::fmt::init();
    if dotenv_loaded {
        tracing::debug!("loaded .env");
    }

    let config = config::Config::from_env().expect("invalid configuration");
    let addr = SocketAddr::new(config.bind_addr, config.port);
    let rate_limits = rate_limit::RateLimitConfig::from_env().expect("invalid rate limit configuration");
    if config.echo_access_codes {
        tracing::warn!("ECHO_ACCESS_CODES is on; access codes are returned to the browser");
    }

    let state = state::AppState::new(config, rate_limits);

    // Spawn background sweepers for sessions and pending access codes.
    let _sessions = services::session::spawn_session_sweeper(state.sessions.clone(), SWEEP_INTERVAL);
    let _codes = services::email_auth::spawn_access_code_sweeper(state.access_codes.clone(), SWEEP_INTERVAL);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "beacon listening");
    axum::serve(listener, app).await.expect("server failed");
}
