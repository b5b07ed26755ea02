//! scalegate broker
//!
//! Service-broker style API that validates submitted autoscaling policies
//! against plan limits before anything downstream sees them.
//! - Binding endpoint: /v2/service_instances/{iid}/service_bindings/{bid}
//! - Catalog loaded once at startup, immutable afterwards
//! - Ops endpoints: /healthz, /readyz, /metrics

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use scalegate_broker::{app_state, catalog, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Config + catalog (strict parsing, validated at load)
    let cfg = config::load_from_file("scalegate.yaml").expect("config load failed");
    let catalog = catalog::load_from_file(&cfg.broker.catalog_path).expect("catalog load failed");

    let listen: SocketAddr = cfg
        .broker
        .listen
        .parse()
        .expect("broker.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg, catalog).expect("state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "scalegate-broker starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
