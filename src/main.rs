mod entity;
mod error;
mod handlers;
mod prelude;
mod state;
mod sv;

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
  Router,
  routing::{get, post},
};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use tracing_subscriber::{
  EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{prelude::*, state::AppState};

#[tokio::main]
async fn main() {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "affiliate_server=debug,tower_http=debug,sea_orm=warn".into()
    }))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_url = env::var("DATABASE_URL")
    .unwrap_or_else(|_| "sqlite:affiliates.db?mode=rwc".into());

  info!("Starting Affiliate Server v{}", env!("CARGO_PKG_VERSION"));

  let app_state = Arc::new(
    AppState::new(&db_url).await.expect("Failed to initialize database"),
  );

  let governor_conf = Arc::new(
    GovernorConfigBuilder::default()
      .per_second(2)
      .burst_size(100)
      .finish()
      .expect("Failed to build rate limiter config"),
  );

  let governor_limiter = governor_conf.limiter().clone();

  tokio::spawn(async move {
    loop {
      tokio::time::sleep(Duration::from_secs(60)).await;
      governor_limiter.retain_recent();
    }
  });

  let app = Router::new()
    .route("/health", get(handlers::health))
    .route("/api/referral/validate", post(handlers::validate_referral))
    .route("/api/order/confirm", post(handlers::confirm_order))
    .route("/api/admin/affiliates", get(handlers::list_affiliates))
    .route(
      "/api/admin/withdrawals/pending",
      get(handlers::pending_withdrawals),
    )
    .route(
      "/api/admin/withdrawals/approve",
      post(handlers::approve_withdrawal),
    )
    .route(
      "/api/admin/withdrawals/decline",
      post(handlers::decline_withdrawal),
    )
    .route(
      "/api/admin/settings",
      get(handlers::get_settings).put(handlers::update_settings),
    )
    .route(
      "/api/affiliates/{id}/dashboard",
      get(handlers::affiliate_dashboard),
    )
    .route(
      "/api/affiliates/{id}/referrals",
      get(handlers::affiliate_referrals),
    )
    .route(
      "/api/affiliates/{id}/withdrawals",
      get(handlers::affiliate_withdrawals),
    )
    .route("/api/withdrawals", post(handlers::create_withdrawal))
    .layer(
      ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(GovernorLayer::new(governor_conf))
        .layer(
          CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        ),
    )
    .with_state(app_state);

  let port: u16 =
    env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
  let addr = SocketAddr::from(([0, 0, 0, 0], port));

  info!("HTTP server listening on {}", addr);

  let listener =
    tokio::net::TcpListener::bind(addr).await.expect("Failed to bind");
  axum::serve(
    listener,
    app.into_make_service_with_connect_info::<SocketAddr>(),
  )
  .await
  .expect("Server error");
}
