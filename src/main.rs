use std::net::SocketAddr;

use phraser_api::{
    app::{self, envy::Envy},
    router, AppState,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let envy = match app::envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();
    if envy.kakao_api_key.is_none() {
        tracing::warn!("KAKAO_API_KEY is not set, only custom locations will be detected");
    }

    let app = router(AppState::new(envy));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e, "server stopped");
    }
}
