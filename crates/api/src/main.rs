#[tokio::main]
async fn main() {
    tambo_observability::init();

    let listen_addr =
        std::env::var("TAMBO_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let seed_demo = std::env::var("TAMBO_SEED_DEMO")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    let app = tambo_api::app::build_app(seed_demo);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
