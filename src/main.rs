use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeFile;
use userbase::error::Error;
use userbase::handlers::api_router;
use userbase::types::{AppState, Result, WebError};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    use axum::extract::Request;
    use axum::Router;
    use tower_http::cors::CorsLayer;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing::{debug_span, Span};
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};

    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if let Ok(directive) = "tower_http=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    // The backing file must exist before the server comes up; nothing
    // creates it on demand.
    let data_file = data_file();
    if !data_file.exists() {
        eprintln!(
            "No such file or directory {}. Please make one, or set DATA_FILE",
            data_file.display()
        );
        return Err(WebError(Error::Custom(format!(
            "data file {} does not exist",
            data_file.display()
        ))));
    }

    let app_state = Arc::new(AppState { data_file });

    tracing::debug!("starting server");
    let cors_layer = CorsLayer::permissive();

    let static_router = Router::new()
        .route_service("/", static_file("users.html"))
        .route_service("/favicon-16x16.png", static_file("favicon-16x16.png"))
        .nest_service("/css", ServeDir::new(static_dir().join("css")))
        .nest_service("/js", ServeDir::new(static_dir().join("js")));

    let app = api_router(app_state)
        .merge(static_router)
        .layer(cors_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    debug_span!(
                        "http_request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::info!("{} {}", request.method(), request.uri());
                })
                .on_response(
                    |_response: &axum::response::Response,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::debug!("finished processing request in {:?}", latency)
                    },
                ),
        );

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let bind = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind).await.map_err(|e| {
        eprintln!("Failed to bind to {}: {}", bind, e);
        WebError(Error::Custom(format!("Failed to bind to {}: {}", bind, e)))
    })?;

    tokio::spawn(async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            eprintln!("failed waiting for Ctrl+C signal: {}", err);
            return;
        }
        // for docker container
        println!("\nReceived Ctrl+C, exiting immediately...");
        std::process::exit(0);
    });

    let local_addr = listener.local_addr().map_err(|e| {
        eprintln!("Failed to get listener address: {}", e);
        WebError(Error::Custom(format!(
            "Failed to get listener address: {}",
            e
        )))
    })?;
    println!("=> listening on http://{}", local_addr);
    axum::serve(listener, app).await.map_err(|e| {
        eprintln!("Server error: {}", e);
        WebError(Error::Custom(format!("Server error: {}", e)))
    })?;

    println!("Server shutdown complete.");
    Ok(())
}

fn data_file() -> PathBuf {
    PathBuf::from(
        std::env::var("DATA_FILE").unwrap_or_else(|_| "static/json/data.json".to_string()),
    )
}

fn static_dir() -> PathBuf {
    PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()))
}

fn static_file(path: &str) -> ServeFile {
    ServeFile::new(static_dir().join(path))
}
