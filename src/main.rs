//! Main entry point for the fakedetect_server backend.
//!
//! Sets up the Actix Web server, configures the detection relay routes and
//! the static browser client, and initializes shared application state
//! (HTTP clients for image fetch and the classification API).
//! Uses dotenv for config and launches the async runtime with structured tracing.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;
use fakedetect_server::{AppState, get_subscriber, handlers, init_subscriber};
use tracing_actix_web::TracingLogger;

/// JSON body limit; generous so base64-embedded uploads fit.
const JSON_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Main entry point. Configures and runs the Actix Web server.
///
/// - Loads environment variables from `.env`.
/// - Builds the shared HTTP and classification clients.
/// - Initializes structured tracing.
/// - Registers the API routes with permissive CORS and a 50 MB JSON limit.
/// - Launches the async server runtime with graceful ctrl-c shutdown.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // Initialize application state
    let app_state = AppState::new().expect("failed to init app_state");

    let subscriber = get_subscriber("fakedetect".to_string(), "info".to_string(), std::io::stdout);
    init_subscriber(subscriber);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    tracing::info!(port = port, "Starting detection relay server");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
            .wrap(TracingLogger::default())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(handlers::configure_routes)
            .service(actix_files::Files::new("/", "./static").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run();

    let srv_handle = server.handle();

    let server_task = tokio::spawn(server);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Shutdown signal received");
            // Gracefully stop the server
            srv_handle.stop(true).await;
        }
        res = server_task => {
            if let Err(e) = res {
                tracing::error!("Server task failed: {}", e);
            }
        }
    }

    Ok(())
}
