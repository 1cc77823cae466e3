use std::sync::Arc;

use poem::Server;
use poem::listener::TcpListener;

use crate::api::build_app;
use crate::app_data::AppData;
use crate::config::ServerSettings;

/// Build the application and serve it until the process is stopped
pub async fn run_server(settings: ServerSettings) -> Result<(), Box<dyn std::error::Error>> {
    let address = settings.server_address();
    let port = settings.server_port();

    tracing::info!("Server settings: {:?}", settings);

    let app_data = Arc::new(AppData::init(settings).await?);
    let app = build_app(app_data);

    tracing::info!("ItemStore API server running on {}", address);
    tracing::info!("Health check: http://localhost:{}/api/health", port);
    tracing::info!("Items endpoint: http://localhost:{}/api/items", port);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", port);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
