use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use auction_facade::config::environment::EnvironmentConfig;
use auction_facade::routes::{create_router, API_PREFIX};
use auction_facade::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("configuración inválida")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.max_log_level())
        .init();

    info!("🚗 Auction Facade - API de subastas de vehículos");
    info!("================================================");
    info!("🔗 API legada: {}", config.legacy_api_url);
    info!(
        "⏱️ Timeouts del legado: lectura {:?}, escritura {:?}",
        config.legacy_read_timeout, config.legacy_write_timeout
    );

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("dirección inválida: {}", config.server_url()))?;

    let app = create_router(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    {}/health-check", API_PREFIX);
    info!("   GET    {}/vehicles", API_PREFIX);
    info!("   POST   {}/vehicles", API_PREFIX);
    info!("   GET    {}/vehicles/:id", API_PREFIX);
    info!("   PUT    {}/vehicles/:id", API_PREFIX);
    info!("   DELETE {}/vehicles/:id", API_PREFIX);
    info!("   GET    {}/lots/:id/vehicles", API_PREFIX);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("no se pudo escuchar en {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
