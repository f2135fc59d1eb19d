use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use seat_licensing::config::environment::EnvironmentConfig;
use seat_licensing::database;
use seat_licensing::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use seat_licensing::routes::create_app_router;
use seat_licensing::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏢 Tool HR - Backend de licencias por puestos");
    info!("=============================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::run_migrations(&pool).await?;

    let config = EnvironmentConfig::default();
    if config.is_development() {
        info!("🔧 Modo desarrollo: CORS permisivo si no hay CORS_ORIGINS");
    }

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);

    let app = create_app_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET   /health - Health check");
    info!("   POST  /seed - Datos de demo");
    info!("📋 Endpoints - Plans:");
    info!("   POST  /plans - Crear plan");
    info!("   GET   /plans - Listar planes");
    info!("🏢 Endpoints - Companies:");
    info!("   POST  /companies - Crear company con suscripción");
    info!("   GET   /companies - Listar companies");
    info!("   GET   /companies/:company_id - Detalle de company");
    info!("   PATCH /companies/:company_id - Actualizar company");
    info!("   GET   /companies/:company_id/usage - Uso de licencias");
    info!("   PATCH /companies/:company_id/subscription - Cambiar seats/status");
    info!("👥 Endpoints - Users:");
    info!("   POST  /companies/:company_id/users - Alta de usuario");
    info!("   GET   /companies/:company_id/users - Listar usuarios");
    info!("   PATCH /companies/:company_id/users/:user_id - Activar/desactivar");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
