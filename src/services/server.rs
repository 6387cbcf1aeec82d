use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Budokai Server ===\n");
        let pool = database::create_pool(&self.config.storage.database_path)?;
        info!("  → Database: {}", self.config.storage.database_path);
        log_sheet("Win-rate sheet", self.config.server.winrate_sheet.as_deref());
        log_sheet("Standings sheet", self.config.server.standings_sheet.as_deref());
        if self.config.server.admin_token.is_none() {
            info!("  → No admin token set, sheet uploads are disabled");
        }

        let state = Arc::new(AppState::new(pool, self.config.clone()));
        let app = create_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

fn log_sheet(label: &str, path: Option<&std::path::Path>) {
    match path {
        Some(path) => info!("  → {}: {}", label, path.display()),
        None => info!("  → {}: not configured", label),
    }
}
