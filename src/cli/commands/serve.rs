use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::web;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

/// Handle the `serve` command: open the database, make sure the schema
/// exists, and run the HTTP server until interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();

        let host = host.clone().unwrap_or_else(|| cfg.host.clone());
        let port = port.unwrap_or(cfg.port);
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid bind address: {}:{}", host, port)))?;

        let pool = DbPool::new(&cfg.database)?;
        pool.with_conn(init_db)?;

        messages::info(format!("Serving on http://{}", addr));

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(web::serve(addr, Arc::new(pool)))?;
    }
    Ok(())
}
