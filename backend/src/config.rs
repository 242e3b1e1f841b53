use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PORT: u16 = 5433;
pub const DEFAULT_HTTP_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub db_user: String,
    pub db_password: String,
    pub db_database: String,
    pub db_host: String,
    pub db_port: u16,
    pub http_port: u16,
    pub production_mode: bool,
    pub frontend_build_dir: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let db_user = env::var("DB_USER").unwrap_or_default();
        let db_password = env::var("DB_PASSWORD").unwrap_or_default();
        let db_database = env::var("DB_DATABASE").unwrap_or_default();
        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());

        let db_port = env::var("DB_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_DB_PORT);

        let http_port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let production_mode = env::var("NODE_ENV")
            .map(|value| value.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let frontend_build_dir = env::var("FRONTEND_BUILD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./frontend/build"));

        Ok(Config {
            db_user,
            db_password,
            db_database,
            db_host,
            db_port,
            http_port,
            production_mode,
            frontend_build_dir,
        })
    }
}
