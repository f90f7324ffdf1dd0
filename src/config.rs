//! Environment configuration. Values come from process env (a `.env` file is
//! loaded first when present).

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Environment {
    pub db_username: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: String,
    pub db_name: String,
    pub server_host: String,
    pub server_port: String,
}

fn var(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| AppError::Config(format!("missing env var {}", name)))
}

impl Environment {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Ok(Environment {
            db_username: var("DB_USERNAME")?,
            db_password: var("DB_PASSWORD")?,
            db_host: var("DB_HOST")?,
            db_port: var("DB_PORT")?,
            db_name: var("DB_NAME")?,
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: std::env::var("SERVER_PORT").unwrap_or_else(|_| "8080".into()),
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}?sslmode=disable",
            self.db_username, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
