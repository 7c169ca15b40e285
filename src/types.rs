pub use crate::utils::database;
use async_trait::async_trait;
use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub encoding_key: EncodingKey,
    pub decoding_key: DecodingKey,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub allowed_email_domains: Vec<String>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
    pub allowed_email_domains: Vec<String>,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {0}: {1}")]
    Invalid(&'static str, String),
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn parsed<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(key, raw)),
        Err(_) => Ok(default),
    }
}

pub fn parse_domains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|domain| domain.trim().to_lowercase())
        .filter(|domain| !domain.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = parsed::<u32>("PORT", 8000)?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let jwt_secret = required("JWT_SECRET")?;
        let access_token_ttl_minutes = parsed::<i64>("ACCESS_TOKEN_TTL_MINUTES", 60)?;
        let refresh_token_ttl_days = parsed::<i64>("REFRESH_TOKEN_TTL_DAYS", 1)?;
        let allowed_email_domains = env::var("ALLOWED_EMAIL_DOMAINS")
            .map(|raw| parse_domains(&raw))
            .unwrap_or_default();

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            auth: AuthConfig {
                jwt_secret,
                access_token_ttl_minutes,
                refresh_token_ttl_days,
                allowed_email_domains,
            },
        })
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to connect to the database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Failed to bind the http listener: {0}")]
    Io(#[from] std::io::Error),
}

impl AuthConfig {
    pub fn to_auth_context(self) -> AuthContext {
        AuthContext {
            encoding_key: EncodingKey::from_secret(self.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            access_token_ttl: Duration::minutes(self.access_token_ttl_minutes),
            refresh_token_ttl: Duration::days(self.refresh_token_ttl_days),
            allowed_email_domains: self.allowed_email_domains,
        }
    }
}

impl AppConfig {
    fn to_app_context(self) -> AppContext {
        AppContext {
            host: self.host,
            environment: self.environment,
            port: self.port,
            url: self.url,
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        let db_conn = database::connect(self.database.url.as_str()).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: self.app.to_app_context(),
            db_conn,
            auth: self.auth.to_auth_context(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_defaults_to_development() {
        assert_eq!(
            AppEnvironment::from("production".to_string()),
            AppEnvironment::Production
        );
        assert_eq!(
            AppEnvironment::from("staging".to_string()),
            AppEnvironment::Development
        );
    }

    #[test]
    fn domains_are_trimmed_and_lowercased() {
        assert_eq!(
            parse_domains(" Example.com, ,kbtu.kz "),
            vec!["example.com".to_string(), "kbtu.kz".to_string()]
        );
        assert!(parse_domains("").is_empty());
    }
}
