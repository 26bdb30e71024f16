use std::str::FromStr;

use crate::errors::AppError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorsMode {
    /// Any origin, GET/POST/OPTIONS, `Content-Type` only.
    #[default]
    Restricted,
    /// No method or header restriction.
    Open,
}

impl FromStr for CorsMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restricted" => Ok(CorsMode::Restricted),
            "open" => Ok(CorsMode::Open),
            other => Err(AppError::EnvError(format!("Unknown CORS_MODE: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => Err(AppError::EnvError(format!("Unknown STORE: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub port: u16,
    pub cors_mode: CorsMode,
    pub expose_store_errors: bool,
    pub max_connections: u32,
    pub store: StoreKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            cors_mode: CorsMode::default(),
            expose_store_errors: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            store: StoreKind::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let lookup = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let database_url = lookup("DATABASE_URL");

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::EnvError(format!("Invalid PORT '{raw}': {e}")))?,
            None => DEFAULT_PORT,
        };

        let cors_mode = lookup("CORS_MODE")
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        let store = lookup("STORE")
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::EnvError(format!("Invalid DB_MAX_CONNECTIONS '{raw}': {e}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let expose_store_errors = lookup("EXPOSE_STORE_ERRORS")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(AppError::EnvError("DATABASE_URL must be set".into()));
        }

        Ok(Self {
            database_url,
            port,
            cors_mode,
            expose_store_errors,
            max_connections,
            store,
        })
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
