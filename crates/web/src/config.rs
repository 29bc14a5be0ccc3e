use anyhow::{Context, Result};
use storage::DatabaseConfig;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .context("Cannot load DATABASE_URL env variable")?,
                max_connections: parse_max_connections(
                    std::env::var("DATABASE_MAX_CONNECTIONS").ok(),
                )?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_max_connections(value: Option<String>) -> Result<u32> {
    match value {
        None => Ok(DEFAULT_MAX_CONNECTIONS),
        Some(raw) => raw
            .trim()
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a positive number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_connections_defaults_when_unset() {
        assert_eq!(parse_max_connections(None).unwrap(), DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_max_connections_parses_value() {
        assert_eq!(parse_max_connections(Some(" 12 ".to_string())).unwrap(), 12);
        assert!(parse_max_connections(Some("many".to_string())).is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database: DatabaseConfig {
                url: "postgres://localhost/workout".to_string(),
                max_connections: 5,
            },
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
