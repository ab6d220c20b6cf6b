use thiserror::Error;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Which post store the service talks to.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    /// Hosted database reached over its REST interface.
    Rest { url: String, key: String },
    /// Direct Postgres connection to the same table.
    Postgres { url: String, max_connections: u32 },
    /// Process-local table, lost on restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub store: StoreConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let backend = var("STORE_BACKEND").unwrap_or_else(|| "rest".to_string());
        let store = match backend.trim().to_ascii_lowercase().as_str() {
            "rest" => StoreConfig::Rest {
                url: required("STORE_URL")?,
                key: required("STORE_KEY")?,
            },
            "postgres" => {
                let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                StoreConfig::Postgres {
                    url: required("DATABASE_URL")?,
                    max_connections,
                }
            }
            "memory" => StoreConfig::Memory,
            _ => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: backend,
                })
            }
        };

        Ok(Self { port, store })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl StoreConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Rest { .. } => "rest",
            Self::Postgres { .. } => "postgres",
            Self::Memory => "memory",
        }
    }
}
