use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Deployment environment, read from `NODE_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }
}

/// Where items are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON file rewritten on every mutation
    File,
    /// Process-lifetime collection, lost on restart
    Memory,
}

/// Server settings loaded once at startup
pub struct ServerSettings {
    server_host: String,
    server_port: u16,
    environment: Environment,
    storage_backend: StorageBackend,
    data_file: PathBuf,
    frontend_dir: PathBuf,
    cors_origins: Vec<String>,
}

impl ServerSettings {
    /// Load server settings from environment variables using ConfigSpec
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("5000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let environment_spec = ConfigSpec::new(env_provider.clone())
            .env_override("NODE_ENV")
            .default_value("production");

        let storage_spec = ConfigSpec::new(env_provider.clone())
            .env_override("STORAGE_BACKEND")
            .default_value("file")
            .validator(|value| ConfigSpec::validate_one_of(value, &["file", "memory"]));

        let data_file_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DATA_FILE")
            .default_value("data/items.json")
            .min_length(1);

        let frontend_dir_spec = ConfigSpec::new(env_provider.clone())
            .env_override("FRONTEND_DIR")
            .default_value("public")
            .min_length(1);

        let cors_spec = ConfigSpec::new(env_provider)
            .env_override("CORS_ORIGINS")
            .default_value(DEFAULT_CORS_ORIGINS);

        let server_host = host_spec.load()?;
        let server_port = ConfigSpec::parse_port(&port_spec.load()?, "PORT")?;
        let environment = Environment::from_value(&environment_spec.load()?);
        let storage_backend = match storage_spec.load()?.as_str() {
            "memory" => StorageBackend::Memory,
            _ => StorageBackend::File,
        };
        let data_file = PathBuf::from(data_file_spec.load()?);
        let frontend_dir = PathBuf::from(frontend_dir_spec.load()?);
        let cors_origins = parse_origins(&cors_spec.load()?);

        Ok(Self {
            server_host,
            server_port,
            environment,
            storage_backend,
            data_file,
            frontend_dir,
            cors_origins,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_frontend_dir(mut self, frontend_dir: impl Into<PathBuf>) -> Self {
        self.frontend_dir = frontend_dir.into();
        self
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// `host:port` for binding; IPv6 hosts are bracketed
    pub fn server_address(&self) -> String {
        if self.server_host.contains(':') {
            format!("[{}]:{}", self.server_host, self.server_port)
        } else {
            format!("{}:{}", self.server_host, self.server_port)
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Failure details are included in 500 responses only in development
    pub fn expose_error_details(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Session cookies carry `Secure` in production
    pub fn secure_cookies(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn frontend_dir(&self) -> &Path {
        &self.frontend_dir
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            environment: Environment::Production,
            storage_backend: StorageBackend::File,
            data_file: PathBuf::from("data/items.json"),
            frontend_dir: PathBuf::from("public"),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        }
    }
}

impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("environment", &self.environment)
            .field("storage_backend", &self.storage_backend)
            .field("data_file", &self.data_file)
            .finish()
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
