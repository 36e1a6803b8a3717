use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    #[serde(default = "default_uploads_dir")]
    pub dir: String,
    /// Largest accepted product image, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 secret; a random one is generated per process when absent
    pub jwt_secret: Option<String>,
    #[serde(default = "default_access_token_hours")]
    pub access_token_hours: i64,
}

fn default_port() -> u16 {
    3000
}

fn default_database_path() -> String {
    "target/db/app.db".to_string()
}

fn default_uploads_dir() -> String {
    "target/uploads".to_string()
}

fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_access_token_hours() -> i64 {
    24
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_hours: default_access_token_hours(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[database]
path = "target/db/app.db"

[uploads]
dir = "target/uploads"
max_image_bytes = 5242880

[auth]
access_token_hours = 24
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Store the loaded configuration for the rest of the process
pub fn initialize(config: Config) -> anyhow::Result<&'static Config> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;
    get()
}

pub fn get() -> anyhow::Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("Config is not initialized"))
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Resolve a configured path; relative paths are taken from the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    resolve_against(path, exe_dir().as_deref())
}

fn resolve_against(path: &str, base: Option<&Path>) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    match base {
        Some(dir) => dir.join(p),
        None => PathBuf::from(path),
    }
}

pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

pub fn get_uploads_dir(config: &Config) -> PathBuf {
    resolve_path(&config.uploads.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.uploads.dir, "target/uploads");
        assert_eq!(config.uploads.max_image_bytes, 5_242_880);
        assert_eq!(config.auth.jwt_secret, None);
        assert_eq!(config.auth.access_token_hours, 24);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.uploads.max_image_bytes, 5 * 1024 * 1024);
        assert_eq!(config.auth.access_token_hours, 24);
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let config = parse_config("[uploads]\nmax_image_bytes = 1024\n").unwrap();
        assert_eq!(config.uploads.dir, "target/uploads");
        assert_eq!(config.uploads.max_image_bytes, 1024);
    }

    #[test]
    fn test_jwt_secret_is_read() {
        let config = parse_config("[auth]\njwt_secret = \"s3cret\"\n").unwrap();
        assert_eq!(config.auth.jwt_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_resolve_against_base() {
        let base = Path::new("/opt/shop");
        assert_eq!(
            resolve_against("target/uploads", Some(base)),
            PathBuf::from("/opt/shop/target/uploads")
        );
        assert_eq!(
            resolve_against("/var/data/app.db", Some(base)),
            PathBuf::from("/var/data/app.db")
        );
        assert_eq!(resolve_against("app.db", None), PathBuf::from("app.db"));
    }
}
