use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Fixed-window rate limit: requests allowed per window (default: `200`).
    pub rate_limit_requests: usize,
    /// Fixed-window rate limit: window length in seconds (default: `60`).
    pub rate_limit_window_secs: u64,
    /// Email of the administrative user seeded at startup.
    pub admin_email: String,
    /// Initial password for the seeded administrative user.
    pub admin_password: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173,http://localhost:4173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `RATE_LIMIT_REQUESTS`  | `200`                      |
    /// | `RATE_LIMIT_WINDOW`    | `60`                       |
    /// | `ADMIN_EMAIL`          | `admin@local`              |
    /// | `ADMIN_PASSWORD`       | `admin123`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173,http://localhost:4173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let rate_limit_requests: usize = std::env::var("RATE_LIMIT_REQUESTS")
            .unwrap_or_else(|_| "200".into())
            .parse()
            .expect("RATE_LIMIT_REQUESTS must be a valid usize");

        let rate_limit_window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("RATE_LIMIT_WINDOW must be a valid u64");

        let admin_email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@local".into());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            rate_limit_requests,
            rate_limit_window_secs,
            admin_email,
            admin_password,
            jwt,
        }
    }
}
