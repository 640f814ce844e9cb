use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use zeroize::Zeroizing;

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// The deployment environment name (`development` or `production`).
    pub environment: String,
    /// The password for the seeded admin account.
    pub seed_admin_password: Zeroizing<String>,
    /// The password for the seeded regular account.
    pub seed_user_password: Zeroizing<String>,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// Every variable has a development default; the seed passwords should
    /// be overridden anywhere that is not a throwaway deployment.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("Invalid PORT")?;

        Ok(Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], port)),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            seed_admin_password: Zeroizing::new(
                env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            ),
            seed_user_password: Zeroizing::new(
                env::var("SEED_USER_PASSWORD").unwrap_or_else(|_| "user123".to_string()),
            ),
        })
    }

    /// Whether the server runs in production mode (Secure cookies).
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            environment: "development".to_string(),
            seed_admin_password: Zeroizing::new("admin123".to_string()),
            seed_user_password: Zeroizing::new("user123".to_string()),
        }
    }
}
