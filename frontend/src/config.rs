/// Compile-time configuration for the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the remote booking service, without a trailing slash.
    pub api_base_url: String,
}

impl AppConfig {
    /// Load configuration from compile-time environment variables, falling
    /// back to the local development server.
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or("http://localhost:5000/api")
                .to_string(),
        }
    }
}
