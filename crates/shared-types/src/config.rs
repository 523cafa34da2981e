use serde::{Deserialize, Serialize};

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Client-side dashboard configuration.
///
/// Every field defaults so a missing variable or an empty config file falls
/// back to same-origin requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    /// Origin prefix for the backend, e.g. `https://api.example.com`.
    /// Empty means same-origin relative paths.
    #[serde(default)]
    pub backend_url: String,
}

impl DashboardConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into().trim().to_string(),
        }
    }

    /// Read the backend URL from the process environment, falling back to
    /// the value baked in when the bundle was compiled.
    ///
    /// Browsers have no process environment, so wasm builds rely on the
    /// compile-time value.
    pub fn from_env() -> Self {
        let runtime = std::env::var(BACKEND_URL_VAR).ok();
        Self::from_sources(runtime.as_deref(), option_env!("BACKEND_URL"))
    }

    fn from_sources(runtime: Option<&str>, compiled: Option<&str>) -> Self {
        let value = runtime
            .filter(|v| !v.trim().is_empty())
            .or(compiled)
            .unwrap_or_default();
        Self::new(value)
    }

    /// True when requests go to the origin that served the page.
    pub fn is_same_origin(&self) -> bool {
        self.backend_url.is_empty()
    }

    /// Join the base URL and an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.backend_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
