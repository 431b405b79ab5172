/// Popup configuration: backend environment and flow timings
use std::time::Duration;
use url::Url;

pub const DEV_PERMISSION_PATTERN: &str = "http://localhost:3000/*";
pub const DEV_BASE_URL: &str = "http://localhost:3000";
pub const PROD_BASE_URL: &str = "https://your-domain.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Pick the environment from the manifest's `host_permissions`.
    ///
    /// Development is selected only when the localhost pattern is declared;
    /// anything else (including an empty list) is production.
    pub fn from_host_permissions<S: AsRef<str>>(permissions: &[S]) -> Environment {
        if permissions.iter().any(|p| p.as_ref() == DEV_PERMISSION_PATTERN) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Development => DEV_BASE_URL,
            Environment::Production => PROD_BASE_URL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    pub environment: Environment,
    pub base_url: String,
    pub poll_interval: Duration,
    pub max_poll_attempts: u32,
    pub close_delay: Duration,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig::for_environment(Environment::Production)
    }
}

impl PopupConfig {
    pub fn for_environment(environment: Environment) -> Self {
        PopupConfig {
            environment,
            base_url: environment.base_url().to_string(),
            poll_interval: Duration::from_secs(1),
            max_poll_attempts: 120,
            close_delay: Duration::from_secs(3),
        }
    }

    pub fn from_host_permissions<S: AsRef<str>>(permissions: &[S]) -> Self {
        PopupConfig::for_environment(Environment::from_host_permissions(permissions))
    }

    pub fn auth_status_url(&self) -> String {
        self.endpoint("/api/auth/status")
    }

    pub fn save_article_url(&self) -> String {
        self.endpoint("/api/save-article")
    }

    pub fn signin_url(&self) -> String {
        match Url::parse(&self.endpoint("/signin")) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("from", "extension");
                url.to_string()
            }
            Err(_) => format!("{}?from=extension", self.endpoint("/signin")),
        }
    }

    /// Origin used to look up session cookies.
    pub fn cookie_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        match Url::parse(&self.base_url).and_then(|base| base.join(path)) {
            Ok(url) => url.to_string(),
            Err(e) => {
                log::warn!("Base URL {} is not a valid URL: {}", self.base_url, e);
                format!("{}{}", self.base_url.trim_end_matches('/'), path)
            }
        }
    }
}
