//! Runtime configuration of the admin panel
//!
//! Defaults come from the window location. `index.html` may override them:
//!
//! ```html
//! <meta name="scd:api-base" content="https://scd.example.com/api">
//! <meta name="scd:firebase-api-key" content="AIza...">
//! <meta name="scd:public-routes" content="/login,/register,/test-firebase">
//! <meta name="scd:token-refresh-ms" content="3000000">
//! ```

use crate::shared::api_utils::api_base;

const META_PREFIX: &str = "scd:";

pub const DEFAULT_PUBLIC_ROUTES: [&str; 3] = ["/login", "/register", "/test-firebase"];

/// ID tokens live for an hour, so they are renewed every 50 minutes
pub const DEFAULT_TOKEN_REFRESH_MS: u32 = 50 * 60 * 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub firebase_api_key: String,
    pub login_path: String,
    pub home_path: String,
    pub public_routes: Vec<String>,
    pub token_refresh_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            firebase_api_key: String::new(),
            login_path: "/login".to_string(),
            home_path: "/products".to_string(),
            public_routes: DEFAULT_PUBLIC_ROUTES.iter().map(|r| r.to_string()).collect(),
            token_refresh_interval_ms: DEFAULT_TOKEN_REFRESH_MS,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the current document
    pub fn from_document() -> Self {
        let mut config = Self {
            api_base: api_base(),
            ..Self::default()
        };
        config.apply(read_meta);
        config
    }

    /// Applies overrides from a `name -> content` lookup (names without prefix)
    pub fn apply(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup("api-base").filter(|v| !v.trim().is_empty()) {
            self.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(key) = lookup("firebase-api-key") {
            self.firebase_api_key = key.trim().to_string();
        }
        if let Some(routes) = lookup("public-routes") {
            self.public_routes = routes
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect();
        }
        match lookup("token-refresh-ms").map(|v| v.trim().parse::<u32>()) {
            Some(Ok(ms)) if ms > 0 => self.token_refresh_interval_ms = ms,
            Some(_) => log::warn!("Ignoring invalid scd:token-refresh-ms"),
            None => {}
        }
    }

    pub fn is_public_route(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.public_routes.iter().any(|route| normalize_path(route) == path)
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}{}\"]", META_PREFIX, name);
    document
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}
