/// Data structures exchanged with the browser and the backend
use crate::error::{FlowError, Result};
use serde::{Deserialize, Serialize};

/// The active tab, as reported by `chrome.tabs.query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabDescriptor {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

impl TabDescriptor {
    pub fn new(id: i32, url: &str, title: &str) -> TabDescriptor {
        TabDescriptor {
            id: Some(id),
            url: url.to_string(),
            title: title.to_string(),
        }
    }

    /// Title shown in the popup header
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }

    pub fn save_request(&self) -> SaveRequest {
        SaveRequest {
            url: self.url.clone(),
            title: self.title.clone(),
        }
    }
}

/// A cookie from the backend's origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: &str, value: &str) -> Cookie {
        Cookie {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Serialize cookies into a `Cookie` header value.
///
/// Pairs keep the order they were enumerated in and are joined by `"; "`.
pub fn cookie_header(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(|c| format!("{}={}", c.name, c.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Body of `POST /api/save-article`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub url: String,
    pub title: String,
}

impl SaveRequest {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FlowError::validation(format!("Failed to serialize request: {}", e)))
    }
}

/// Response of `POST /api/save-article`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveResult {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SaveResult {
    /// Parse a response body, rejecting anything outside `{ success: bool, error?: string }`.
    pub fn parse(body: &str) -> Result<SaveResult> {
        serde_json::from_str(body).map_err(|e| FlowError::validation(format!("Malformed save response: {}", e)))
    }

    /// Turn a parsed result into success or a validation error carrying the backend message.
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(FlowError::Validation {
                message: "backend reported success=false".to_string(),
                backend_message: self.error,
            })
        }
    }
}
