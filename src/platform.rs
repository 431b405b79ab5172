//! Ports between the flow and the browser it runs in.
//!
//! The popup implements these against Chrome in `bridge`; tests implement them
//! in memory. All futures are `!Send`: everything runs on the page's event loop.
#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::status::Status;
use crate::tab_data::{Cookie, TabDescriptor};
use std::time::Duration;

/// Tab, cookie, and window access
pub trait Browser {
    async fn active_tab(&self) -> Result<TabDescriptor>;

    /// Open a tab and return its id
    async fn create_tab(&self, url: &str) -> Result<i32>;

    async fn remove_tab(&self, tab_id: i32) -> Result<()>;

    /// Cookies visible to `url`, in the order the browser enumerates them
    async fn cookies(&self, url: &str) -> Result<Vec<Cookie>>;

    fn close_popup(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send with `credentials: "include"`
    pub with_credentials: bool,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> HttpRequest {
        HttpRequest {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            with_credentials: false,
        }
    }

    pub fn post_json(url: impl Into<String>, body: String) -> HttpRequest {
        HttpRequest {
            method: Method::Post,
            url: url.into(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
            with_credentials: false,
        }
    }

    /// Attach session cookies and include credentials
    pub fn with_session(mut self, cookie_header: String) -> HttpRequest {
        self.headers.push(("Cookie".to_string(), cookie_header));
        self.with_credentials = true;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpClient {
    /// Resolves for any HTTP status; errors only when no response arrived.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// The popup's status region and page-title line
pub trait StatusView {
    fn render(&self, status: Status);

    fn show_page_title(&self, title: &str);
}
