/// Chrome-backed implementations of the platform ports
use crate::config::PopupConfig;
use crate::error::{FlowError, Result as FlowResult};
use crate::platform::{Browser, HttpClient, HttpRequest, HttpResponse, Sleeper};
use crate::tab_data::{Cookie, TabDescriptor};
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getCookies(url: &str) -> Result<JsValue, JsValue>;

    fn getHostPermissions() -> JsValue;

    fn closePopup();
}

fn js_message(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn platform_error(e: JsValue) -> FlowError {
    FlowError::Platform(js_message(&e))
}

fn network_error(e: JsValue) -> FlowError {
    FlowError::Network(js_message(&e))
}

/// Build the popup configuration from the extension manifest.
pub fn load_config() -> PopupConfig {
    let permissions: Vec<String> = serde_wasm_bindgen::from_value(getHostPermissions()).unwrap_or_else(|e| {
        log::warn!("Could not read host_permissions: {:?}", e);
        Vec::new()
    });

    let config = PopupConfig::from_host_permissions(&permissions);
    log::info!("Using {:?} backend at {}", config.environment, config.base_url);
    config
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeBrowser;

impl Browser for ChromeBrowser {
    async fn active_tab(&self) -> FlowResult<TabDescriptor> {
        let tab_js = getActiveTab().await.map_err(platform_error)?;
        if tab_js.is_null() || tab_js.is_undefined() {
            return Err(FlowError::Platform("No active tab".to_string()));
        }
        serde_wasm_bindgen::from_value(tab_js).map_err(|e| FlowError::Platform(format!("Failed to parse tab: {:?}", e)))
    }

    async fn create_tab(&self, url: &str) -> FlowResult<i32> {
        let tab_js = createTab(url).await.map_err(platform_error)?;
        let tab: TabDescriptor = serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| FlowError::Platform(format!("Failed to parse tab: {:?}", e)))?;
        tab.id.ok_or_else(|| FlowError::Platform("Created tab has no id".to_string()))
    }

    async fn remove_tab(&self, tab_id: i32) -> FlowResult<()> {
        removeTab(tab_id).await.map_err(platform_error)
    }

    async fn cookies(&self, url: &str) -> FlowResult<Vec<Cookie>> {
        let cookies_js = getCookies(url).await.map_err(platform_error)?;
        serde_wasm_bindgen::from_value(cookies_js)
            .map_err(|e| FlowError::Platform(format!("Failed to parse cookies: {:?}", e)))
    }

    fn close_popup(&self) {
        closePopup();
    }
}

/// `fetch` through `web-sys`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl HttpClient for FetchClient {
    async fn send(&self, request: HttpRequest) -> FlowResult<HttpResponse> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if request.with_credentials {
            init.set_credentials(RequestCredentials::Include);
        }

        let headers = Headers::new().map_err(network_error)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(network_error)?;
        }
        init.set_headers(&headers);

        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let fetch_request = Request::new_with_str_and_init(&request.url, &init).map_err(network_error)?;
        let window = web_sys::window().ok_or_else(|| FlowError::Platform("No window".to_string()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        // An unreadable body is left to schema validation
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|text| text.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        log::debug!("{} {} -> {}", request.method.as_str(), request.url, response.status());
        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = duration.as_millis().min(u32::MAX as u128) as u32;
        TimeoutFuture::new(millis).await;
    }
}
