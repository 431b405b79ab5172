//! Browser-side checks, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use article_clipper::{Environment, PopupConfig};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_dev_config_in_browser() {
    let config = PopupConfig::from_host_permissions(&["http://localhost:3000/*"]);

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.signin_url(), "http://localhost:3000/signin?from=extension");
}

#[wasm_bindgen_test]
fn test_prod_config_in_browser() {
    let permissions: Vec<String> = Vec::new();
    let config = PopupConfig::from_host_permissions(&permissions);

    assert_eq!(config.auth_status_url(), "https://your-domain.com/api/auth/status");
}
