use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(object: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__GYM_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__GYM_CONFIG = { api_base_url: "..." }.
    read_global("__GYM_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__GYM_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__GYM_CONFIG".into(), &obj);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_cfg: &RuntimeConfig) {}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "./config.json".to_string()
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let url = config_json_url();
    let resp = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .with_context(|| format!("failed to fetch {url}"))?;
    if !resp.status().is_success() {
        bail!("{url} responded with {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not a valid runtime config")
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if cfg!(target_arch = "wasm32") {
        match fetch_runtime_config().await {
            Ok(cfg) => {
                write_window_config(&cfg);
                if let Some(url) = cfg.api_base_url {
                    return cache_base_url(&url);
                }
            }
            Err(err) => log::warn!("runtime config unavailable, using default: {err:#}"),
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {url}");
}
