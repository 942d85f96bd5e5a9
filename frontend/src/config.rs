use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub asset_base_url: Option<String>,
}

impl RuntimeConfig {
    fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_empty(self.api_base_url).or_else(|| non_empty(other.api_base_url)),
            asset_base_url: non_empty(self.asset_base_url)
                .or_else(|| non_empty(other.asset_base_url)),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.asset_base_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub asset_base_url: String,
}

impl ResolvedConfig {
    fn from_runtime(cfg: RuntimeConfig) -> Self {
        Self {
            api_base_url: non_empty(cfg.api_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            asset_base_url: non_empty(cfg.asset_base_url)
                .unwrap_or_else(|| DEFAULT_ASSET_BASE_URL.to_string()),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::from_runtime(RuntimeConfig::default())
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn read_global_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

// Optional global: window.__SUCCESS_STORIES_ENV = { API_BASE_URL: "...", ASSET_BASE_URL: "..." }
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> RuntimeConfig {
    let Some(window) = web_sys::window() else {
        return RuntimeConfig::default();
    };
    let any = match js_sys::Reflect::get(&window, &"__SUCCESS_STORIES_ENV".into()) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return RuntimeConfig::default(),
    };
    let obj = js_sys::Object::from(any);
    RuntimeConfig {
        api_base_url: read_global_key(&obj, &["API_BASE_URL", "api_base_url"]),
        asset_base_url: read_global_key(&obj, &["ASSET_BASE_URL", "asset_base_url"]),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub async fn resolve() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut runtime = snapshot_from_globals();
    if !runtime.is_complete() {
        match fetch_runtime_config().await {
            Some(file) => runtime = runtime.or(file),
            None => log::debug!("config.json unavailable, using defaults for missing keys"),
        }
    }
    let resolved = ResolvedConfig::from_runtime(runtime);
    let _ = RESOLVED.set(resolved.clone());
    RESOLVED.get().cloned().unwrap_or(resolved)
}

pub async fn await_api_base_url() -> String {
    resolve().await.api_base_url
}

/// Asset base for image URLs. Falls back to the default until `init` has run.
pub fn asset_base_url() -> String {
    RESOLVED
        .get()
        .map(|cfg| cfg.asset_base_url.clone())
        .unwrap_or_else(|| DEFAULT_ASSET_BASE_URL.to_string())
}

pub async fn init() {
    let resolved = resolve().await;
    log::info!(
        "Runtime config resolved (api: {}, assets: {})",
        resolved.api_base_url,
        resolved.asset_base_url
    );
}

/// Joins a stored relative image path onto the asset base.
pub fn resolve_image_url(asset_base: &str, relative: &str) -> String {
    let normalized = relative.trim().replace('\\', "/");
    if normalized.starts_with("http://") || normalized.starts_with("https://") {
        return normalized;
    }
    format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        normalized.trim_start_matches('/')
    )
}
