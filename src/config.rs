//! Client configuration: API base URL and the session storage key.
//!
//! Values come from build-time environment variables, optionally overridden
//! at runtime by a `window.CMS_CONFIG` object so a static deployment can point
//! at a different API without rebuilding. Nothing here is secret.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key holding the serialized signed-in user.
pub const DEFAULT_STORAGE_KEY: &str = "user";

/// Frontend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for auth endpoints. Empty means same-origin relative paths.
    pub api_base_url: String,
    pub storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: String::new(), storage_key: DEFAULT_STORAGE_KEY.to_owned() }
    }
}

impl ClientConfig {
    /// Load from build-time variables and apply runtime overrides.
    ///
    /// Build-time:
    /// - `CMS_API_BASE_URL`: default empty (same origin)
    /// - `CMS_STORAGE_KEY`: default `user`
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::from_build_env(option_env!("CMS_API_BASE_URL"), option_env!("CMS_STORAGE_KEY"));
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    fn from_build_env(api_base_url: Option<&str>, storage_key: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url.and_then(normalize_value).unwrap_or(defaults.api_base_url),
            storage_key: storage_key.and_then(normalize_value).unwrap_or(defaults.storage_key),
        }
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    storage_key: Option<String>,
}

fn apply_runtime_overrides(config: &mut ClientConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.storage_key {
        config.storage_key = value;
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let object = Reflect::get(&window, &JsValue::from_str("CMS_CONFIG")).ok()?;
    if object.is_null() || object.is_undefined() {
        return None;
    }

    let read = |key: &str| {
        Reflect::get(&object, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .and_then(|value| normalize_value(&value))
    };

    Some(RuntimeConfig { api_base_url: read("api_base_url"), storage_key: read("storage_key") })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
