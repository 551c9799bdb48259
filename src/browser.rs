//! Browser Bindings
//!
//! Thin wrappers over web-sys for storage, files, downloads and history.
//! Every call returns `Result<_, String>` so callers can log and move on.

use admin_core::auth::TokenStore;
use admin_core::config::{AdminConfig, CONFIG_KEY};
use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ========================
// Storage
// ========================

/// Auth token kept in `localStorage` under a configurable key
#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn save(&mut self, token: &str) {
        if let Err(e) = local_storage().and_then(|s| s.set_item(&self.key, token).map_err(|e| format!("{:?}", e))) {
            log::error!("Failed to store token: {}", e);
        }
    }

    fn remove(&mut self) {
        if let Err(e) = local_storage().and_then(|s| s.remove_item(&self.key).map_err(|e| format!("{:?}", e))) {
            log::error!("Failed to remove token: {}", e);
        }
    }
}

/// Config overrides from `localStorage`, defaults otherwise
pub fn load_config() -> AdminConfig {
    let raw = match local_storage().map(|s| s.get_item(CONFIG_KEY)) {
        Ok(Ok(Some(raw))) => raw,
        _ => return AdminConfig::default(),
    };
    match AdminConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("Loaded config overrides from {}", CONFIG_KEY);
            config
        }
        Err(e) => {
            log::warn!("Ignoring malformed {}: {}", CONFIG_KEY, e);
            AdminConfig::default()
        }
    }
}

// ========================
// Files
// ========================

/// First file picked in an `<input type="file">`
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// All files picked in an `<input type="file" multiple>`
pub fn selected_files(ev: &web_sys::Event) -> Vec<web_sys::File> {
    let Some(files) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
    else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// Clear the input so picking the same file again fires `change`
pub fn reset_file_input(ev: &web_sys::Event) {
    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
        input.set_value("");
    }
}

pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text()).await.map_err(|e| format!("{:?}", e))?;
    text.as_string().ok_or_else(|| format!("{} is not text", file.name()))
}

pub fn object_url(file: &web_sys::File) -> Result<String, String> {
    web_sys::Url::create_object_url_with_blob(file).map_err(|e| format!("{:?}", e))
}

pub fn revoke_object_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        log::warn!("Failed to revoke {}: {:?}", url, e);
    }
}

const DOWNLOAD_REVOKE_DELAY_MS: u32 = 1_000;

/// Save `contents` as a CSV download named `file_name`
pub fn download_csv(file_name: &str, contents: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let result = (|| -> Result<(), String> {
        let anchor = window()?
            .document()
            .ok_or_else(|| "no document".to_string())?
            .create_element("a")
            .map_err(|e| format!("{:?}", e))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "not an anchor".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        Ok(())
    })();
    // Revoking in the same tick can cancel the download in some browsers
    Timeout::new(DOWNLOAD_REVOKE_DELAY_MS, move || revoke_object_url(&url)).forget();
    result
}

// ========================
// History
// ========================

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().map_err(|e| format!("{:?}", e)))
        .unwrap_or_else(|_| "/".to_string())
}

pub fn push_path(path: &str) -> Result<(), String> {
    window()?
        .history()
        .map_err(|e| format!("{:?}", e))?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| format!("{:?}", e))
}

pub fn replace_path(path: &str) -> Result<(), String> {
    window()?
        .history()
        .map_err(|e| format!("{:?}", e))?
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| format!("{:?}", e))
}
