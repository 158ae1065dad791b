//! PostHog-backed remote flag provider
//!
//! The provider handle is looked up lazily and cached for the life of the
//! page; a failed lookup is not cached so a late-loading provider script
//! still gets picked up. Every JS fault degrades to "no opinion".
use js_sys::{Function, Object, Reflect};
use mvpm_game::flags::RemoteFlags;
use once_cell::unsync::OnceCell;
use wasm_bindgen::{JsCast, JsValue};

const OPT_OUT_STORAGE_KEY: &str = "disable_posthog";

thread_local! {
    static POSTHOG_HANDLE: OnceCell<Object> = const { OnceCell::new() };
}

fn lookup_posthog() -> Option<Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("posthog")).ok()?;
    value.dyn_into::<Object>().ok()
}

/// The process-wide provider handle, created on first use.
fn posthog_handle() -> Option<Object> {
    POSTHOG_HANDLE.with(|cell| {
        if let Some(handle) = cell.get() {
            return Some(handle.clone());
        }
        let handle = lookup_posthog()?;
        let _ = cell.set(handle.clone());
        Some(handle)
    })
}

/// Whether this device disabled the provider via local storage.
#[must_use]
pub fn device_opt_out() -> bool {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::get::<String>(OPT_OUT_STORAGE_KEY)
        .map(|value| value == "true")
        .unwrap_or(false)
}

/// `window.posthog.isFeatureEnabled(key)`; `undefined` means no opinion.
pub struct PosthogFlags;

impl RemoteFlags for PosthogFlags {
    fn is_feature_enabled(&self, mangled_key: &str) -> Option<bool> {
        let posthog = posthog_handle()?;
        let method = Reflect::get(&posthog, &JsValue::from_str("isFeatureEnabled")).ok()?;
        let method = method.dyn_into::<Function>().ok()?;
        match method.call1(&posthog, &JsValue::from_str(mangled_key)) {
            Ok(value) => value.as_bool(),
            Err(err) => {
                log::debug!("posthog.isFeatureEnabled failed: {err:?}");
                None
            }
        }
    }
}
