use car_market::{KeyValueStore, StoreError};
use wasm_bindgen::{JsCast, JsValue};

/// `window.localStorage`. Missing storage (private mode, sandboxed frames)
/// reads as empty and fails writes.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"Local storage is not available".into());
        }
        Self { storage }
    }
}

fn describe(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{error:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(StoreError::Unavailable("window.localStorage".to_string()));
        };

        storage
            .set_item(key, value)
            .map_err(|error| StoreError::WriteRejected {
                key: key.to_string(),
                reason: describe(&error),
            })
    }
}
