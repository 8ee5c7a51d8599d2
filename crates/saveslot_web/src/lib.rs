//! Browser local-storage frontend.
//!
//! The save lives under a single localStorage key, encoded in the same
//! textual format as the file-based path. The storage provider is selected
//! once per call site: hosts without localStorage get [`UnavailableStore`],
//! so callers see a coded "storage_unavailable" error instead of silent
//! no-ops.

use saveslot_core::error::{SaveError, SaveErrorCode};
use saveslot_core::model::SaveData;
use saveslot_core::store::{SaveStore, UnavailableStore};
use saveslot_render::{TextRenderOptions, render_status_sheet};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// localStorage key holding the textual save encoding.
pub const STORAGE_KEY: &str = "saveslot_save_data";

const UNAVAILABLE_REASON: &str = "browser storage is not available in this host";

#[derive(Debug, Clone)]
struct WebError {
    code: &'static str,
    message: String,
}

#[derive(Debug, Clone, Serialize)]
struct WebErrorPayload {
    code: String,
    message: String,
}

impl WebError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn from_save_error(err: SaveError) -> Self {
        let code = match err.code {
            SaveErrorCode::Io => "io_failed",
            SaveErrorCode::Corrupt => "corrupt_save",
            SaveErrorCode::Unavailable => "storage_unavailable",
        };
        Self::new(code, err.message)
    }

    fn to_js_value(&self) -> JsValue {
        let payload = WebErrorPayload {
            code: self.code.to_string(),
            message: self.message.clone(),
        };
        serde_wasm_bindgen::to_value(&payload).unwrap_or_else(|_| {
            JsValue::from_str(&format!("{}: {}", payload.code, payload.message))
        })
    }
}

/// Save store backed by `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl SaveStore for LocalStorageStore {
    fn kind(&self) -> &'static str {
        "local-storage"
    }

    fn load(&self) -> Result<Option<SaveData>, SaveError> {
        let Some(storage) = local_storage() else {
            return Err(SaveError::new(
                SaveErrorCode::Unavailable,
                UNAVAILABLE_REASON,
            ));
        };
        let text = storage.get_item(&self.key).map_err(|_| {
            SaveError::new(
                SaveErrorCode::Io,
                format!("failed to read localStorage key '{}'", self.key),
            )
        })?;
        match text {
            Some(text) => saveslot_core::codec::decode_json(&text).map(Some),
            None => Ok(None),
        }
    }

    fn store(&self, data: &SaveData) -> Result<(), SaveError> {
        let Some(storage) = local_storage() else {
            return Err(SaveError::new(
                SaveErrorCode::Unavailable,
                UNAVAILABLE_REASON,
            ));
        };
        let text = saveslot_core::codec::encode_json(data);
        storage.set_item(&self.key, &text).map_err(|_| {
            SaveError::new(
                SaveErrorCode::Io,
                format!("failed to write localStorage key '{}'", self.key),
            )
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Select the storage provider for this host, probed at call time.
pub fn browser_store() -> Box<dyn SaveStore> {
    #[cfg(target_arch = "wasm32")]
    {
        if local_storage().is_some() {
            return Box::new(LocalStorageStore::new(STORAGE_KEY));
        }
    }
    Box::new(UnavailableStore::new(UNAVAILABLE_REASON))
}

/// Load the save from browser storage. Resolves to `null` when no save
/// exists yet.
#[wasm_bindgen]
pub fn load_save() -> Result<JsValue, JsValue> {
    match load_save_impl(browser_store().as_ref()) {
        Ok(Some(data)) => {
            serde_wasm_bindgen::to_value(&data.to_json()).map_err(|err| {
                WebError::new("render_failed", format!("failed to convert save: {err}"))
                    .to_js_value()
            })
        }
        Ok(None) => Ok(JsValue::NULL),
        Err(err) => Err(err.to_js_value()),
    }
}

/// Store a save object (the textual format's JSON shape) in browser storage.
/// Unknown fields are dropped and missing fields take their defaults.
#[wasm_bindgen]
pub fn store_save(value: JsValue) -> Result<(), JsValue> {
    if value.is_null() || value.is_undefined() {
        return Err(
            WebError::new("invalid_save", "expected a save object, got null").to_js_value(),
        );
    }
    let tree: serde_json::Value = serde_wasm_bindgen::from_value(value).map_err(|err| {
        WebError::new("invalid_save", format!("failed to read save object: {err}")).to_js_value()
    })?;
    let data = SaveData::from_json(&tree);
    store_save_impl(browser_store().as_ref(), &data).map_err(|err| err.to_js_value())
}

/// Remove the save from browser storage.
#[wasm_bindgen]
pub fn clear_save() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            return storage.remove_item(STORAGE_KEY).map_err(|_| {
                WebError::new("io_failed", "failed to remove localStorage key").to_js_value()
            });
        }
    }
    Err(WebError::new("storage_unavailable", UNAVAILABLE_REASON).to_js_value())
}

/// Render the stored save as a text status sheet. Resolves to `null` when
/// no save exists yet.
#[wasm_bindgen]
pub fn render_save_sheet(verbose: bool) -> Result<Option<String>, JsValue> {
    render_sheet_impl(browser_store().as_ref(), verbose).map_err(|err| err.to_js_value())
}

fn load_save_impl(store: &dyn SaveStore) -> Result<Option<SaveData>, WebError> {
    store.load().map_err(WebError::from_save_error)
}

fn store_save_impl(store: &dyn SaveStore, data: &SaveData) -> Result<(), WebError> {
    store.store(data).map_err(WebError::from_save_error)
}

fn render_sheet_impl(store: &dyn SaveStore, verbose: bool) -> Result<Option<String>, WebError> {
    let Some(data) = load_save_impl(store)? else {
        return Ok(None);
    };
    Ok(Some(render_status_sheet(
        &data,
        TextRenderOptions { verbose },
    )))
}

#[cfg(test)]
mod tests {
    use saveslot_core::model::{CharacterId, Language, SaveData};
    use saveslot_core::store::MemoryStore;

    use super::{browser_store, load_save_impl, render_sheet_impl, store_save_impl};

    fn populated_save() -> SaveData {
        let mut data = SaveData::new();
        data.option_data.language = Language::En;
        data.game_data
            .character_mut(CharacterId::Chara001)
            .expect("default roster should contain CHARA_001")
            .name = "Hero".to_string();
        data.record_data.add_log("Saved from the browser.");
        data
    }

    #[test]
    fn store_then_load_roundtrips() {
        let store = MemoryStore::new();
        let original = populated_save();

        store_save_impl(&store, &original).expect("store should succeed");
        let loaded = load_save_impl(&store)
            .expect("load should succeed")
            .expect("stored save should exist");
        assert_eq!(loaded, original);
    }

    #[test]
    fn empty_slot_loads_as_none() {
        let store = MemoryStore::new();
        let loaded = load_save_impl(&store).expect("empty slot should not error");
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_slot_reports_corrupt_code() {
        let store = MemoryStore::new();
        store.set_raw("{ not valid json");
        let err = load_save_impl(&store).expect_err("corrupt slot should error");
        assert_eq!(err.code, "corrupt_save");
    }

    #[test]
    fn render_sheet_covers_absent_and_present() {
        let store = MemoryStore::new();
        assert!(
            render_sheet_impl(&store, false)
                .expect("absent save should not error")
                .is_none()
        );

        store_save_impl(&store, &populated_save()).expect("store should succeed");
        let sheet = render_sheet_impl(&store, false)
            .expect("render should succeed")
            .expect("stored save should render");
        assert!(sheet.contains("::: Options :::"));
        assert!(sheet.contains("Hero"));
    }

    #[test]
    fn native_host_has_no_browser_storage() {
        let err = browser_store()
            .load()
            .expect_err("native host should be unavailable");
        assert_eq!(
            err.code,
            saveslot_core::error::SaveErrorCode::Unavailable
        );
    }
}
