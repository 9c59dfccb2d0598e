//! WASM-compatible session wrapper

use super::media::HtmlAudioMedia;
use crate::{shortcut_for, Intent, Notice, Session, SessionError};
use groove_core::Catalog;
use groove_playback::{format_time, PlaybackConfig};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// Browser-facing player
///
/// The page forwards gestures with `dispatch` (tagged intent objects such
/// as `{ type: "play_track", index: 2 }`) and audio events with
/// `timeUpdate`/`ended`. Registered callbacks receive the new snapshot
/// and any notice after each call.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: Session<HtmlAudioMedia>,

    // Event callbacks
    on_render: Option<Function>,
    on_notice: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player over a catalog JSON string, or the sample catalog
    #[wasm_bindgen(constructor)]
    pub fn new(
        audio: Option<HtmlAudioElement>,
        catalog_json: Option<String>,
        config: JsValue,
    ) -> Result<WasmPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let catalog = match catalog_json {
            Some(json) => Catalog::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Catalog::sample(),
        };
        let config: PlaybackConfig = if config.is_undefined() || config.is_null() {
            PlaybackConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?
        };
        let media = match audio {
            Some(element) => HtmlAudioMedia::from_element(element),
            None => HtmlAudioMedia::new()?,
        };

        let inner =
            Session::new(catalog, media, config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner,
            on_render: None,
            on_notice: None,
            on_error: None,
        })
    }

    // ===== Gestures =====

    /// Apply an intent object
    pub fn dispatch(&mut self, intent: JsValue) -> Result<(), JsValue> {
        let intent: Intent = serde_wasm_bindgen::from_value(intent)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse intent: {e}")))?;
        self.apply(intent)
    }

    /// Handle a `keydown`; returns whether the key was a shortcut
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, code: &str, target_is_text_input: bool) -> Result<bool, JsValue> {
        match shortcut_for(code, target_is_text_input) {
            Some(intent) => self.apply(intent).map(|()| true),
            None => Ok(false),
        }
    }

    // ===== Audio Events =====

    /// Forward the element's `timeupdate` event
    #[wasm_bindgen(js_name = timeUpdate)]
    pub fn time_update(&mut self) -> Result<(), JsValue> {
        self.apply(Intent::TimeUpdate)
    }

    /// Forward the element's `ended` event
    pub fn ended(&mut self) -> Result<(), JsValue> {
        self.apply(Intent::TrackEnded)
    }

    // ===== State Queries =====

    /// Current session snapshot as a plain object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Audio element the player drives
    #[wasm_bindgen(getter, js_name = audioElement)]
    pub fn audio_element(&self) -> HtmlAudioElement {
        self.inner.playback().media().element().clone()
    }

    // ===== Event Listeners =====

    /// Register render callback, called with each new snapshot
    #[wasm_bindgen(js_name = onRender)]
    pub fn on_render(&mut self, callback: Function) {
        self.on_render = Some(callback);
    }

    /// Register notice callback, called with the notice message
    #[wasm_bindgen(js_name = onNotice)]
    pub fn on_notice(&mut self, callback: Function) {
        self.on_notice = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn apply(&mut self, intent: Intent) -> Result<(), JsValue> {
        match self.inner.dispatch(intent) {
            Ok(notice) => {
                if let Some(notice) = notice {
                    self.emit_notice(&notice);
                }
                self.emit_render();
                Ok(())
            }
            Err(error) => Err(self.handle_error(&error)),
        }
    }

    fn emit_render(&self) {
        if let Some(ref cb) = self.on_render {
            cb.call1(&JsValue::NULL, &self.snapshot()).ok();
        }
    }

    fn emit_notice(&self, notice: &Notice) {
        if let Some(ref cb) = self.on_notice {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&notice.to_string()))
                .ok();
        }
    }

    fn handle_error(&self, error: &SessionError) -> JsValue {
        let err_msg = JsValue::from_str(&error.to_string());
        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &err_msg).ok();
        }
        err_msg
    }
}

/// Format seconds as `m:ss` for progress labels
#[wasm_bindgen(js_name = formatTime)]
pub fn format_time_js(seconds: f64) -> String {
    format_time(seconds)
}
