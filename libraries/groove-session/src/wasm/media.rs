//! `MediaElement` backed by a browser audio element

use groove_playback::{MediaElement, PlaybackError, Result};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

/// Browser `<audio>` element
pub struct HtmlAudioMedia {
    element: HtmlAudioElement,
}

impl HtmlAudioMedia {
    /// Create a detached audio element
    pub fn new() -> std::result::Result<Self, JsValue> {
        Ok(Self {
            element: HtmlAudioElement::new()?,
        })
    }

    /// Wrap an element already in the page
    pub fn from_element(element: HtmlAudioElement) -> Self {
        Self { element }
    }

    /// Underlying element, for attaching `timeupdate`/`ended` listeners
    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

fn js_error(error: &JsValue) -> PlaybackError {
    PlaybackError::media(
        error
            .as_string()
            .unwrap_or_else(|| format!("{error:?}")),
    )
}

impl MediaElement for HtmlAudioMedia {
    fn load(&mut self, media_ref: &str) -> Result<()> {
        if media_ref.is_empty() {
            return Err(PlaybackError::media("empty media reference"));
        }
        self.element.set_src(media_ref);
        self.element.load();
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        // The returned promise rejects asynchronously (autoplay policy);
        // the page reports that through its own error listener.
        self.element.play().map(|_| ()).map_err(|e| js_error(&e))
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            tracing::warn!(error = %js_error(&e), "Pause rejected");
        }
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn duration(&self) -> Option<f64> {
        Some(self.element.duration())
    }

    fn volume(&self) -> f32 {
        self.element.volume() as f32
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(f64::from(volume));
    }
}
