//! Simulated audio output shared between the session and the terminal
//!
//! The session owns one handle as its `MediaElement`; the presenter keeps
//! another to advance the clock and raise media notifications, the way a
//! browser raises `timeupdate` and `ended`.

use groove_playback::{HeadlessMedia, MediaElement, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Cloneable handle to one `HeadlessMedia`
#[derive(Clone, Default)]
pub struct SharedMedia {
    inner: Rc<RefCell<HeadlessMedia>>,
}

impl SharedMedia {
    pub fn new(media: HeadlessMedia) -> Self {
        Self {
            inner: Rc::new(RefCell::new(media)),
        }
    }

    /// Advance playback by `seconds`, returning whether the track ended
    pub fn advance(&self, seconds: f64) -> bool {
        self.inner.borrow_mut().advance(seconds)
    }

    /// Seconds left in the loaded track, when its length is known
    pub fn remaining(&self) -> Option<f64> {
        let media = self.inner.borrow();
        media
            .duration()
            .map(|duration| (duration - media.current_time()).max(0.0))
    }

    pub fn is_playing(&self) -> bool {
        self.inner.borrow().is_playing()
    }
}

impl MediaElement for SharedMedia {
    fn load(&mut self, media_ref: &str) -> Result<()> {
        self.inner.borrow_mut().load(media_ref)
    }

    fn play(&mut self) -> Result<()> {
        self.inner.borrow_mut().play()
    }

    fn pause(&mut self) {
        self.inner.borrow_mut().pause();
    }

    fn current_time(&self) -> f64 {
        self.inner.borrow().current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.inner.borrow_mut().set_current_time(seconds);
    }

    fn duration(&self) -> Option<f64> {
        self.inner.borrow().duration()
    }

    fn volume(&self) -> f32 {
        self.inner.borrow().volume()
    }

    fn set_volume(&mut self, volume: f32) {
        self.inner.borrow_mut().set_volume(volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_clock() {
        let mut session_side = SharedMedia::new(HeadlessMedia::with_default_duration(10.0));
        let terminal_side = session_side.clone();

        session_side.load("a.mp3").unwrap();
        session_side.play().unwrap();

        assert!(!terminal_side.advance(4.0));
        assert_eq!(session_side.current_time(), 4.0);
        assert_eq!(terminal_side.remaining(), Some(6.0));

        assert!(terminal_side.advance(6.0));
        assert!(!session_side.is_playing());
    }
}
