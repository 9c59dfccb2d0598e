//! Volume and mute model
//!
//! Volume is a linear level in [0, 1], written straight to the media
//! element. Muting snapshots the level and drops it to zero; unmuting
//! restores the snapshot exactly.

/// Volume controller with mute snapshot
#[derive(Debug, Clone)]
pub struct Volume {
    /// Effective level (0.0 while muted)
    level: f32,

    /// Mute state
    muted: bool,

    /// Level captured when mute was switched on
    level_before_mute: f32,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0.0-1.0, default: 1.0)
    pub fn new(level: f32) -> Self {
        let level = Self::clamp(level);
        Self {
            level,
            muted: false,
            level_before_mute: level,
        }
    }

    /// Set volume level, clamped to [0, 1]
    ///
    /// Leaves the mute flag untouched: setting a level while muted makes
    /// audio audible but the flag stays on until the next `toggle_mute`.
    pub fn set_level(&mut self, level: f32) {
        self.level = Self::clamp(level);
    }

    /// Get current effective level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute state, returning the new flag
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if self.muted {
            self.level_before_mute = self.level;
            self.level = 0.0;
        } else {
            self.level = self.level_before_mute;
        }
        self.muted
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level saved by the last mute
    pub fn level_before_mute(&self) -> f32 {
        self.level_before_mute
    }

    fn clamp(level: f32) -> f32 {
        if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}
