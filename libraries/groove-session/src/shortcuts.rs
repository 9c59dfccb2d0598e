//! Keyboard shortcut map

use crate::intent::Intent;

/// Intent for a key press, using DOM `KeyboardEvent.code` names
///
/// Keys typed into a text input never trigger shortcuts.
pub fn shortcut_for(key_code: &str, target_is_text_input: bool) -> Option<Intent> {
    if target_is_text_input {
        return None;
    }

    let intent = match key_code {
        "Space" => Intent::TogglePlayPause,
        "ArrowRight" => Intent::SeekForward,
        "ArrowLeft" => Intent::SeekBackward,
        "ArrowUp" => Intent::VolumeUp,
        "ArrowDown" => Intent::VolumeDown,
        "KeyM" => Intent::ToggleMute,
        "KeyS" => Intent::ToggleShuffle,
        "KeyR" => Intent::CycleRepeatMode,
        _ => return None,
    };
    Some(intent)
}
