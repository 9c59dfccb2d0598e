//! Line commands typed at the `groove>` prompt

use groove_core::PlaylistId;
use groove_library::Playlist;
use groove_playback::RepeatMode;
use groove_session::{shortcut_for, Intent};
use thiserror::Error;

/// Parsed prompt line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward to the session
    Intent(Intent),

    /// Let the simulated clock run
    Tick(f64),

    /// Run the current track to its end
    Finish,

    Tracks,
    Queue,
    Library,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a number: {0}")]
    NotANumber(String),

    #[error("Not a shortcut key: {0}")]
    UnknownKey(String),
}

pub const HELP: &str = "\
Playback:  play [n] | pause | toggle | next | prev | seek <pct%|+s|-s> | fwd | back
Volume:    vol <0-100|+|-> | mute
Modes:     shuffle | repeat [off|all|one]
Library:   like [n] | unlike <n> | liked <n> | search <text>
Playlists: new <name> [| description] | add <p> [n] | rm <p> <i> | pl <p> <i>
Views:     tracks | queue | library | status
Clock:     tick <secs> | end
Other:     key <KeyboardEvent.code> | help | quit
Numbers are 1-based as listed.";

/// Parse one prompt line
///
/// `playlists` resolves the 1-based playlist numbers shown by `library`.
/// Empty lines parse to `None`.
pub fn parse_line(line: &str, playlists: &[Playlist]) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),

        "play" => match args.first() {
            Some(n) => intent(Intent::PlayTrack {
                index: position(n)?,
            }),
            None => intent(Intent::Play),
        },
        "pause" => intent(Intent::Pause),
        "toggle" => intent(Intent::TogglePlayPause),
        "next" | "n" => intent(Intent::Next),
        "prev" | "p" => intent(Intent::Previous),
        "fwd" => intent(Intent::SeekForward),
        "back" => intent(Intent::SeekBackward),
        "seek" => intent(parse_seek(args.first().copied())?),

        "vol" => intent(parse_volume(args.first().copied())?),
        "mute" => intent(Intent::ToggleMute),

        "shuffle" => intent(Intent::ToggleShuffle),
        "repeat" => intent(match args.first().map(|m| m.to_ascii_lowercase()).as_deref() {
            None => Intent::CycleRepeatMode,
            Some("off") => Intent::SetRepeatMode {
                mode: RepeatMode::Off,
            },
            Some("all") => Intent::SetRepeatMode {
                mode: RepeatMode::All,
            },
            Some("one") => Intent::SetRepeatMode {
                mode: RepeatMode::One,
            },
            Some(_) => return Err(CommandError::Usage("repeat [off|all|one]")),
        }),

        "like" => match args.first() {
            Some(n) => intent(Intent::ToggleLike {
                index: position(n)?,
            }),
            None => intent(Intent::ToggleLikeCurrent),
        },
        "unlike" => intent(Intent::Unlike {
            position: required_position(&args, 0, "unlike <n>")?,
        }),
        "liked" => intent(Intent::PlayLiked {
            position: required_position(&args, 0, "liked <n>")?,
        }),
        // Everything after `search ` is the query, spacing included
        "search" => intent(Intent::Search {
            query: rest.to_string(),
        }),

        "new" => {
            let (name, description) = rest.split_once('|').unwrap_or((rest, ""));
            intent(Intent::CreatePlaylist {
                name: name.to_string(),
                description: description.to_string(),
            })
        }
        "add" => {
            let playlist = playlist_id(playlists, required_position(&args, 0, "add <p> [n]")?);
            match args.get(1) {
                Some(n) => intent(Intent::AddTrackToPlaylist {
                    playlist,
                    track_index: position(n)?,
                }),
                None => intent(Intent::AddCurrentToPlaylist { playlist }),
            }
        }
        "rm" => intent(Intent::RemoveFromPlaylist {
            playlist: playlist_id(playlists, required_position(&args, 0, "rm <p> <i>")?),
            position: required_position(&args, 1, "rm <p> <i>")?,
        }),
        "pl" => intent(Intent::PlayPlaylistEntry {
            playlist: playlist_id(playlists, required_position(&args, 0, "pl <p> <i>")?),
            position: required_position(&args, 1, "pl <p> <i>")?,
        }),

        "key" => {
            let code = args.first().ok_or(CommandError::Usage("key <code>"))?;
            let shortcut =
                shortcut_for(code, false).ok_or_else(|| CommandError::UnknownKey(code.to_string()))?;
            intent(shortcut)
        }

        "tick" => {
            let secs = args.first().ok_or(CommandError::Usage("tick <secs>"))?;
            let secs: f64 = secs
                .parse()
                .map_err(|_| CommandError::NotANumber(secs.to_string()))?;
            Command::Tick(secs)
        }
        "end" => Command::Finish,

        "tracks" => Command::Tracks,
        "queue" => Command::Queue,
        "library" => Command::Library,
        "status" => intent(Intent::TimeUpdate),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,

        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn intent(intent: Intent) -> Command {
    Command::Intent(intent)
}

/// 1-based number to 0-based position
fn position(arg: &str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::NotANumber(arg.to_string())),
    }
}

fn required_position(args: &[&str], at: usize, usage: &'static str) -> Result<usize, CommandError> {
    args.get(at)
        .copied()
        .ok_or(CommandError::Usage(usage))
        .and_then(position)
}

/// Resolve a playlist number; unknown numbers become ids no playlist has
/// so the session decides between "no playlists" and "not found".
fn playlist_id(playlists: &[Playlist], position: usize) -> PlaylistId {
    playlists
        .get(position)
        .map_or_else(|| PlaylistId::new(format!("#{}", position + 1)), |p| p.id().clone())
}

fn parse_seek(arg: Option<&str>) -> Result<Intent, CommandError> {
    const USAGE: &str = "seek <pct%|+secs|-secs>";
    let arg = arg.ok_or(CommandError::Usage(USAGE))?;

    if let Some(percent) = arg.strip_suffix('%') {
        let percent: f64 = percent
            .parse()
            .map_err(|_| CommandError::NotANumber(arg.to_string()))?;
        return Ok(Intent::SeekTo {
            fraction: percent / 100.0,
        });
    }

    if arg.starts_with('+') || arg.starts_with('-') {
        let seconds: f64 = arg
            .parse()
            .map_err(|_| CommandError::NotANumber(arg.to_string()))?;
        return Ok(Intent::SeekBy { seconds });
    }

    Err(CommandError::Usage(USAGE))
}

fn parse_volume(arg: Option<&str>) -> Result<Intent, CommandError> {
    match arg {
        Some("+") => Ok(Intent::VolumeUp),
        Some("-") => Ok(Intent::VolumeDown),
        Some(level) => {
            let percent: f32 = level
                .parse()
                .map_err(|_| CommandError::NotANumber(level.to_string()))?;
            Ok(Intent::SetVolume {
                volume: percent / 100.0,
            })
        }
        None => Err(CommandError::Usage("vol <0-100|+|->")),
    }
}
