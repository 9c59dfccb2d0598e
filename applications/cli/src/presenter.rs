//! Terminal presenter
//!
//! Reads prompt lines, prints a status line after every intent and owns
//! the simulated clock that stands in for real audio output.

use crate::{
    clock::SharedMedia,
    command::{parse_line, Command, HELP},
};
use groove_core::{Catalog, Track};
use groove_playback::{format_duration, format_time, RepeatMode, VolumeLevel};
use groove_session::{Intent, Notice, Presenter, SearchView, SessionError, SessionSnapshot};
use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

/// Line-oriented front end over any reader/writer pair
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    clock: SharedMedia,
    catalog: Catalog,
    pending: VecDeque<Intent>,
    last: Option<SessionSnapshot>,
    last_search: Option<SearchView>,
    prompt: bool,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W, clock: SharedMedia, catalog: Catalog) -> Self {
        Self {
            input,
            output,
            clock,
            catalog,
            pending: VecDeque::new(),
            last: None,
            last_search: None,
            prompt: true,
        }
    }

    /// Suppress the `groove>` prompt (piped input)
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    /// Give back the writer, for inspecting output
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        if self.prompt {
            self.say(format_args!("groove> "));
            self.output.flush().ok();
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read input");
                None
            }
        }
    }

    /// Let the clock run and queue the media notifications it raises
    fn tick(&mut self, seconds: f64) {
        let ended = self.clock.advance(seconds);
        self.pending.push_back(Intent::TimeUpdate);
        if ended {
            self.pending.push_back(Intent::TrackEnded);
        }
    }

    fn finish_track(&mut self) {
        match self.clock.remaining() {
            Some(remaining) if self.clock.is_playing() => self.tick(remaining),
            _ => self.say(format_args!("Nothing is playing\n")),
        }
    }

    fn show_tracks(&mut self) {
        let current = self.last.as_ref().map(|s| s.playback.current_index);
        let lines: Vec<String> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, track)| {
                let marker = if Some(index) == current { '>' } else { ' ' };
                format!("{marker}{:>3}. {}", index + 1, track_label(track))
            })
            .collect();
        for line in lines {
            self.say(format_args!("{line}\n"));
        }
    }

    fn show_queue(&mut self) {
        let Some(snapshot) = self.last.clone() else {
            return;
        };

        self.say(format_args!(
            "NOW PLAYING\n     {}\nNEXT UP\n",
            track_label(&snapshot.current_track)
        ));
        if snapshot.upcoming.is_empty() {
            self.say(format_args!("     No more songs in the queue\n"));
        }
        for entry in &snapshot.upcoming {
            self.say(format_args!(
                "{:>4}. {}\n",
                entry.index + 1,
                track_label(&entry.track)
            ));
        }
    }

    fn show_library(&mut self) {
        let Some(snapshot) = self.last.clone() else {
            return;
        };

        self.say(format_args!("Liked songs ({})\n", snapshot.liked.len()));
        for (i, track) in snapshot.liked.iter().enumerate() {
            self.say(format_args!("{:>4}. {}\n", i + 1, track_label(track)));
        }

        if snapshot.playlists.is_empty() {
            self.say(format_args!("No playlists yet. Create one with `new`!\n"));
        }
        for (p, playlist) in snapshot.playlists.iter().enumerate() {
            let count = playlist.len();
            self.say(format_args!(
                "Playlist {}: {} - {} ({count} song{})\n",
                p + 1,
                playlist.name(),
                playlist.description().unwrap_or("No description"),
                if count == 1 { "" } else { "s" }
            ));
            for (i, track) in playlist.songs().iter().enumerate() {
                self.say(format_args!("{:>4}. {}\n", i + 1, track_label(track)));
            }
        }
    }

    fn show_search(&mut self, search: &SearchView) {
        match search {
            SearchView::NotSearched => {}
            SearchView::NoMatches { query } => {
                self.say(format_args!("No results for \"{query}\"\n"));
            }
            SearchView::Matches { hits, .. } => {
                for hit in hits {
                    self.say(format_args!(
                        "{:>4}. {}\n",
                        hit.index + 1,
                        track_label(&hit.track)
                    ));
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn render(&mut self, snapshot: &SessionSnapshot) {
        let line = status_line(snapshot);
        self.say(format_args!("{line}\n"));

        // Results print once per new query, not after every intent
        if self.last_search.as_ref() != Some(&snapshot.search) {
            self.show_search(&snapshot.search);
            self.last_search = Some(snapshot.search.clone());
        }
        self.last = Some(snapshot.clone());
    }

    fn notify(&mut self, notice: &Notice) {
        self.say(format_args!("! {notice}\n"));
    }

    fn report_error(&mut self, error: &SessionError) {
        tracing::debug!(%error, "Intent rejected");
        self.say(format_args!("error: {error}\n"));
    }

    fn next_intent(&mut self) -> Option<Intent> {
        loop {
            if let Some(intent) = self.pending.pop_front() {
                return Some(intent);
            }

            let line = self.read_line()?;
            let playlists = self
                .last
                .as_ref()
                .map(|s| s.playlists.clone())
                .unwrap_or_default();

            match parse_line(&line, &playlists) {
                Ok(None) => {}
                Ok(Some(Command::Intent(intent))) => return Some(intent),
                Ok(Some(Command::Tick(seconds))) => self.tick(seconds),
                Ok(Some(Command::Finish)) => self.finish_track(),
                Ok(Some(Command::Tracks)) => self.show_tracks(),
                Ok(Some(Command::Queue)) => self.show_queue(),
                Ok(Some(Command::Library)) => self.show_library(),
                Ok(Some(Command::Help)) => self.say(format_args!("{HELP}\n")),
                Ok(Some(Command::Quit)) => return None,
                Err(e) => self.say(format_args!("{e}\n")),
            }
        }
    }
}

fn track_label(track: &Track) -> String {
    format!("{} - {}", track.title, track.artist)
}

/// One-line summary of the player
pub fn status_line(snapshot: &SessionSnapshot) -> String {
    let playback = &snapshot.playback;

    let state = if playback.is_playing { "playing" } else { "paused" };
    let volume = match snapshot.volume_level {
        VolumeLevel::Muted => "muted".to_string(),
        VolumeLevel::Low | VolumeLevel::High => format!("vol {:.0}%", playback.volume * 100.0),
    };
    let mut line = format!(
        "[{state}] {}. {}{}  {} / {}  {volume}",
        playback.current_index + 1,
        track_label(&snapshot.current_track),
        if snapshot.current_liked { " <3" } else { "" },
        format_time(playback.playhead_seconds),
        format_duration(playback.duration_seconds),
    );

    if playback.shuffle_enabled {
        line.push_str("  shuffle");
    }
    match playback.repeat_mode {
        RepeatMode::Off => {}
        RepeatMode::All => line.push_str("  repeat all"),
        RepeatMode::One => line.push_str("  repeat one"),
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use groove_playback::{HeadlessMedia, PlaybackConfig};
    use groove_session::Session;

    fn session() -> Session<HeadlessMedia> {
        Session::new(
            Catalog::sample(),
            HeadlessMedia::with_default_duration(185.0),
            PlaybackConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn status_line_for_fresh_session() {
        let line = status_line(&session().snapshot());
        assert_eq!(
            line,
            "[paused] 1. Summer Vibes - The Weeknd  0:00 / 3:05  vol 100%"
        );
    }

    #[test]
    fn status_line_shows_modes_and_mute() {
        let mut session = session();
        session.dispatch(Intent::ToggleShuffle).unwrap();
        session.dispatch(Intent::CycleRepeatMode).unwrap();
        session.dispatch(Intent::ToggleMute).unwrap();
        session.dispatch(Intent::ToggleLikeCurrent).unwrap();

        let line = status_line(&session.snapshot());
        assert!(line.contains("Summer Vibes - The Weeknd <3"));
        assert!(line.ends_with("muted  shuffle  repeat all"));
    }
}
