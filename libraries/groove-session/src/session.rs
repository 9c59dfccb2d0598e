//! Session - owns all player state and applies intents

use crate::{
    error::{Result, SessionError},
    intent::Intent,
    notice::Notice,
    snapshot::{IndexedTrack, SearchView, SessionSnapshot},
};
use groove_core::{Catalog, CoreError, PlaylistId, Track};
use groove_library::{filter_catalog, AddOutcome, Library, LibraryError, SearchResult};
use groove_playback::{MediaElement, PlaybackConfig, PlaybackController, PlaybackEvent};

/// One listening session
///
/// Holds the playback controller (which owns the catalog), the user's
/// library and the current search query. Presenters never mutate these
/// directly; they send `Intent`s through `dispatch` and render the
/// `SessionSnapshot` that follows.
pub struct Session<M: MediaElement> {
    playback: PlaybackController<M>,
    library: Library,
    search_query: String,
}

impl<M: MediaElement> Session<M> {
    /// Start a session on the first catalog track with an empty library
    pub fn new(catalog: Catalog, media: M, config: PlaybackConfig) -> Result<Self> {
        let playback = PlaybackController::new(catalog, media, config)?;
        Ok(Self::from_parts(playback, Library::new()))
    }

    /// Assemble a session from an existing controller and library
    pub fn from_parts(playback: PlaybackController<M>, library: Library) -> Self {
        Self {
            playback,
            library,
            search_query: String::new(),
        }
    }

    /// Apply one intent
    ///
    /// Returns a notice when the presenter must tell the user something.
    /// Out-of-range positions and unknown playlists are rejected before
    /// anything changes.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<Notice>> {
        if !intent.is_media_notification() {
            tracing::debug!(?intent, "Dispatching intent");
        }

        match intent {
            // ===== Transport =====
            Intent::TogglePlayPause => self.playback.toggle_play_pause()?,
            Intent::Play => self.playback.play()?,
            Intent::Pause => self.playback.pause(),
            Intent::SelectTrack { index } => self.playback.select_track(index)?,
            Intent::PlayTrack { index } => self.play_index(index)?,
            Intent::Previous => self.playback.previous()?,
            Intent::Next => self.playback.next()?,

            // ===== Modes =====
            Intent::ToggleShuffle => {
                self.playback.toggle_shuffle();
            }
            Intent::SetShuffle { enabled } => self.playback.set_shuffle(enabled),
            Intent::CycleRepeatMode => {
                self.playback.cycle_repeat_mode();
            }
            Intent::SetRepeatMode { mode } => self.playback.set_repeat_mode(mode),

            // ===== Seek =====
            Intent::SeekTo { fraction } => {
                if !self.playback.seek_to(fraction) {
                    tracing::debug!("Seek ignored, duration not known yet");
                }
            }
            Intent::SeekBy { seconds } => self.playback.seek_by(seconds),
            Intent::SeekForward => self.playback.seek_forward(),
            Intent::SeekBackward => self.playback.seek_backward(),

            // ===== Volume =====
            Intent::SetVolume { volume } => self.playback.set_volume(volume),
            Intent::StepVolume { delta } => self.playback.step_volume(delta),
            Intent::VolumeUp => self.playback.volume_up(),
            Intent::VolumeDown => self.playback.volume_down(),
            Intent::ToggleMute => {
                self.playback.toggle_mute();
            }

            // ===== Media notifications =====
            Intent::TimeUpdate => self.playback.on_time_update(),
            Intent::TrackEnded => self.playback.on_track_ended()?,

            // ===== Liked songs =====
            Intent::ToggleLike { index } => {
                let track = self.playback.catalog().track(index)?.clone();
                self.library.toggle_like(&track);
            }
            Intent::ToggleLikeCurrent => {
                let track = self.playback.current_track().clone();
                self.library.toggle_like(&track);
            }
            Intent::Unlike { position } => {
                let track = self.liked_at(position)?.clone();
                self.library.unlike(&track);
            }
            Intent::PlayLiked { position } => {
                let track = self.liked_at(position)?.clone();
                self.play_track(&track)?;
            }

            // ===== Search =====
            Intent::Search { query } => self.search_query = query,

            // ===== Playlists =====
            Intent::CreatePlaylist { name, description } => {
                return Ok(Some(self.create_playlist(&name, &description)));
            }
            Intent::AddTrackToPlaylist {
                playlist,
                track_index,
            } => {
                let track = self.playback.catalog().track(track_index)?.clone();
                return self.add_to_playlist(&playlist, &track);
            }
            Intent::AddCurrentToPlaylist { playlist } => {
                let track = self.playback.current_track().clone();
                return self.add_to_playlist(&playlist, &track);
            }
            Intent::RemoveFromPlaylist { playlist, position } => {
                self.library.remove_song_from_playlist(&playlist, position)?;
            }
            Intent::PlayPlaylistEntry { playlist, position } => {
                let playlist = self.library.playlist(&playlist)?;
                let track = playlist
                    .songs()
                    .get(position)
                    .ok_or(LibraryError::PositionOutOfBounds {
                        position,
                        len: playlist.len(),
                    })?
                    .clone();
                self.play_track(&track)?;
            }
        }

        Ok(None)
    }

    fn play_index(&mut self, index: usize) -> Result<()> {
        self.playback.select_track(index)?;
        self.playback.play()?;
        Ok(())
    }

    /// Resolve a library track to its catalog entry and play it
    fn play_track(&mut self, track: &Track) -> Result<()> {
        let index = self
            .playback
            .catalog()
            .position_of(track)
            .ok_or_else(|| CoreError::track_not_found(&track.title, &track.artist))?;
        self.play_index(index)
    }

    fn liked_at(&self, position: usize) -> Result<&Track> {
        let liked = self.library.liked();
        liked.get(position).ok_or(SessionError::LikedOutOfBounds {
            position,
            len: liked.len(),
        })
    }

    fn create_playlist(&mut self, name: &str, description: &str) -> Notice {
        match self.library.create_playlist(name, description) {
            Some(_) => Notice::PlaylistCreated {
                name: name.trim().to_string(),
            },
            None => Notice::PlaylistNameRequired,
        }
    }

    fn add_to_playlist(&mut self, playlist: &PlaylistId, track: &Track) -> Result<Option<Notice>> {
        if !self.library.has_playlists() {
            return Ok(Some(Notice::NoPlaylists));
        }

        let notice = match self.library.add_song_to_playlist(playlist, track)? {
            AddOutcome::AlreadyPresent => Notice::AlreadyInPlaylist,
            AddOutcome::Added => Notice::AddedToPlaylist {
                title: track.title.clone(),
                playlist: self.library.playlist(playlist)?.name().to_string(),
            },
        };
        Ok(Some(notice))
    }

    // ===== State Queries =====

    /// Render-ready copy of the whole session
    pub fn snapshot(&self) -> SessionSnapshot {
        let playback = self.playback.snapshot();
        let current_track = self.playback.current_track().clone();
        let upcoming = self
            .playback
            .upcoming()
            .iter()
            .enumerate()
            .map(|(offset, track)| IndexedTrack {
                index: playback.current_index + 1 + offset,
                track: track.clone(),
            })
            .collect();

        SessionSnapshot {
            current_liked: self.library.is_liked(&current_track),
            volume_level: playback.volume_level(),
            playback,
            current_track,
            upcoming,
            liked: self.library.liked().tracks().to_vec(),
            playlists: self.library.playlists().to_vec(),
            search: SearchView::from_result(&self.search_query, &self.search()),
        }
    }

    /// Current search outcome over the catalog
    pub fn search(&self) -> SearchResult<'_> {
        filter_catalog(&self.search_query, self.playback.catalog())
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn catalog(&self) -> &Catalog {
        self.playback.catalog()
    }

    pub fn playback(&self) -> &PlaybackController<M> {
        &self.playback
    }

    /// Mutable controller access for the platform clock (media element ticks)
    pub fn playback_mut(&mut self) -> &mut PlaybackController<M> {
        &mut self.playback
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Drain playback events produced since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.playback.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groove_playback::{HeadlessMedia, RepeatMode, VolumeLevel};

    fn session() -> Session<HeadlessMedia> {
        let config = PlaybackConfig {
            shuffle_seed: Some(1),
            ..PlaybackConfig::default()
        };
        Session::new(
            Catalog::sample(),
            HeadlessMedia::with_default_duration(200.0),
            config,
        )
        .unwrap()
    }

    #[test]
    fn starts_paused_on_first_track() {
        let session = session();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.playback.current_index, 0);
        assert!(!snapshot.playback.is_playing);
        assert_eq!(snapshot.current_track.title, "Summer Vibes");
        assert_eq!(snapshot.upcoming.len(), 5);
        assert_eq!(snapshot.upcoming[0].index, 1);
        assert_eq!(snapshot.search, SearchView::NotSearched);
    }

    #[test]
    fn play_track_selects_and_plays() {
        let mut session = session();
        assert_eq!(session.dispatch(Intent::PlayTrack { index: 3 }).unwrap(), None);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.playback.current_index, 3);
        assert!(snapshot.playback.is_playing);
        assert_eq!(snapshot.upcoming.len(), 2);
    }

    #[test]
    fn select_track_keeps_play_state() {
        let mut session = session();
        session.dispatch(Intent::SelectTrack { index: 2 }).unwrap();
        assert!(!session.playback().is_playing());
    }

    #[test]
    fn out_of_range_track_is_an_error() {
        let mut session = session();
        assert!(matches!(
            session.dispatch(Intent::PlayTrack { index: 6 }),
            Err(SessionError::Playback(_))
        ));
        assert!(matches!(
            session.dispatch(Intent::ToggleLike { index: 9 }),
            Err(SessionError::Core(CoreError::TrackIndexOutOfBounds { .. }))
        ));
        assert_eq!(session.playback().current_index(), 0);
    }

    #[test]
    fn like_current_shows_in_snapshot() {
        let mut session = session();
        session.dispatch(Intent::ToggleLikeCurrent).unwrap();

        let snapshot = session.snapshot();
        assert!(snapshot.current_liked);
        assert_eq!(snapshot.liked.len(), 1);

        session.dispatch(Intent::Unlike { position: 0 }).unwrap();
        assert!(!session.snapshot().current_liked);
    }

    #[test]
    fn play_liked_resolves_catalog_index() {
        let mut session = session();
        session.dispatch(Intent::ToggleLike { index: 4 }).unwrap();
        session.dispatch(Intent::PlayLiked { position: 0 }).unwrap();

        assert_eq!(session.playback().current_index(), 4);
        assert!(session.playback().is_playing());

        assert!(matches!(
            session.dispatch(Intent::PlayLiked { position: 1 }),
            Err(SessionError::LikedOutOfBounds {
                position: 1,
                len: 1
            })
        ));
    }

    #[test]
    fn add_without_playlists_notifies() {
        let mut session = session();
        let notice = session
            .dispatch(Intent::AddCurrentToPlaylist {
                playlist: PlaylistId::new("missing"),
            })
            .unwrap();
        assert_eq!(notice, Some(Notice::NoPlaylists));
    }

    #[test]
    fn playlist_flow_produces_notices() {
        let mut session = session();

        let notice = session
            .dispatch(Intent::CreatePlaylist {
                name: "  Gym ".into(),
                description: String::new(),
            })
            .unwrap();
        assert_eq!(
            notice,
            Some(Notice::PlaylistCreated { name: "Gym".into() })
        );
        let id = session.library().playlists()[0].id().clone();

        let add = Intent::AddTrackToPlaylist {
            playlist: id.clone(),
            track_index: 3,
        };
        assert_eq!(
            session.dispatch(add.clone()).unwrap(),
            Some(Notice::AddedToPlaylist {
                title: "Rock Anthem".into(),
                playlist: "Gym".into(),
            })
        );
        assert_eq!(
            session.dispatch(add).unwrap(),
            Some(Notice::AlreadyInPlaylist)
        );

        session
            .dispatch(Intent::PlayPlaylistEntry {
                playlist: id.clone(),
                position: 0,
            })
            .unwrap();
        assert_eq!(session.playback().current_index(), 3);
        assert!(session.playback().is_playing());

        session
            .dispatch(Intent::RemoveFromPlaylist {
                playlist: id.clone(),
                position: 0,
            })
            .unwrap();
        assert!(session.snapshot().playlists[0].is_empty());
    }

    #[test]
    fn blank_playlist_name_is_reported() {
        let mut session = session();
        let notice = session
            .dispatch(Intent::CreatePlaylist {
                name: "   ".into(),
                description: "x".into(),
            })
            .unwrap();
        assert_eq!(notice, Some(Notice::PlaylistNameRequired));
        assert!(session.library().playlists().is_empty());
    }

    #[test]
    fn unknown_playlist_is_an_error_once_playlists_exist() {
        let mut session = session();
        session
            .dispatch(Intent::CreatePlaylist {
                name: "Mix".into(),
                description: String::new(),
            })
            .unwrap();

        assert!(matches!(
            session.dispatch(Intent::AddCurrentToPlaylist {
                playlist: PlaylistId::new("missing"),
            }),
            Err(SessionError::Library(LibraryError::PlaylistNotFound(_)))
        ));
    }

    #[test]
    fn search_updates_snapshot() {
        let mut session = session();
        session
            .dispatch(Intent::Search {
                query: "Drake".into(),
            })
            .unwrap();

        match session.snapshot().search {
            SearchView::Matches { query, hits } => {
                assert_eq!(query, "Drake");
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].index, 1);
            }
            other => panic!("expected matches, got {other:?}"),
        }

        session
            .dispatch(Intent::Search {
                query: "zzz".into(),
            })
            .unwrap();
        assert_eq!(
            session.snapshot().search,
            SearchView::NoMatches {
                query: "zzz".into()
            }
        );
    }

    #[test]
    fn modes_and_volume() {
        let mut session = session();
        session.dispatch(Intent::CycleRepeatMode).unwrap();
        session.dispatch(Intent::ToggleShuffle).unwrap();
        session.dispatch(Intent::SetVolume { volume: 0.3 }).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.playback.repeat_mode, RepeatMode::All);
        assert!(snapshot.playback.shuffle_enabled);
        assert_eq!(snapshot.volume_level, VolumeLevel::Low);

        session.dispatch(Intent::ToggleMute).unwrap();
        assert_eq!(session.snapshot().volume_level, VolumeLevel::Muted);
    }

    #[test]
    fn seek_before_duration_is_known_is_ignored() {
        let mut session =
            Session::new(Catalog::sample(), HeadlessMedia::new(), PlaybackConfig::default())
                .unwrap();
        session.dispatch(Intent::SeekTo { fraction: 0.5 }).unwrap();
        assert_eq!(session.snapshot().playback.playhead_seconds, 0.0);
        assert_eq!(session.snapshot().progress(), None);
    }

    #[test]
    fn media_ticks_advance_through_dispatch() {
        let mut session = session();
        session.dispatch(Intent::Play).unwrap();

        session.playback_mut().media_mut().advance(50.0);
        session.dispatch(Intent::TimeUpdate).unwrap();
        assert_eq!(session.snapshot().progress(), Some(0.25));

        session.dispatch(Intent::TrackEnded).unwrap();
        assert_eq!(session.playback().current_index(), 1);
        assert!(!session.drain_events().is_empty());
    }
}
