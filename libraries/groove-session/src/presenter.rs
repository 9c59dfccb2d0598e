//! Presentation boundary
//!
//! A presenter draws snapshots, shows notices and turns user gestures into
//! intents. The session never calls back into it except through `run`.

use crate::{
    error::SessionError, intent::Intent, notice::Notice, session::Session,
    snapshot::SessionSnapshot,
};
use groove_playback::MediaElement;

/// Front end driven by `run`
pub trait Presenter {
    /// Draw the current state
    fn render(&mut self, snapshot: &SessionSnapshot);

    /// Show a blocking notification
    fn notify(&mut self, notice: &Notice);

    /// Report a rejected intent
    ///
    /// The default logs and carries on; the session is still usable.
    fn report_error(&mut self, error: &SessionError) {
        tracing::warn!(%error, "Intent rejected");
    }

    /// Wait for the next gesture; `None` ends the session
    fn next_intent(&mut self) -> Option<Intent>;
}

/// Drive a session until the presenter stops producing intents
///
/// Renders once up front and again after every intent.
pub fn run<M, P>(session: &mut Session<M>, presenter: &mut P)
where
    M: MediaElement,
    P: Presenter + ?Sized,
{
    presenter.render(&session.snapshot());

    while let Some(intent) = presenter.next_intent() {
        match session.dispatch(intent) {
            Ok(Some(notice)) => presenter.notify(&notice),
            Ok(None) => {}
            Err(error) => presenter.report_error(&error),
        }
        presenter.render(&session.snapshot());
    }

    tracing::debug!("Presenter finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use groove_core::Catalog;
    use groove_playback::{HeadlessMedia, PlaybackConfig};
    use std::collections::VecDeque;

    /// Replays a fixed script and records what it was shown
    #[derive(Default)]
    struct ScriptedPresenter {
        script: VecDeque<Intent>,
        frames: Vec<SessionSnapshot>,
        notices: Vec<Notice>,
        errors: usize,
    }

    impl Presenter for ScriptedPresenter {
        fn render(&mut self, snapshot: &SessionSnapshot) {
            self.frames.push(snapshot.clone());
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }

        fn report_error(&mut self, _error: &SessionError) {
            self.errors += 1;
        }

        fn next_intent(&mut self) -> Option<Intent> {
            self.script.pop_front()
        }
    }

    #[test]
    fn renders_after_every_intent() {
        let mut session = Session::new(
            Catalog::sample(),
            HeadlessMedia::with_default_duration(90.0),
            PlaybackConfig::default(),
        )
        .unwrap();
        let mut presenter = ScriptedPresenter {
            script: VecDeque::from([
                Intent::Play,
                Intent::Next,
                Intent::PlayTrack { index: 42 },
                Intent::AddCurrentToPlaylist {
                    playlist: groove_core::PlaylistId::new("none"),
                },
            ]),
            ..ScriptedPresenter::default()
        };

        run(&mut session, &mut presenter);

        assert_eq!(presenter.frames.len(), 5);
        assert!(!presenter.frames[0].playback.is_playing);
        assert!(presenter.frames[1].playback.is_playing);
        assert_eq!(presenter.frames[2].playback.current_index, 1);
        assert_eq!(presenter.frames[3].playback.current_index, 1);
        assert_eq!(presenter.errors, 1);
        assert_eq!(presenter.notices, [Notice::NoPlaylists]);
    }
}
