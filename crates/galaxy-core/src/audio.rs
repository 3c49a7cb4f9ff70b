#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// Command for the host's media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Background music on/off switch. Starts as playing because playback is
/// requested at page load.
#[derive(Clone, Debug)]
pub struct AudioToggle {
    state: PlaybackState,
}

impl Default for AudioToggle {
    fn default() -> Self {
        Self {
            state: PlaybackState::Playing,
        }
    }
}

impl AudioToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn toggle(&mut self) -> PlaybackCommand {
        match self.state {
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                PlaybackCommand::Pause
            }
            PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                PlaybackCommand::Play
            }
        }
    }

    /// The host refused to play (autoplay policy); the next toggle should play.
    pub fn playback_rejected(&mut self) {
        if self.state == PlaybackState::Playing {
            log::info!("[audio] playback rejected by host, tracking as paused");
        }
        self.state = PlaybackState::Paused;
    }
}
