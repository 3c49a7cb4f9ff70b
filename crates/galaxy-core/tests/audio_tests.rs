use galaxy_core::*;

#[test]
fn starts_playing() {
    assert!(AudioToggle::new().is_playing());
}

#[test]
fn click_parity_decides_state() {
    for k in 0..9 {
        let mut audio = AudioToggle::new();
        for _ in 0..k {
            audio.toggle();
        }
        let expected = if k % 2 == 0 {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        };
        assert_eq!(audio.state(), expected, "after {k} clicks");
    }
}

#[test]
fn toggle_alternates_commands() {
    let mut audio = AudioToggle::new();
    assert_eq!(audio.toggle(), PlaybackCommand::Pause);
    assert_eq!(audio.toggle(), PlaybackCommand::Play);
    assert_eq!(audio.toggle(), PlaybackCommand::Pause);
}

#[test]
fn rejected_playback_makes_next_click_play() {
    let mut audio = AudioToggle::new();
    audio.playback_rejected();
    assert_eq!(audio.state(), PlaybackState::Paused);
    assert_eq!(audio.toggle(), PlaybackCommand::Play);
    assert!(audio.is_playing());
}
