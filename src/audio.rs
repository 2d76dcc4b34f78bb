use std::io::{self, Write};

use tracing::{debug, trace};

/// Discrete sound notifications emitted by the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AudioCue {
    StartMusic,
    StopMusic,
    Eat,
    GameOver,
}

/// Fire-and-forget sound output.
///
/// Implementations must never fail from the caller's point of view; an
/// unavailable device is simply silent.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue);
    }
}

/// Audio sink that discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, cue: AudioCue) {
        trace!(?cue, "audio muted");
    }
}

/// Rings the terminal bell for sound effects.
///
/// Terminals have no music channel, so the music cues are dropped.
#[derive(Debug)]
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self) {
        let result = self.out.write_all(b"\x07").and_then(|()| self.out.flush());
        if let Err(error) = result {
            debug!(%error, "terminal bell unavailable");
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::StartMusic | AudioCue::StopMusic => trace!(?cue, "no music channel"),
            AudioCue::Eat | AudioCue::GameOver => self.ring(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{AudioCue, AudioSink, TerminalBell};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn bell_rings_for_effects_only() {
        let mut bell = TerminalBell::new(Vec::new());

        bell.play(AudioCue::StartMusic);
        bell.play(AudioCue::Eat);
        bell.play(AudioCue::StopMusic);
        bell.play(AudioCue::GameOver);

        assert_eq!(bell.out, b"\x07\x07");
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut bell = TerminalBell::new(BrokenPipe);

        bell.play(AudioCue::Eat);
        bell.play(AudioCue::GameOver);
    }
}
