/// Listening state of one assistant interaction.
///
/// `listening == false` means a terminal action (open app, play media, exit)
/// ran during the current cycle and the caller must not schedule another
/// cycle until the user re-arms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    listening: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { listening: true }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Start a new listen cycle
    pub fn begin_cycle(&mut self) {
        self.listening = true;
    }

    /// Request the listen loop to stop
    pub fn stop(&mut self) {
        self.listening = false;
    }
}
