//! Input events and outgoing notifications

use crate::core::TileState;

/// One discrete key event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A letter key; anything outside `a-z`/`A-Z` is ignored by the board
    Letter(char),
    Backspace,
    Submit,
}

/// Named cues for the audio/notification layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Keypress,
    Delete,
    Invalid,
    Win,
    Lose,
}

/// Outcome of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Everything the board tells its collaborators, in the order it happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    TileChanged {
        row: usize,
        col: usize,
        letter: Option<char>,
        state: TileState,
    },
    InvalidWordShown(bool),
    Cue(Cue),
    /// Navigation signal, sent once on entering `Won` or `Lost`
    GameOver(GameStatus),
}

/// Receiver for board notifications
///
/// Called synchronously while the board processes an event.
pub trait BoardObserver {
    fn notify(&mut self, notification: Notification);
}

/// Records every notification
impl BoardObserver for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Discards every notification
impl BoardObserver for () {
    fn notify(&mut self, _notification: Notification) {}
}
