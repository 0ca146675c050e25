//! Input mapping for interactive front ends.
//!
//! This module turns one frame of raw input into simulation commands. It
//! supports:
//!
//! - **Edge-triggered keys**: reset, begin-follow and the lookahead
//!   adjustments fire once, on the frame the key goes down.
//! - **Level-triggered keys**: advance fires on every frame it is held.
//! - **Pointer input**: a secondary click records a path point; holding the
//!   primary button moves the probe cursor.
//!
//! # Example
//!
//! ```
//! use pursuit_sim::opcontrol::controller::{Controls, InputState};
//! use pursuit_sim::sim::Command;
//!
//! let controls = Controls::default();
//! let input = InputState::default().press('n').hold('f');
//!
//! assert_eq!(controls.commands(&input), vec![Command::BeginFollow]);
//! assert!(controls.advance_held(&input));
//! ```

use crate::{motion::pursuit::geo::Point, sim::Command};

/// One frame of raw input, as read by the front end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Keys currently down.
    pub held:    Vec<char>,
    /// Keys that went down this frame. A newly pressed key is usually also
    /// in `held`.
    pub pressed: Vec<char>,
    /// Position of a secondary click this frame.
    pub record:  Option<Point>,
    /// Cursor position while the primary button is held.
    pub probe:   Option<Point>,
}

impl InputState {
    /// Marks `key` as going down this frame (and held).
    #[must_use]
    pub fn press(mut self, key: char) -> Self {
        self.pressed.push(key);
        self.held.push(key);
        self
    }

    /// Marks `key` as held without a new press.
    #[must_use]
    pub fn hold(mut self, key: char) -> Self {
        self.held.push(key);
        self
    }

    /// Whether `key` is down this frame.
    pub fn is_held(&self, key: char) -> bool { self.held.contains(&key) }

    /// Whether `key` went down this frame.
    pub fn is_now_pressed(&self, key: char) -> bool { self.pressed.contains(&key) }
}

/// The actions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Clear the path, the follower and its trail.
    Reset,
    /// Start a follower at the first path point.
    BeginFollow,
    /// Grow the lookahead distance by one delta.
    IncreaseLookahead,
    /// Shrink the lookahead distance by one delta, down to the floor.
    DecreaseLookahead,
    /// Move the follower one step while held.
    Advance,
}

/// Keys bound to each [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Key for [`Action::Reset`].
    pub reset:    char,
    /// Key for [`Action::BeginFollow`].
    pub begin:    char,
    /// Key for [`Action::IncreaseLookahead`].
    pub increase: char,
    /// Key for [`Action::DecreaseLookahead`].
    pub decrease: char,
    /// Key for [`Action::Advance`].
    pub advance:  char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            reset:    'r',
            begin:    'n',
            increase: '+',
            decrease: '-',
            advance:  'f',
        }
    }
}

impl KeyBindings {
    /// Returns the key bound to `action`.
    pub const fn key(&self, action: Action) -> char {
        match action {
            Action::Reset => self.reset,
            Action::BeginFollow => self.begin,
            Action::IncreaseLookahead => self.increase,
            Action::DecreaseLookahead => self.decrease,
            Action::Advance => self.advance,
        }
    }
}

/// Edge-triggered actions in the order their commands are emitted.
const KEYED: [(Action, Command); 4] = [
    (Action::Reset, Command::Reset),
    (Action::BeginFollow, Command::BeginFollow),
    (Action::IncreaseLookahead, Command::IncreaseLookahead),
    (Action::DecreaseLookahead, Command::DecreaseLookahead),
];

/// Maps [`InputState`] frames to commands using a set of [`KeyBindings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    bindings: KeyBindings,
}

impl Controls {
    /// Creates a mapper with custom bindings.
    pub const fn new(bindings: KeyBindings) -> Self { Self { bindings } }

    /// The bindings in use.
    pub const fn bindings(&self) -> &KeyBindings { &self.bindings }

    /// Commands produced by one frame of input.
    ///
    /// A recorded point comes first, then every edge-triggered action whose
    /// key went down this frame, in the order reset, begin, increase,
    /// decrease.
    pub fn commands(&self, input: &InputState) -> Vec<Command> {
        let keyed = KEYED
            .iter()
            .filter(|(action, _)| input.is_now_pressed(self.bindings.key(*action)))
            .map(|(_, command)| *command);
        input.record.map(Command::RecordPoint).into_iter().chain(keyed).collect()
    }

    /// Whether the advance key is held this frame.
    pub fn advance_held(&self, input: &InputState) -> bool {
        input.is_held(self.bindings.key(Action::Advance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_test_empty() {
        assert!(Controls::default().commands(&InputState::default()).is_empty());
    }

    #[test]
    fn commands_test_order() {
        let input = InputState {
            record: Some(Point::new(1.0, 2.0)),
            ..InputState::default()
        }
        .press('-')
        .press('+')
        .press('r')
        .press('n');
        assert_eq!(Controls::default().commands(&input), vec![
            Command::RecordPoint(Point::new(1.0, 2.0)),
            Command::Reset,
            Command::BeginFollow,
            Command::IncreaseLookahead,
            Command::DecreaseLookahead,
        ]);
    }

    #[test]
    fn commands_test_held_is_not_pressed() {
        let input = InputState::default().hold('r').hold('n');
        assert!(Controls::default().commands(&input).is_empty());
    }

    #[test]
    fn advance_test_level() {
        let controls = Controls::default();
        assert!(controls.advance_held(&InputState::default().hold('f')));
        assert!(controls.advance_held(&InputState::default().press('f')));
        assert!(!controls.advance_held(&InputState::default().hold('g')));
        assert!(controls.commands(&InputState::default().press('f')).is_empty());
    }

    #[test]
    fn bindings_test_default_keys() {
        let keys = KeyBindings::default();
        assert_eq!(keys.key(Action::Reset), 'r');
        assert_eq!(keys.key(Action::BeginFollow), 'n');
        assert_eq!(keys.key(Action::IncreaseLookahead), '+');
        assert_eq!(keys.key(Action::DecreaseLookahead), '-');
        assert_eq!(keys.key(Action::Advance), 'f');
    }

    #[test]
    fn custom_bindings_test() {
        let controls = Controls::new(KeyBindings {
            advance: ' ',
            reset: 'x',
            ..KeyBindings::default()
        });
        assert!(controls.advance_held(&InputState::default().hold(' ')));
        assert_eq!(controls.commands(&InputState::default().press('x')), vec![
            Command::Reset
        ]);
        assert!(controls.commands(&InputState::default().press('r')).is_empty());
    }
}
