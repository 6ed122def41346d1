//! Key chord parsing and the fixed key binding table.
//!
//! Chords are written as strings like "q" or "ctrl+c" and parsed into
//! crossterm key codes and modifiers once, when the table is built.
//! Lookup is pure: the same key event always maps to the same action,
//! whatever screen is active.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical action a key chord can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Confirm,
    MoveUp,
    MoveDown,
    /// Reserved for adding agents. Nothing handles it yet.
    AddItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
}

pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let trimmed = input.trim().to_lowercase();
    let mut chord = KeyChord {
        key: KeyCode::Null,
        ctrl: false,
        alt: false,
    };

    for part in trimmed.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "ctrl" | "control" => chord.ctrl = true,
            "alt" | "option" => chord.alt = true,
            key => {
                if chord.key != KeyCode::Null {
                    return None;
                }
                chord.key = parse_key(key)?;
            }
        }
    }

    if chord.key == KeyCode::Null {
        return None;
    }
    Some(chord)
}

fn parse_key(key: &str) -> Option<KeyCode> {
    match key {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "backspace" => Some(KeyCode::Backspace),
        "space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = key.chars();
            let first = chars.next()?;
            chars.next().is_none().then_some(KeyCode::Char(first))
        }
    }
}

pub fn matches_chord(event: &KeyEvent, chord: &KeyChord) -> bool {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    event.code == chord.key && ctrl == chord.ctrl && alt == chord.alt
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub action: KeyAction,
    pub chords: Vec<KeyChord>,
    pub help_key: &'static str,
    pub help_desc: &'static str,
    /// Hidden bindings still resolve but are left out of the help line.
    pub show_help: bool,
}

impl Binding {
    fn new(action: KeyAction, keys: &[&str], help_key: &'static str, help_desc: &'static str) -> Self {
        Self {
            action,
            chords: keys.iter().filter_map(|key| parse_key_chord(key)).collect(),
            help_key,
            help_desc,
            show_help: true,
        }
    }

    fn hidden(mut self) -> Self {
        self.show_help = false;
        self
    }
}

/// The application's chord → action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<Binding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                Binding::new(KeyAction::MoveUp, &["up", "k"], "↑/k", "up"),
                Binding::new(KeyAction::MoveDown, &["down", "j"], "↓/j", "down"),
                Binding::new(KeyAction::Confirm, &["enter", "return"], "↵", "select item"),
                Binding::new(KeyAction::AddItem, &["a"], "a", "add item").hidden(),
                Binding::new(KeyAction::Quit, &["q", "ctrl+c"], "q", "quit"),
            ],
        }
    }
}

impl KeyBindings {
    /// Look up the action bound to a key event, if any.
    pub fn resolve(&self, event: &KeyEvent) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|binding| binding.chords.iter().any(|chord| matches_chord(event, chord)))
            .map(|binding| binding.action)
    }

    /// `(key, description)` pairs for the help line, in table order.
    pub fn short_help(&self) -> Vec<(&'static str, &'static str)> {
        self.bindings
            .iter()
            .filter(|binding| binding.show_help)
            .map(|binding| (binding.help_key, binding.help_desc))
            .collect()
    }
}
