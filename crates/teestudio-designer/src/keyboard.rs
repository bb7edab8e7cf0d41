//! Keyboard shortcuts for the design canvas.

use teestudio_core::Rect;
use teestudio_settings::ConstraintSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Backspace,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// Where a snap shortcut puts the element inside its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snap {
    Center,
    BottomRight,
    TopCenter,
    BottomCenter,
}

impl Snap {
    /// Top-left position for a `width`×`height` element in `zone`.
    pub fn position(self, zone: &Rect, width: f64, height: f64) -> (f64, f64) {
        let (cx, cy) = zone.centered(width, height);
        match self {
            Snap::Center => (cx, cy),
            Snap::BottomRight => (zone.right() - width, zone.bottom() - height),
            Snap::TopCenter => (cx, zone.y),
            Snap::BottomCenter => (cx, zone.bottom() - height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    Undo,
    Redo,
    Duplicate,
    Delete,
    Rotate(f64),
    Nudge(f64, f64),
    Snap(Snap),
}

impl Shortcut {
    /// Whether the shortcut acts on the selected element.
    pub fn needs_selection(&self) -> bool {
        !matches!(self, Shortcut::Undo | Shortcut::Redo)
    }
}

/// Maps a key press to a shortcut.
pub fn resolve(event: &KeyEvent, constraints: &ConstraintSettings) -> Option<Shortcut> {
    let m = event.modifiers;
    if m.command() {
        return match event.key {
            Key::Char('z') | Key::Char('Z') if m.shift => Some(Shortcut::Redo),
            Key::Char('z') => Some(Shortcut::Undo),
            Key::Char('y') | Key::Char('Y') => Some(Shortcut::Redo),
            Key::Char('d') | Key::Char('D') => Some(Shortcut::Duplicate),
            _ => None,
        };
    }

    let step = if m.shift {
        constraints.nudge_step_large
    } else {
        constraints.nudge_step
    };

    match event.key {
        Key::Delete | Key::Backspace => Some(Shortcut::Delete),
        Key::Char('r') => Some(Shortcut::Rotate(constraints.rotate_step)),
        Key::Char('R') => Some(Shortcut::Rotate(-constraints.rotate_step)),
        Key::ArrowUp => Some(Shortcut::Nudge(0.0, -step)),
        Key::ArrowDown => Some(Shortcut::Nudge(0.0, step)),
        Key::ArrowLeft => Some(Shortcut::Nudge(-step, 0.0)),
        Key::ArrowRight => Some(Shortcut::Nudge(step, 0.0)),
        Key::Home => Some(Shortcut::Snap(Snap::Center)),
        Key::End => Some(Shortcut::Snap(Snap::BottomRight)),
        Key::PageUp => Some(Shortcut::Snap(Snap::TopCenter)),
        Key::PageDown => Some(Shortcut::Snap(Snap::BottomCenter)),
        Key::Char(_) => None,
    }
}
