use teestudio_core::Rect;
use teestudio_designer::keyboard::resolve;
use teestudio_designer::{Key, KeyEvent, Modifiers, Shortcut, Snap};
use teestudio_settings::ConstraintSettings;

fn shortcut(key: Key, modifiers: Modifiers) -> Option<Shortcut> {
    resolve(&KeyEvent::new(key, modifiers), &ConstraintSettings::default())
}

#[test]
fn test_command_shortcuts() {
    assert_eq!(shortcut(Key::Char('z'), Modifiers::ctrl()), Some(Shortcut::Undo));
    assert_eq!(
        shortcut(
            Key::Char('Z'),
            Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::NONE
            }
        ),
        Some(Shortcut::Redo)
    );
    assert_eq!(shortcut(Key::Char('y'), Modifiers::ctrl()), Some(Shortcut::Redo));
    let cmd = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };
    assert_eq!(shortcut(Key::Char('d'), cmd), Some(Shortcut::Duplicate));
    assert_eq!(shortcut(Key::Char('q'), cmd), None);
}

#[test]
fn test_plain_keys() {
    assert_eq!(shortcut(Key::Delete, Modifiers::NONE), Some(Shortcut::Delete));
    assert_eq!(shortcut(Key::Backspace, Modifiers::NONE), Some(Shortcut::Delete));
    assert_eq!(shortcut(Key::Char('r'), Modifiers::NONE), Some(Shortcut::Rotate(15.0)));
    assert_eq!(shortcut(Key::Char('R'), Modifiers::shift()), Some(Shortcut::Rotate(-15.0)));
    assert_eq!(shortcut(Key::Char('x'), Modifiers::NONE), None);
}

#[test]
fn test_nudge_steps() {
    assert_eq!(shortcut(Key::ArrowLeft, Modifiers::NONE), Some(Shortcut::Nudge(-1.0, 0.0)));
    assert_eq!(shortcut(Key::ArrowDown, Modifiers::shift()), Some(Shortcut::Nudge(0.0, 10.0)));
}

#[test]
fn test_snap_keys_and_positions() {
    assert_eq!(shortcut(Key::Home, Modifiers::NONE), Some(Shortcut::Snap(Snap::Center)));
    assert_eq!(shortcut(Key::End, Modifiers::NONE), Some(Shortcut::Snap(Snap::BottomRight)));

    let zone = Rect::new(200.0, 200.0, 200.0, 280.0);
    assert_eq!(Snap::Center.position(&zone, 100.0, 80.0), (250.0, 300.0));
    assert_eq!(Snap::BottomRight.position(&zone, 100.0, 80.0), (300.0, 400.0));
    assert_eq!(Snap::TopCenter.position(&zone, 100.0, 80.0), (250.0, 200.0));
    assert_eq!(Snap::BottomCenter.position(&zone, 100.0, 80.0), (250.0, 400.0));
}

#[test]
fn test_needs_selection() {
    assert!(!Shortcut::Undo.needs_selection());
    assert!(!Shortcut::Redo.needs_selection());
    assert!(Shortcut::Delete.needs_selection());
    assert!(Shortcut::Nudge(1.0, 0.0).needs_selection());
}
