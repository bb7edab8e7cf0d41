use teestudio_core::{GarmentColor, GarmentPart, RgbaColor};
use teestudio_designer::{History, NewElement, SceneStore, ShapeType};
use teestudio_settings::EditorConfig;

fn scene_with_shapes(n: usize) -> teestudio_designer::Scene {
    let mut store = SceneStore::new(&EditorConfig::default(), GarmentPart::Front, GarmentColor::White);
    for _ in 0..n {
        store.add_element(NewElement::shape(ShapeType::Rectangle, RgbaColor::BLACK));
    }
    store.scene().clone()
}

#[test]
fn test_history_starts_with_empty_snapshot() {
    let history = History::default();
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(history.current().is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_at_index_zero_is_noop() {
    let mut history = History::default();
    assert!(history.undo().is_none());
    assert_eq!(history.index(), 0);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_commit_undo_redo() {
    let mut history = History::default();
    let one = scene_with_shapes(1);
    let two = scene_with_shapes(2);
    history.commit(one.clone());
    history.commit(two.clone());
    assert_eq!(history.undo_depth(), 2);

    assert_eq!(history.undo(), Some(&one));
    assert!(history.current().len() == 1);
    assert_eq!(history.redo(), Some(&two));
    assert!(history.redo().is_none());
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_commit_after_undo_discards_branch() {
    let mut history = History::default();
    history.commit(scene_with_shapes(1));
    history.commit(scene_with_shapes(2));
    history.undo();
    history.undo();
    assert!(history.can_redo());

    let three = scene_with_shapes(3);
    history.commit(three.clone());
    assert_eq!(history.len(), 2);
    assert_eq!(history.current(), &three);
    assert!(!history.can_redo());
}

#[test]
fn test_limit_drops_oldest() {
    let mut history = History::new(Some(3));
    for n in 1..=5 {
        history.commit(scene_with_shapes(n));
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.index(), 2);
    assert_eq!(history.current().len(), 5);
    history.undo();
    history.undo();
    assert!(!history.can_undo());
    assert_eq!(history.current().len(), 3);
}

#[test]
fn test_clear_resets_to_base() {
    let mut history = History::default();
    history.commit(scene_with_shapes(1));
    history.clear(teestudio_designer::Scene::new());
    assert_eq!(history.len(), 1);
    assert!(!history.can_undo());
}
