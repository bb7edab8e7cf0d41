//! Pointer interaction state machine.
//!
//! Translates pointer events into scene store mutations: place text, select,
//! drag, resize from a handle and rotate from the rotation handle. Resize and
//! rotate always work from the element as it was when the gesture started.

use crate::model::{Element, NewElement, TextPayload};
use crate::scene_store::SceneStore;
use crate::transform::{self, ResizeHandle};
use teestudio_core::{ElementId, Point};
use teestudio_settings::HandleSettings;

/// Active canvas tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Move,
    Text,
}

/// Cursor shown for the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
    Grab,
    Grabbing,
    Text,
    Resize(ResizeHandle),
}

impl CursorIcon {
    /// CSS cursor name.
    pub fn css_name(&self) -> &'static str {
        match self {
            CursorIcon::Default => "default",
            CursorIcon::Move => "move",
            CursorIcon::Grab => "grab",
            CursorIcon::Grabbing => "grabbing",
            CursorIcon::Text => "text",
            CursorIcon::Resize(handle) => match handle {
                ResizeHandle::N => "n-resize",
                ResizeHandle::Ne => "ne-resize",
                ResizeHandle::E => "e-resize",
                ResizeHandle::Se => "se-resize",
                ResizeHandle::S => "s-resize",
                ResizeHandle::Sw => "sw-resize",
                ResizeHandle::W => "w-resize",
                ResizeHandle::Nw => "nw-resize",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    Dragging {
        id: ElementId,
        grab_offset: (f64, f64),
    },
    Resizing {
        id: ElementId,
        handle: ResizeHandle,
        origin: Point,
        start: Box<Element>,
    },
    Rotating {
        id: ElementId,
        center: Point,
    },
}

/// What a pointer event did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Feedback {
    /// The element list changed.
    pub scene_changed: bool,
    /// The selection changed.
    pub selection_changed: bool,
}

impl Feedback {
    fn scene(changed: bool) -> Self {
        Self {
            scene_changed: changed,
            selection_changed: false,
        }
    }

    fn selection(changed: bool) -> Self {
        Self {
            scene_changed: false,
            selection_changed: changed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    tool: Tool,
    pending_text: Option<TextPayload>,
    handles: HandleSettings,
    rotate_enabled: bool,
    mutated: bool,
}

impl InteractionController {
    pub fn new(handles: HandleSettings, rotate_enabled: bool) -> Self {
        Self {
            state: InteractionState::Idle,
            tool: Tool::Move,
            pending_text: None,
            handles,
            rotate_enabled,
            mutated: false,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == InteractionState::Idle
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn pending_text(&self) -> Option<&TextPayload> {
        self.pending_text.as_ref()
    }

    /// Arms the text tool with content to place on the next click.
    pub fn set_pending_text(&mut self, text: Option<TextPayload>) {
        self.pending_text = text;
    }

    fn has_pending_text(&self) -> bool {
        self.tool == Tool::Text
            && self
                .pending_text
                .as_ref()
                .is_some_and(|t| !t.content.trim().is_empty())
    }

    /// Drops any gesture in progress without touching the store.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.mutated = false;
    }

    pub fn pointer_down(&mut self, store: &mut SceneStore, p: Point) -> Feedback {
        self.mutated = false;

        if self.has_pending_text() {
            if let Some(text) = self.pending_text.take() {
                let id = store.add_element(NewElement::text(text, p));
                store.select(Some(id));
                self.tool = Tool::Move;
                self.state = InteractionState::Idle;
                tracing::debug!("Placed text {} at ({:.1}, {:.1})", id, p.x, p.y);
                return Feedback {
                    scene_changed: true,
                    selection_changed: true,
                };
            }
        }

        if let Some(selected) = store.selected_element() {
            let bounds = selected.bounds();
            let id = selected.id;

            if self.rotate_enabled && transform::hit_test_rotation(&bounds, p, &self.handles) {
                self.state = InteractionState::Rotating {
                    id,
                    center: bounds.center(),
                };
                tracing::debug!("Rotating {}", id);
                return Feedback::default();
            }

            if let Some(handle) = transform::hit_test_handle(&bounds, p, self.handles.hit_size) {
                self.state = InteractionState::Resizing {
                    id,
                    handle,
                    origin: p,
                    start: Box::new(selected.clone()),
                };
                tracing::debug!("Resizing {} from {:?}", id, handle);
                return Feedback::default();
            }
        }

        let hit = store
            .scene()
            .element_at(store.active_part(), p)
            .map(|e| (e.id, (p.x - e.x, p.y - e.y)));

        match hit {
            Some((id, grab_offset)) => {
                let changed = store.select(Some(id));
                self.state = InteractionState::Dragging { id, grab_offset };
                Feedback::selection(changed)
            }
            None => {
                self.state = InteractionState::Idle;
                Feedback::selection(store.select(None))
            }
        }
    }

    pub fn pointer_move(&mut self, store: &mut SceneStore, p: Point) -> Feedback {
        let changed = match &self.state {
            InteractionState::Idle => false,
            InteractionState::Dragging { id, grab_offset } => {
                store.move_to(*id, p.x - grab_offset.0, p.y - grab_offset.1)
            }
            InteractionState::Resizing {
                id,
                handle,
                origin,
                start,
            } => {
                let zone = store.zone_for(start.part);
                let outcome = transform::resize_from_handle(
                    start,
                    *handle,
                    p.offset_from(origin),
                    &zone,
                    store.limits(),
                );
                store.apply_resize(*id, &outcome)
            }
            InteractionState::Rotating { id, center } => {
                store.set_rotation(*id, transform::rotation_angle(*center, p))
            }
        };
        self.mutated |= changed;
        Feedback::scene(changed)
    }

    /// Ends the gesture. Returns whether the gesture changed the scene.
    pub fn pointer_up(&mut self) -> bool {
        let mutated = self.mutated;
        if !self.is_idle() {
            tracing::debug!("Gesture finished, changed={}", mutated);
        }
        self.reset();
        mutated
    }

    /// Cursor for the pointer at `p`.
    pub fn hover_cursor(&self, store: &SceneStore, p: Point) -> CursorIcon {
        match &self.state {
            InteractionState::Rotating { .. } => return CursorIcon::Grabbing,
            InteractionState::Dragging { .. } => return CursorIcon::Move,
            InteractionState::Resizing { handle, .. } => return CursorIcon::Resize(*handle),
            InteractionState::Idle => {}
        }

        if self.has_pending_text() {
            return CursorIcon::Text;
        }

        if let Some(selected) = store.selected_element() {
            let bounds = selected.bounds();
            if self.rotate_enabled && transform::hit_test_rotation(&bounds, p, &self.handles) {
                return CursorIcon::Grab;
            }
            if let Some(handle) = transform::hit_test_handle(&bounds, p, self.handles.hit_size) {
                return CursorIcon::Resize(handle);
            }
            return CursorIcon::Move;
        }

        if store.scene().element_at(store.active_part(), p).is_some() {
            CursorIcon::Move
        } else {
            CursorIcon::Default
        }
    }
}
