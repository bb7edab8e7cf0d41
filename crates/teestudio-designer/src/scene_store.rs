//! Scene store: owns the element list, the selection and the active context.
//!
//! Every mutation re-applies the placement rules for the element's kind and
//! reports whether anything changed, so callers commit history only for real
//! edits. Unknown ids are a silent no-op.

use crate::model::{Element, ElementPatch, NewElement, Payload, Placement};
use crate::scene::Scene;
use crate::transform::{self, Limits, ResizeOutcome};
use teestudio_core::{ElementId, GarmentColor, GarmentPart, Rect, ZoneRegistry};
use teestudio_settings::{EditorConfig, PlacementSettings};

/// Target of a z-order change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrder {
    /// Top of the stack, drawn last.
    Front,
    /// Bottom of the stack, drawn first.
    Back,
}

/// One row of the layer panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRow {
    pub id: ElementId,
    pub label: String,
    pub kind: crate::model::ElementKind,
    pub visible: bool,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct SceneStore {
    scene: Scene,
    selection: Option<ElementId>,
    part: GarmentPart,
    color: GarmentColor,
    next_id: u64,
    zones: ZoneRegistry,
    limits: Limits,
    placement: PlacementSettings,
    duplicate_offset: f64,
}

impl SceneStore {
    pub fn new(config: &EditorConfig, part: GarmentPart, color: GarmentColor) -> Self {
        Self {
            scene: Scene::new(),
            selection: None,
            part,
            color,
            next_id: 1,
            zones: config.zones.registry(),
            limits: Limits::from_config(config),
            placement: config.placement.clone(),
            duplicate_offset: config.constraints.duplicate_offset,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.scene.get(id)
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.and_then(|id| self.scene.get(id))
    }

    pub fn active_part(&self) -> GarmentPart {
        self.part
    }

    pub fn active_color(&self) -> GarmentColor {
        self.color
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn zone_for(&self, part: GarmentPart) -> Rect {
        self.zones.zone_for(part)
    }

    pub fn active_zone(&self) -> Rect {
        self.zones.zone_for(self.part)
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a new element on the active part and returns its id.
    pub fn add_element(&mut self, new: NewElement) -> ElementId {
        let zone = self.active_zone();
        let bounds = self.initial_bounds(&new, &zone);
        let id = self.allocate_id();
        let element = Element {
            id,
            part: self.part,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            rotation: 0.0,
            visible: true,
            payload: new.payload,
        };
        tracing::debug!(
            "Added {} {} on {} at ({:.1}, {:.1}) {:.1}x{:.1}",
            element.kind(),
            id,
            self.part,
            element.x,
            element.y,
            element.width,
            element.height
        );
        self.scene.push(element);
        id
    }

    fn initial_bounds(&self, new: &NewElement, zone: &Rect) -> Rect {
        let limits = &self.limits;
        let (natural_w, natural_h, profile) = match &new.payload {
            Payload::Text(text) => {
                let (w, h) = transform::text_box(&text.content, text.font_size, limits);
                let (x, y) = match new.placement {
                    Placement::At(p) => (p.x, p.y),
                    Placement::Clipart | Placement::Upload => zone.centered(w, h),
                };
                let (x, y) = transform::clamp_position(true, x, y, w, h, zone, limits);
                return Rect::new(x, y, w, h);
            }
            Payload::Image(img) => {
                let profile = match new.placement {
                    Placement::Clipart => self.placement.clipart,
                    Placement::Upload | Placement::At(_) => self.placement.upload,
                };
                (img.bitmap.width() as f64, img.bitmap.height() as f64, profile)
            }
            Payload::Shape(_) => {
                let size = self.placement.default_shape_size;
                let profile = match new.placement {
                    Placement::Upload => self.placement.upload,
                    Placement::Clipart | Placement::At(_) => self.placement.clipart,
                };
                (size, size, profile)
            }
        };

        let fitted = transform::place_in_zone(natural_w, natural_h, zone, &profile, limits.min_size);
        match new.placement {
            Placement::At(p) => {
                let (x, y) =
                    transform::clamp_position(false, p.x, p.y, fitted.width, fitted.height, zone, limits);
                Rect::new(x, y, fitted.width, fitted.height)
            }
            Placement::Clipart | Placement::Upload => fitted,
        }
    }

    /// Replaces fields and re-applies the placement rules for the element's kind.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        let Some(current) = self.scene.get(id) else {
            return false;
        };
        let zone = self.zones.zone_for(current.part);
        let mut next = current.clone();
        apply_patch(&mut next, patch, &zone, &self.limits);
        self.replace(next)
    }

    /// Moves an element, clamping it to its zone (or the canvas for text).
    pub fn move_to(&mut self, id: ElementId, x: f64, y: f64) -> bool {
        let Some(current) = self.scene.get(id) else {
            return false;
        };
        let zone = self.zones.zone_for(current.part);
        let (x, y) = transform::clamp_position(
            current.is_text(),
            x,
            y,
            current.width,
            current.height,
            &zone,
            &self.limits,
        );
        let mut next = current.clone();
        next.x = x;
        next.y = y;
        self.replace(next)
    }

    /// Moves an element by a delta, see [`SceneStore::move_to`].
    pub fn nudge(&mut self, id: ElementId, dx: f64, dy: f64) -> bool {
        match self.scene.get(id) {
            Some(e) => {
                let (x, y) = (e.x + dx, e.y + dy);
                self.move_to(id, x, y)
            }
            None => false,
        }
    }

    /// Writes the result of a resize gesture step.
    pub fn apply_resize(&mut self, id: ElementId, outcome: &ResizeOutcome) -> bool {
        let Some(current) = self.scene.get(id) else {
            return false;
        };
        let mut next = current.clone();
        next.x = outcome.bounds.x;
        next.y = outcome.bounds.y;
        next.width = outcome.bounds.width;
        next.height = outcome.bounds.height;
        if let (Payload::Text(text), Some(size)) = (&mut next.payload, outcome.font_size) {
            text.font_size = size;
        }
        self.replace(next)
    }

    pub fn set_rotation(&mut self, id: ElementId, degrees: f64) -> bool {
        let Some(current) = self.scene.get(id) else {
            return false;
        };
        let mut next = current.clone();
        next.rotation = degrees;
        self.replace(next)
    }

    fn replace(&mut self, next: Element) -> bool {
        match self.scene.get_mut(next.id) {
            Some(slot) if *slot != next => {
                *slot = next;
                true
            }
            _ => false,
        }
    }

    /// Removes an element, clearing the selection if it was selected.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        if self.scene.remove(id).is_none() {
            return false;
        }
        if self.selection == Some(id) {
            self.selection = None;
        }
        tracing::debug!("Removed {}", id);
        true
    }

    /// Clones an element offset by the duplicate offset and appends it on top.
    ///
    /// Text copies are only kept on the canvas; artwork copies are clamped to their zone.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let source = self.scene.get(id)?.clone();
        let zone = self.zones.zone_for(source.part);
        let (x, y) = transform::clamp_position(
            source.is_text(),
            source.x + self.duplicate_offset,
            source.y + self.duplicate_offset,
            source.width,
            source.height,
            &zone,
            &self.limits,
        );
        let new_id = self.allocate_id();
        let copy = Element {
            id: new_id,
            x,
            y,
            ..source
        };
        self.scene.push(copy);
        tracing::debug!("Duplicated {} as {}", id, new_id);
        Some(new_id)
    }

    /// Moves an element to either end of the list.
    pub fn reorder(&mut self, id: ElementId, to: ZOrder) -> bool {
        let Some(idx) = self.scene.index_of(id) else {
            return false;
        };
        let last = self.scene.len() - 1;
        let target = match to {
            ZOrder::Front => last,
            ZOrder::Back => 0,
        };
        if idx == target {
            return false;
        }
        if let Some(element) = self.scene.remove(id) {
            self.scene.insert(target, element);
        }
        true
    }

    /// Shows or hides an element. Hiding the selected element clears the selection.
    pub fn set_visible(&mut self, id: ElementId, visible: bool) -> bool {
        let changed = self.update_element(
            id,
            &ElementPatch {
                visible: Some(visible),
                ..Default::default()
            },
        );
        if !visible && self.selection == Some(id) {
            self.selection = None;
        }
        changed
    }

    pub fn toggle_visible(&mut self, id: ElementId) -> bool {
        match self.scene.get(id) {
            Some(e) => {
                let visible = !e.visible;
                self.set_visible(id, visible)
            }
            None => false,
        }
    }

    /// Selects an element on the active part, or clears the selection.
    ///
    /// Ids that are unknown or drawn on another part leave the selection untouched.
    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        if let Some(id) = id {
            match self.scene.get(id) {
                Some(e) if e.part == self.part => {}
                _ => return false,
            }
        }
        if self.selection == id {
            return false;
        }
        self.selection = id;
        true
    }

    /// Switches the active part; clears the selection when the part changes.
    pub fn set_part(&mut self, part: GarmentPart) -> bool {
        if self.part == part {
            return false;
        }
        self.part = part;
        self.selection = None;
        true
    }

    pub fn set_color(&mut self, color: GarmentColor) -> bool {
        if self.color == color {
            return false;
        }
        self.color = color;
        true
    }

    /// Replaces the element list with a history snapshot.
    ///
    /// The selection is cleared; ids keep counting up so none is reused.
    pub fn restore(&mut self, scene: Scene) {
        if let Some(ElementId(max)) = scene.max_id() {
            self.next_id = self.next_id.max(max + 1);
        }
        self.scene = scene;
        self.selection = None;
    }

    /// Layer panel rows for the active part, topmost first.
    pub fn layers(&self) -> Vec<LayerRow> {
        self.scene
            .on_part(self.part)
            .rev()
            .map(|e| LayerRow {
                id: e.id,
                label: e.label(),
                kind: e.kind(),
                visible: e.visible,
                selected: self.selection == Some(e.id),
            })
            .collect()
    }
}

fn apply_patch(element: &mut Element, patch: &ElementPatch, zone: &Rect, limits: &Limits) {
    if let Some(rotation) = patch.rotation {
        element.rotation = rotation;
    }
    if let Some(visible) = patch.visible {
        element.visible = visible;
    }
    if let Some(x) = patch.x {
        element.x = x;
    }
    if let Some(y) = patch.y {
        element.y = y;
    }

    match &mut element.payload {
        Payload::Text(text) => {
            if let Some(content) = &patch.content {
                text.content = content.clone();
            }
            if let Some(family) = &patch.font_family {
                text.font_family = family.clone();
            }
            if let Some(size) = patch.font_size {
                text.font_size = size.max(limits.min_font_size);
            }
            if let Some(weight) = patch.font_weight {
                text.font_weight = weight;
            }
            if let Some(style) = patch.font_style {
                text.font_style = style;
            }
            if let Some(fill) = patch.fill {
                text.fill = fill;
            }
            let (w, h) = transform::text_box(&text.content, text.font_size, limits);
            element.width = w;
            element.height = h;
        }
        Payload::Shape(shape) => {
            if let Some(fill) = patch.fill {
                shape.fill = fill;
            }
            let (w, h) = transform::constrain_size(
                patch.width.unwrap_or(element.width),
                patch.height.unwrap_or(element.height),
                None,
                Some(zone),
                limits.min_size,
            );
            element.width = w;
            element.height = h;
        }
        Payload::Image(img) => {
            let ratio = img.bitmap.aspect_ratio();
            let width = match (patch.width, patch.height) {
                (Some(w), _) => Some(w),
                (None, Some(h)) => Some(h * ratio),
                (None, None) => None,
            };
            if let Some(width) = width {
                let (w, h) = transform::constrain_size(
                    width,
                    width / ratio,
                    Some(ratio),
                    Some(zone),
                    limits.min_size,
                );
                element.width = w;
                element.height = h;
            }
        }
    }

    let (x, y) = transform::clamp_position(
        element.is_text(),
        element.x,
        element.y,
        element.width,
        element.height,
        zone,
        limits,
    );
    element.x = x;
    element.y = y;
}
