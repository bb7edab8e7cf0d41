//! Design editor facade.
//!
//! `DesignEditor` wires the scene store, history, interaction controller, asset
//! resolver and renderer together. It is the only type a hosting page needs:
//! pointer and keyboard events go in, frames and [`EditorEvent`]s come out.
//!
//! Every operation that changes the element list commits one history snapshot,
//! except pointer gestures which commit once on pointer-up.

use crate::assets::{AssetLoader, AssetResolver, BaseArtwork};
use crate::export::{self, ExportOptions, ExportedImage};
use crate::history::History;
use crate::interaction::{CursorIcon, Feedback, InteractionController, Tool};
use crate::keyboard::{self, KeyEvent, Shortcut};
use crate::model::{
    Bitmap, Element, ElementPatch, NewElement, Payload, ShapeType, TextPayload, TextPreset,
    PRESET_POSITION,
};
use crate::renderer::{Frame, Renderer};
use crate::scene::Scene;
use crate::scene_store::{LayerRow, SceneStore, ZOrder};
use image::RgbaImage;
use std::sync::Arc;
use tokio::sync::broadcast;
use teestudio_core::{
    EditorEvent, ElementId, EventDispatcher, ExportError, GarmentColor, GarmentPart, Point,
    RgbaColor,
};
use teestudio_settings::{ConfigError, EditorConfig, FeatureSettings};

pub struct DesignEditor {
    config: EditorConfig,
    store: SceneStore,
    history: History,
    interaction: InteractionController,
    renderer: Renderer,
    assets: AssetResolver,
    artwork: Option<BaseArtwork>,
    events: EventDispatcher,
    zone_outline_override: Option<bool>,
    dirty: bool,
}

impl DesignEditor {
    /// Creates an editor on (`part`, `color`) after validating `config`.
    pub fn new(
        config: EditorConfig,
        loader: Arc<dyn AssetLoader>,
        part: GarmentPart,
        color: GarmentColor,
    ) -> Result<Self, ConfigError> {
        config
            .validate()
            .inspect_err(|e| tracing::warn!("Rejected editor config: {}", e))?;
        let store = SceneStore::new(&config, part, color);
        let history = History::new(config.history.max_snapshots);
        let interaction = InteractionController::new(config.handles.clone(), config.features.rotate);
        let renderer = Renderer::new(config.canvas.clone(), config.handles.clone());
        let assets = AssetResolver::new(loader, &config.assets);
        tracing::info!("Design editor ready on {} ({})", part, color);

        Ok(Self {
            config,
            store,
            history,
            interaction,
            renderer,
            assets,
            artwork: None,
            events: EventDispatcher::default(),
            zone_outline_override: None,
            dirty: true,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn features(&self) -> &FeatureSettings {
        &self.config.features
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.events.subscribe()
    }

    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    pub fn scene(&self) -> &Scene {
        self.store.scene()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.store.selection()
    }

    pub fn active_part(&self) -> GarmentPart {
        self.store.active_part()
    }

    pub fn active_color(&self) -> GarmentColor {
        self.store.active_color()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn artwork(&self) -> Option<&BaseArtwork> {
        self.artwork.as_ref()
    }

    pub fn layers(&self) -> Vec<LayerRow> {
        self.store.layers()
    }

    /// Whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears and returns the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ---- notifications ----

    fn emit_selection(&mut self) {
        self.dirty = true;
        self.events
            .publish(EditorEvent::SelectionChanged(self.store.selection()));
    }

    fn emit_elements(&self) {
        let scene = self.store.scene();
        self.events.publish(EditorEvent::ElementsChanged {
            on_active_part: scene.count_on_part(self.store.active_part()),
            total: scene.len(),
        });
    }

    fn emit_history(&self) {
        self.events.publish(EditorEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }

    fn emit_context(&self) {
        self.events.publish(EditorEvent::ContextChanged {
            part: self.store.active_part(),
            color: self.store.active_color(),
        });
    }

    /// Snapshots the scene if it differs from the current history entry.
    fn commit(&mut self) -> bool {
        if self.history.current() == self.store.scene() {
            return false;
        }
        self.history.commit(self.store.scene().clone());
        self.dirty = true;
        self.emit_elements();
        self.emit_history();
        true
    }

    /// Commits any pointer gesture still in progress.
    fn finish_gesture(&mut self) {
        if !self.interaction.is_idle() && self.interaction.pointer_up() {
            self.commit();
        }
    }

    // ---- context ----

    /// Switches the edited part. Finishes any open gesture and clears the selection.
    pub fn set_part(&mut self, part: GarmentPart) -> bool {
        self.finish_gesture();
        let had_selection = self.store.selection().is_some();
        if !self.store.set_part(part) {
            return false;
        }
        tracing::info!("Editing part {}", part);
        self.artwork = self.assets.cached(self.store.active_color(), part).cloned();
        self.dirty = true;
        self.emit_context();
        if had_selection {
            self.emit_selection();
        }
        self.emit_elements();
        true
    }

    /// Switches the garment colour. Elements and selection are unaffected.
    pub fn set_color(&mut self, color: GarmentColor) -> bool {
        self.finish_gesture();
        if !self.store.set_color(color) {
            return false;
        }
        tracing::info!("Garment colour {}", color);
        self.artwork = self.assets.cached(color, self.store.active_part()).cloned();
        self.dirty = true;
        self.emit_context();
        true
    }

    /// Resolves the base artwork for the active context.
    pub async fn load_artwork(&mut self) -> &BaseArtwork {
        let artwork = self
            .assets
            .resolve(self.store.active_color(), self.store.active_part())
            .await;
        self.dirty = true;
        self.artwork.insert(artwork)
    }

    /// Switches part and colour, then resolves the new artwork.
    pub async fn switch_to(&mut self, part: GarmentPart, color: GarmentColor) -> &BaseArtwork {
        self.set_color(color);
        self.set_part(part);
        self.load_artwork().await
    }

    // ---- element operations ----

    fn feature_allows(&self, new: &NewElement) -> bool {
        let features = &self.config.features;
        match (&new.payload, new.placement) {
            (Payload::Shape(_), _) => features.shapes,
            (Payload::Image(_), crate::model::Placement::Clipart) => true,
            (Payload::Image(_), _) => features.upload,
            (Payload::Text(_), _) => true,
        }
    }

    /// Adds an element on the active part, selects it and switches to the move tool.
    ///
    /// Returns `None` when the matching feature is switched off.
    pub fn add_element(&mut self, new: NewElement) -> Option<ElementId> {
        if !self.feature_allows(&new) {
            tracing::debug!("Ignored {} element, feature disabled", new.payload.kind());
            return None;
        }
        self.finish_gesture();
        let id = self.store.add_element(new);
        self.store.select(Some(id));
        self.interaction.set_tool(Tool::Move);
        self.commit();
        self.emit_selection();
        Some(id)
    }

    pub fn add_text(&mut self, text: TextPayload, at: Point) -> Option<ElementId> {
        self.add_element(NewElement::text(text, at))
    }

    pub fn add_text_preset(&mut self, preset: &TextPreset) -> Option<ElementId> {
        self.add_text(preset.payload(), PRESET_POSITION)
    }

    pub fn add_upload(&mut self, bitmap: Bitmap) -> Option<ElementId> {
        self.add_element(NewElement::upload(bitmap))
    }

    /// Decodes user-supplied bytes and adds them as an upload.
    pub fn add_upload_bytes(
        &mut self,
        bytes: &[u8],
    ) -> Result<Option<ElementId>, teestudio_core::DecodeError> {
        let bitmap = Bitmap::decode(bytes)?;
        Ok(self.add_upload(bitmap))
    }

    pub fn add_clipart(&mut self, bitmap: Bitmap) -> Option<ElementId> {
        self.add_element(NewElement::clipart(bitmap))
    }

    pub fn add_shape(&mut self, shape: ShapeType, fill: RgbaColor) -> Option<ElementId> {
        self.add_element(NewElement::shape(shape, fill))
    }

    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        self.finish_gesture();
        self.store.update_element(id, patch) && self.commit()
    }

    pub fn remove_element(&mut self, id: ElementId) -> bool {
        self.finish_gesture();
        let was_selected = self.store.selection() == Some(id);
        if !self.store.remove_element(id) {
            return false;
        }
        self.commit();
        if was_selected {
            self.emit_selection();
        }
        true
    }

    pub fn remove_selected(&mut self) -> bool {
        match self.store.selection() {
            Some(id) => self.remove_element(id),
            None => false,
        }
    }

    /// Duplicates an element and selects the copy.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        if !self.config.features.duplicate {
            return None;
        }
        self.finish_gesture();
        let copy = self.store.duplicate_element(id)?;
        self.commit();
        if self.store.select(Some(copy)) {
            self.emit_selection();
        }
        Some(copy)
    }

    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        self.store
            .selection()
            .and_then(|id| self.duplicate_element(id))
    }

    pub fn reorder(&mut self, id: ElementId, to: ZOrder) -> bool {
        self.finish_gesture();
        self.store.reorder(id, to) && self.commit()
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) -> bool {
        self.finish_gesture();
        let selected = self.store.selection();
        let changed = self.store.set_visible(id, visible) && self.commit();
        if self.store.selection() != selected {
            self.emit_selection();
        }
        changed
    }

    pub fn toggle_visible(&mut self, id: ElementId) -> bool {
        match self.store.get(id) {
            Some(e) => {
                let visible = !e.visible;
                self.set_visible(id, visible)
            }
            None => false,
        }
    }

    /// Adds `degrees` to an element's rotation.
    pub fn rotate_by(&mut self, id: ElementId, degrees: f64) -> bool {
        if !self.config.features.rotate {
            return false;
        }
        self.finish_gesture();
        let Some(current) = self.store.get(id).map(|e| e.rotation) else {
            return false;
        };
        self.store.set_rotation(id, current + degrees) && self.commit()
    }

    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        if !self.store.select(id) {
            return false;
        }
        self.emit_selection();
        true
    }

    // ---- history ----

    /// Steps back one snapshot. Clears the selection and any gesture.
    pub fn undo(&mut self) -> bool {
        self.finish_gesture();
        let Some(scene) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(scene);
        tracing::debug!("Undo to snapshot {}", self.history.index());
        true
    }

    /// Steps forward one snapshot. Clears the selection and any gesture.
    pub fn redo(&mut self) -> bool {
        self.finish_gesture();
        let Some(scene) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(scene);
        tracing::debug!("Redo to snapshot {}", self.history.index());
        true
    }

    fn restore(&mut self, scene: Scene) {
        let had_selection = self.store.selection().is_some();
        self.store.restore(scene);
        self.interaction.reset();
        self.dirty = true;
        if had_selection {
            self.emit_selection();
        }
        self.emit_elements();
        self.emit_history();
    }

    // ---- pointer ----

    pub fn tool(&self) -> Tool {
        self.interaction.tool()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.interaction.set_tool(tool);
    }

    /// Arms the text tool; the next click on the canvas places `text`.
    pub fn begin_text_placement(&mut self, text: TextPayload) {
        self.interaction.set_pending_text(Some(text));
        self.interaction.set_tool(Tool::Text);
    }

    fn apply_feedback(&mut self, feedback: Feedback) {
        if feedback.scene_changed {
            self.dirty = true;
        }
        if feedback.selection_changed {
            self.emit_selection();
        }
    }

    pub fn pointer_down(&mut self, p: Point) -> Feedback {
        self.finish_gesture();
        let feedback = self.interaction.pointer_down(&mut self.store, p);
        self.apply_feedback(feedback);
        if feedback.scene_changed {
            self.commit();
        }
        feedback
    }

    pub fn pointer_move(&mut self, p: Point) -> Feedback {
        let feedback = self.interaction.pointer_move(&mut self.store, p);
        self.apply_feedback(feedback);
        feedback
    }

    /// Ends the gesture and commits it if it changed anything.
    pub fn pointer_up(&mut self) -> bool {
        self.interaction.pointer_up() && self.commit()
    }

    pub fn hover_cursor(&self, p: Point) -> CursorIcon {
        self.interaction.hover_cursor(&self.store, p)
    }

    // ---- keyboard ----

    /// Handles a key press. Ignored while a text field has focus.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent, text_field_focused: bool) -> bool {
        if text_field_focused {
            return false;
        }
        let Some(shortcut) = keyboard::resolve(event, &self.config.constraints) else {
            return false;
        };
        let selected = self.store.selection();
        if shortcut.needs_selection() && selected.is_none() {
            return false;
        }
        tracing::debug!("Shortcut {:?}", shortcut);

        match (shortcut, selected) {
            (Shortcut::Undo, _) => {
                self.undo();
            }
            (Shortcut::Redo, _) => {
                self.redo();
            }
            (Shortcut::Duplicate, Some(id)) => {
                self.duplicate_element(id);
            }
            (Shortcut::Delete, Some(id)) => {
                self.remove_element(id);
            }
            (Shortcut::Rotate(degrees), Some(id)) => {
                self.rotate_by(id, degrees);
            }
            (Shortcut::Nudge(dx, dy), Some(id)) => {
                self.finish_gesture();
                if self.store.nudge(id, dx, dy) {
                    self.commit();
                }
            }
            (Shortcut::Snap(snap), Some(id)) => {
                self.finish_gesture();
                let target = self.store.get(id).map(|e| {
                    let zone = self.store.zone_for(e.part);
                    snap.position(&zone, e.width, e.height)
                });
                if let Some((x, y)) = target {
                    if self.store.move_to(id, x, y) {
                        self.commit();
                    }
                }
            }
            (_, None) => return false,
        }
        true
    }

    // ---- rendering ----

    /// Forces the zone outline on or off; `None` restores automatic behaviour.
    pub fn set_zone_outline_override(&mut self, visible: Option<bool>) {
        self.zone_outline_override = visible;
        self.dirty = true;
    }

    /// Shown unless turned off in config or a text element is selected.
    pub fn zone_outline_visible(&self) -> bool {
        if let Some(forced) = self.zone_outline_override {
            return forced;
        }
        let text_selected = self
            .store
            .selected_element()
            .is_some_and(|e| e.is_text());
        self.config.show_zone_outline && !text_selected
    }

    fn frame(&self, guides: bool) -> Frame<'_> {
        Frame {
            scene: self.store.scene(),
            part: self.store.active_part(),
            zone: self.store.active_zone(),
            selection: self.store.selection(),
            artwork: self.artwork.as_ref(),
            show_zone_outline: guides && self.zone_outline_visible(),
            show_selection: guides,
        }
    }

    /// Renders the current view with guides.
    pub fn render(&self) -> Result<RgbaImage, ExportError> {
        self.renderer.render(&self.frame(true))
    }

    /// Rasterizes the current view and encodes it.
    pub fn export(&self, options: &ExportOptions) -> Result<ExportedImage, ExportError> {
        let image = self.renderer.render(&self.frame(options.include_guides))?;
        let bytes = export::encode(&image, options.format)?;
        let part = self.store.active_part();
        tracing::info!(
            "Exported {} as {} ({} bytes)",
            part,
            options.format.extension(),
            bytes.len()
        );
        Ok(ExportedImage {
            bytes,
            format: options.format,
            width: image.width(),
            height: image.height(),
            suggested_name: export::suggested_file_name(part, options.format),
        })
    }
}

impl std::fmt::Debug for DesignEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignEditor")
            .field("part", &self.store.active_part())
            .field("color", &self.store.active_color())
            .field("elements", &self.store.scene().len())
            .field("selection", &self.store.selection())
            .field("history_index", &self.history.index())
            .finish()
    }
}
