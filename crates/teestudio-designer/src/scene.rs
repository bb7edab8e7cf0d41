//! The ordered element list that history snapshots.

use crate::model::Element;
use teestudio_core::{ElementId, GarmentPart, Point};

/// Full ordered element list across all parts.
///
/// List order is z-order: the last element is drawn on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub(crate) fn remove(&mut self, id: ElementId) -> Option<Element> {
        let idx = self.index_of(id)?;
        Some(self.elements.remove(idx))
    }

    pub(crate) fn insert(&mut self, index: usize, element: Element) {
        let index = index.min(self.elements.len());
        self.elements.insert(index, element);
    }

    /// Elements drawn on `part`, bottom to top.
    pub fn on_part(&self, part: GarmentPart) -> impl DoubleEndedIterator<Item = &Element> + '_ {
        self.elements.iter().filter(move |e| e.part == part)
    }

    pub fn count_on_part(&self, part: GarmentPart) -> usize {
        self.on_part(part).count()
    }

    /// Topmost visible element on `part` whose bounding box contains `p`.
    ///
    /// Rotation is ignored; the unrotated box is the hit area.
    pub fn element_at(&self, part: GarmentPart, p: Point) -> Option<&Element> {
        self.on_part(part)
            .rev()
            .find(|e| e.visible && e.bounds().contains_point(p))
    }

    /// Largest id in the scene, used to keep id allocation monotonic.
    pub fn max_id(&self) -> Option<ElementId> {
        self.elements.iter().map(|e| e.id).max()
    }
}
