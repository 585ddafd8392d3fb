//! Document model: box labels, annotation entities, and the ordered annotation set.
//!
//! `BoxLabel` is the wire and persistence form of one bounding box:
//! center-based and normalized to the frame. `Annotation` is the editable
//! entity bound to one label while its frame is open; it owns the on-canvas
//! geometry, the class, and everything needed to draw its tag, so rendering
//! is derived from a single record. `AnnotationSet` keeps annotations in
//! insertion order and re-derives the numbered display rows on every
//! mutation.
//!
//! Data flows into this layer from the network (`load`) and from the input
//! engine (`add`, `remove`, `set_rect`, ...). The current label set is always
//! read back through [`AnnotationSet::to_box_list`], never from the list that
//! was loaded.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classes::class_color;
use crate::geometry::{CanvasRect, NormalizedRect, canvas_to_normalized, normalized_to_canvas};

/// Local identifier for an annotation. Never persisted.
pub type AnnotationId = Uuid;

/// Where a box came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSource {
    /// Drawn or loaded without provenance.
    #[default]
    Manual,
    /// Produced by the detector.
    Auto,
}

/// One bounding-box label as stored on the server and sent on the wire.
///
/// Coordinates are normalized to the frame and not clamped: a box may extend
/// past the frame edges and is preserved as-is unless edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxLabel {
    /// Index into the class table.
    pub class_id: u32,
    /// Display name of the class.
    pub class_name: String,
    /// Horizontal center, as a fraction of frame width.
    pub x_center: f64,
    /// Vertical center, as a fraction of frame height.
    pub y_center: f64,
    /// Width, as a fraction of frame width.
    pub width: f64,
    /// Height, as a fraction of frame height.
    pub height: f64,
    /// Detector score; absent for manually drawn boxes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Provenance tag. Label files carry none, so it defaults to manual.
    #[serde(default)]
    pub source: LabelSource,
}

impl BoxLabel {
    /// A manually drawn box with no confidence.
    #[must_use]
    pub fn manual(class_id: u32, class_name: impl Into<String>, rect: NormalizedRect) -> Self {
        Self {
            class_id,
            class_name: class_name.into(),
            x_center: rect.x_center,
            y_center: rect.y_center,
            width: rect.width,
            height: rect.height,
            confidence: None,
            source: LabelSource::Manual,
        }
    }

    /// The geometric part of the label.
    #[must_use]
    pub fn rect(&self) -> NormalizedRect {
        NormalizedRect { x_center: self.x_center, y_center: self.y_center, width: self.width, height: self.height }
    }
}

/// An editable box bound to one label while the frame is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Local identity; stable for the lifetime of the entity.
    pub id: AnnotationId,
    pub class_id: u32,
    pub class_name: String,
    /// Geometry in logical canvas pixels.
    pub rect: CanvasRect,
    /// Pending horizontal scale applied by a host-driven resize.
    pub scale_x: f64,
    /// Pending vertical scale applied by a host-driven resize.
    pub scale_y: f64,
    pub confidence: Option<f64>,
    pub source: LabelSource,
}

impl Annotation {
    /// Build a handle for `label` positioned on a canvas of the given size.
    #[must_use]
    pub fn from_label(label: &BoxLabel, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_id: label.class_id,
            class_name: label.class_name.clone(),
            rect: normalized_to_canvas(label.rect(), canvas_width, canvas_height),
            scale_x: 1.0,
            scale_y: 1.0,
            confidence: label.confidence,
            source: label.source,
        }
    }

    /// Geometry with the pending scale applied.
    #[must_use]
    pub fn effective_rect(&self) -> CanvasRect {
        CanvasRect { width: self.rect.width * self.scale_x, height: self.rect.height * self.scale_y, ..self.rect }
    }

    /// Project the current handle geometry back to a label.
    #[must_use]
    pub fn to_label(&self, canvas_width: f64, canvas_height: f64) -> BoxLabel {
        let n = canvas_to_normalized(self.rect, self.scale_x, self.scale_y, canvas_width, canvas_height);
        BoxLabel {
            class_id: self.class_id,
            class_name: self.class_name.clone(),
            x_center: n.x_center,
            y_center: n.y_center,
            width: n.width,
            height: n.height,
            confidence: self.confidence,
            source: self.source,
        }
    }

    /// Stroke color for this annotation's class.
    #[must_use]
    pub fn color(&self) -> &'static str {
        class_color(self.class_id)
    }

    /// Text shown in the tag above the rectangle, e.g. `"person 85%"`.
    #[must_use]
    pub fn tag_text(&self) -> String {
        match self.confidence {
            Some(c) => format!("{} {:.0}%", self.class_name, c * 100.0),
            None => self.class_name.clone(),
        }
    }
}

/// One line of the UI-facing annotation list.
///
/// `index` is display numbering only; use `id` for identity.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRow {
    pub index: usize,
    pub id: AnnotationId,
    pub class_id: u32,
    pub class_name: String,
    pub confidence: Option<f64>,
    pub source: LabelSource,
}

/// Ordered in-memory store of the annotations of one frame.
#[derive(Debug, Default)]
pub struct AnnotationSet {
    entries: Vec<Annotation>,
    rows: Vec<AnnotationRow>,
}

impl AnnotationSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all entries with fresh handles for `labels`.
    pub fn load(&mut self, labels: &[BoxLabel], canvas_width: f64, canvas_height: f64) {
        self.entries = labels.iter().map(|l| Annotation::from_label(l, canvas_width, canvas_height)).collect();
        self.reindex();
    }

    /// Append a handle for `label` and return its id.
    pub fn add(&mut self, label: &BoxLabel, canvas_width: f64, canvas_height: f64) -> AnnotationId {
        let annotation = Annotation::from_label(label, canvas_width, canvas_height);
        let id = annotation.id;
        self.entries.push(annotation);
        self.reindex();
        id
    }

    /// Remove an annotation. Returns `false` (and does nothing) if it is not present.
    pub fn remove(&mut self, id: &AnnotationId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.entries.remove(pos);
        self.reindex();
        true
    }

    /// Remove every annotation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.reindex();
    }

    /// Reassign the class of an annotation. Geometry and confidence are untouched.
    pub fn change_class(&mut self, id: &AnnotationId, class_id: u32, class_name: &str) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        entry.class_id = class_id;
        entry.class_name = class_name.to_owned();
        self.reindex();
        true
    }

    /// Commit new geometry for an annotation, folding away any pending scale.
    pub fn set_rect(&mut self, id: &AnnotationId, rect: CanvasRect) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        entry.rect = rect;
        entry.scale_x = 1.0;
        entry.scale_y = 1.0;
        self.reindex();
        true
    }

    /// Record a pending scale on an annotation without touching its stored size.
    pub fn set_scale(&mut self, id: &AnnotationId, scale_x: f64, scale_y: f64) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        entry.scale_x = scale_x;
        entry.scale_y = scale_y;
        self.reindex();
        true
    }

    /// Project every handle back to normalized labels, in order.
    #[must_use]
    pub fn to_box_list(&self, canvas_width: f64, canvas_height: f64) -> Vec<BoxLabel> {
        self.entries.iter().map(|a| a.to_label(canvas_width, canvas_height)).collect()
    }

    /// Return a reference to an annotation by id.
    #[must_use]
    pub fn get(&self, id: &AnnotationId) -> Option<&Annotation> {
        self.entries.iter().find(|a| a.id == *id)
    }

    /// Mutable access for in-progress gestures. Callers that change
    /// class must go through [`AnnotationSet::change_class`] so rows stay current.
    pub fn get_mut(&mut self, id: &AnnotationId) -> Option<&mut Annotation> {
        self.entries.iter_mut().find(|a| a.id == *id)
    }

    /// Insertion-order index of an annotation.
    #[must_use]
    pub fn position(&self, id: &AnnotationId) -> Option<usize> {
        self.entries.iter().position(|a| a.id == *id)
    }

    /// Annotations in insertion order (bottom of the draw stack first).
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.entries.iter()
    }

    /// Numbered display rows, recomputed on every mutation.
    #[must_use]
    pub fn rows(&self) -> &[AnnotationRow] {
        &self.rows
    }

    /// Number of annotations currently in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn reindex(&mut self) {
        self.rows = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, a)| AnnotationRow {
                index,
                id: a.id,
                class_id: a.class_id,
                class_name: a.class_name.clone(),
                confidence: a.confidence,
                source: a.source,
            })
            .collect();
    }
}
