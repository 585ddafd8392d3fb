use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::camera::{Camera, Point};
use crate::classes::ClassTable;
use crate::consts::{MIN_DRAW_SIZE_PX, MIN_RESIZE_PX, WHEEL_ZOOM_BASE};
use crate::doc::{Annotation, AnnotationId, AnnotationRow, AnnotationSet, BoxLabel};
use crate::geometry::{CanvasRect, Stage, canvas_to_normalized};
use crate::hit::{self, HitPart, ResizeAnchor};
use crate::input::{Button, InputState, Key, Modifiers, Phase, UiState, WheelDelta};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects of an input event, handed back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AnnotationAdded(AnnotationId),
    AnnotationUpdated(AnnotationId),
    AnnotationRemoved(AnnotationId),
    AnnotationsCleared,
    SelectionChanged(Option<AnnotationId>),
    CameraChanged,
    SetCursor(String),
    RenderNeeded,
}

impl Action {
    /// Whether this action changed the label set (and so must eventually be saved).
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::AnnotationAdded(_) | Self::AnnotationUpdated(_) | Self::AnnotationRemoved(_) | Self::AnnotationsCleared
        )
    }
}

/// Editor state and input handling with no browser handles.
///
/// Unit tests and the native sync layer drive this type directly.
pub struct EngineCore {
    pub set: AnnotationSet,
    pub classes: ClassTable,
    pub camera: Camera,
    pub stage: Stage,
    pub ui: UiState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    cursor: &'static str,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            set: AnnotationSet::new(),
            classes: ClassTable::default(),
            camera: Camera::default(),
            stage: Stage::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            cursor: "default",
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_classes(classes: ClassTable) -> Self {
        Self { classes, ..Self::default() }
    }

    // --- Frame loading ---

    /// Show a frame: fit it into the container, reset the view, and replace
    /// all annotations with handles for `labels`.
    pub fn load_frame(
        &mut self,
        labels: &[BoxLabel],
        image_width: f64,
        image_height: f64,
        container_width: f64,
        container_height: f64,
    ) {
        self.stage = Stage::fit(image_width, image_height, container_width, container_height);
        self.camera.reset();
        self.ui.selected_id = None;
        self.input = InputState::Idle;
        self.set.load(labels, self.stage.width(), self.stage.height());
    }

    /// Replace the class table used to name new and reclassified boxes.
    pub fn set_classes(&mut self, classes: ClassTable) {
        self.classes = classes;
    }

    /// Record the container size and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Commands ---

    /// Choose the class assigned to newly drawn boxes.
    pub fn set_new_box_class(&mut self, class_id: u32) {
        self.ui.new_box_class = class_id;
    }

    /// Reassign an annotation's class.
    pub fn change_class(&mut self, id: &AnnotationId, class_id: u32) -> Vec<Action> {
        let name = self.classes.name(class_id).to_owned();
        if self.set.change_class(id, class_id, &name) {
            vec![Action::AnnotationUpdated(*id), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Reassign the selected annotation's class, if any.
    pub fn change_selected_class(&mut self, class_id: u32) -> Vec<Action> {
        match self.ui.selected_id {
            Some(id) => self.change_class(&id, class_id),
            None => Vec::new(),
        }
    }

    /// Delete the selected annotation.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id.take() else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let mut actions = vec![Action::SelectionChanged(None)];
        if self.set.remove(&id) {
            actions.insert(0, Action::AnnotationRemoved(id));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove every annotation. Does nothing unless the user confirmed.
    pub fn clear_all(&mut self, confirmed: bool) -> Vec<Action> {
        if !confirmed {
            return Vec::new();
        }
        self.set.clear();
        self.input = InputState::Idle;
        let mut actions = vec![Action::AnnotationsCleared];
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Swap the whole label set for `labels` on the current stage, as one edit.
    pub fn replace_labels(&mut self, labels: &[BoxLabel]) -> Vec<Action> {
        self.set.clear();
        self.input = InputState::Idle;
        let mut actions = vec![Action::AnnotationsCleared];
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        let (w, h) = (self.stage.width(), self.stage.height());
        actions.extend(labels.iter().map(|label| Action::AnnotationAdded(self.set.add(label, w, h))));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Drop the selection without touching annotations.
    pub fn deselect(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_some() {
            vec![Action::SelectionChanged(None), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Pointer and keyboard ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if self.input.is_active() {
            return Vec::new();
        }

        if self.is_pan_gesture(button, modifiers) {
            self.input = InputState::Panning { last_screen: screen_pt };
            return self.cursor_action("grabbing").into_iter().collect();
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let world = self.camera.screen_to_world(screen_pt);
        let mut actions = Vec::new();
        match hit::hit_test(world, &self.set, &self.camera, self.ui.selected_id) {
            Some(hit) => {
                let id = hit.annotation_id;
                let Some(orig) = self.fold_scale(&id) else {
                    return actions;
                };
                if self.ui.selected_id != Some(id) {
                    self.ui.selected_id = Some(id);
                    actions.push(Action::SelectionChanged(Some(id)));
                }
                match hit.part {
                    HitPart::ResizeHandle(anchor) => {
                        self.input = InputState::ResizingAnnotation { id, anchor, start_world: world, orig };
                        actions.extend(self.cursor_action(anchor.cursor()));
                    }
                    HitPart::Body => {
                        self.input = InputState::DraggingAnnotation { id, last_world: world, orig };
                        actions.extend(self.cursor_action("move"));
                    }
                }
            }
            None => {
                if self.ui.selected_id.take().is_some() {
                    actions.push(Action::SelectionChanged(None));
                }
                self.input = InputState::Drawing { anchor: world, current: world };
                actions.extend(self.cursor_action("crosshair"));
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match self.input {
            InputState::Idle => self.hover(world).into_iter().collect(),
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::CameraChanged, Action::RenderNeeded]
            }
            InputState::Drawing { anchor, .. } => {
                self.input = InputState::Drawing { anchor, current: world };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingAnnotation { id, last_world, orig } => {
                if let Some(a) = self.set.get_mut(&id) {
                    a.rect.left += world.x - last_world.x;
                    a.rect.top += world.y - last_world.y;
                }
                self.input = InputState::DraggingAnnotation { id, last_world: world, orig };
                vec![Action::RenderNeeded]
            }
            InputState::ResizingAnnotation { id, anchor, start_world, orig } => {
                let rect = resized(orig, anchor, world.x - start_world.x, world.y - start_world.y);
                if let Some(a) = self.set.get_mut(&id) {
                    a.rect = rect;
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let state = std::mem::take(&mut self.input);
        let mut actions = Vec::new();
        match state {
            InputState::Idle => return actions,
            InputState::Panning { .. } => {}
            InputState::Drawing { anchor, .. } => {
                let rect = CanvasRect::from_corners(anchor, world);
                if let Some(id) = self.commit_drawn(rect) {
                    self.ui.selected_id = Some(id);
                    actions.push(Action::AnnotationAdded(id));
                    actions.push(Action::SelectionChanged(Some(id)));
                }
            }
            InputState::DraggingAnnotation { id, orig, .. } | InputState::ResizingAnnotation { id, orig, .. } => {
                if self.set.get(&id).is_some_and(|a| a.rect != orig) {
                    actions.push(Action::AnnotationUpdated(id));
                }
            }
        }
        actions.extend(self.hover(world));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Abort the active gesture: a pending draw is dropped and a move or
    /// resize snaps back to where it started.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::DraggingAnnotation { id, orig, .. } | InputState::ResizingAnnotation { id, orig, .. } => {
                if let Some(a) = self.set.get_mut(&id) {
                    a.rect = orig;
                }
                vec![Action::RenderNeeded]
            }
            InputState::Panning { .. } | InputState::Drawing { .. } => vec![Action::RenderNeeded],
        }
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        let factor = WHEEL_ZOOM_BASE.powf(delta.dy);
        if self.camera.zoom_at(screen_pt, factor) {
            vec![Action::CameraChanged, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_pan_key() {
            self.ui.pan_key_held = true;
            return Vec::new();
        }
        if key.is_delete() {
            if matches!(self.input, InputState::Idle) {
                return self.delete_selected();
            }
            return Vec::new();
        }
        if key.is_escape() {
            let mut actions = Vec::new();
            if matches!(self.input, InputState::Drawing { .. }) {
                self.input = InputState::Idle;
                actions.push(Action::RenderNeeded);
            }
            if matches!(self.input, InputState::Idle) {
                actions.extend(self.deselect());
            }
            return actions;
        }
        Vec::new()
    }

    pub fn on_key_up(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_pan_key() {
            self.ui.pan_key_held = false;
        }
        Vec::new()
    }

    // --- Queries ---

    /// Current label set projected from the handles.
    #[must_use]
    pub fn to_box_list(&self) -> Vec<BoxLabel> {
        self.set.to_box_list(self.stage.width(), self.stage.height())
    }

    /// The currently selected annotation, if any.
    #[must_use]
    pub fn selection(&self) -> Option<AnnotationId> {
        self.ui.selected_id
    }

    /// Pan offset and zoom.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an annotation by ID.
    #[must_use]
    pub fn annotation(&self, id: &AnnotationId) -> Option<&Annotation> {
        self.set.get(id)
    }

    /// Numbered rows for the side list.
    #[must_use]
    pub fn rows(&self) -> &[AnnotationRow] {
        self.set.rows()
    }

    /// Coarse interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (&self.input, self.ui.selected_id) {
            (InputState::Drawing { .. }, _) => Phase::Drawing,
            (InputState::Panning { .. }, _) => Phase::Panning,
            (_, Some(id)) => Phase::HasSelection(id),
            (_, None) => Phase::Idle,
        }
    }

    // --- Internals ---

    fn is_pan_gesture(&self, button: Button, modifiers: Modifiers) -> bool {
        match button {
            Button::Secondary | Button::Middle => true,
            Button::Primary => modifiers.alt || self.ui.pan_key_held,
        }
    }

    /// Add a drawn rectangle as a manual box unless it is too small.
    fn commit_drawn(&mut self, rect: CanvasRect) -> Option<AnnotationId> {
        if rect.width < MIN_DRAW_SIZE_PX || rect.height < MIN_DRAW_SIZE_PX {
            return None;
        }
        let (w, h) = (self.stage.width(), self.stage.height());
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        let class_id = self.ui.new_box_class;
        let label = BoxLabel::manual(class_id, self.classes.name(class_id), canvas_to_normalized(rect, 1.0, 1.0, w, h));
        Some(self.set.add(&label, w, h))
    }

    /// Bake any pending handle scale into the stored rect before a gesture.
    fn fold_scale(&mut self, id: &AnnotationId) -> Option<CanvasRect> {
        let rect = self.set.get(id)?.effective_rect();
        self.set.set_rect(id, rect);
        Some(rect)
    }

    fn hover(&mut self, world: Point) -> Option<Action> {
        let cursor = match hit::hit_test(world, &self.set, &self.camera, self.ui.selected_id) {
            Some(h) => match h.part {
                HitPart::ResizeHandle(anchor) => anchor.cursor(),
                HitPart::Body => "move",
            },
            None => "crosshair",
        };
        self.cursor_action(cursor)
    }

    fn cursor_action(&mut self, cursor: &'static str) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor(cursor.to_owned()))
    }
}

/// Apply a resize delta to the edges moved by `anchor`, keeping a minimum size.
fn resized(orig: CanvasRect, anchor: ResizeAnchor, dx: f64, dy: f64) -> CanvasRect {
    let mut left = orig.left;
    let mut top = orig.top;
    let mut right = orig.right();
    let mut bottom = orig.bottom();
    if anchor.moves_left() {
        left = (left + dx).min(right - MIN_RESIZE_PX);
    }
    if anchor.moves_right() {
        right = (right + dx).max(left + MIN_RESIZE_PX);
    }
    if anchor.moves_top() {
        top = (top + dy).min(bottom - MIN_RESIZE_PX);
    }
    if anchor.moves_bottom() {
        bottom = (bottom + dy).max(top + MIN_RESIZE_PX);
    }
    CanvasRect::new(left, top, right - left, bottom - top)
}

/// Browser-facing editor: an [`EngineCore`] plus the canvas it paints into.
pub struct Engine {
    canvas: HtmlCanvasElement,
    background: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Bind an editor to `canvas`.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, classes: ClassTable) -> Self {
        Self { canvas, background: None, core: EngineCore::with_classes(classes) }
    }

    /// Show a frame image with its labels, fitted into the current viewport.
    pub fn load_frame(&mut self, image: HtmlImageElement, labels: &[BoxLabel]) {
        let (iw, ih) = (f64::from(image.natural_width()), f64::from(image.natural_height()));
        let (vw, vh) = (self.core.viewport_width, self.core.viewport_height);
        self.core.load_frame(labels, iw, ih, vw, vh);
        self.background = Some(image);
    }

    /// Record the container size and resize the canvas backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).round() as u32);
        self.canvas.set_height((height_css * dpr).round() as u32);
    }

    // --- Pointer and keyboard (delegated) ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    pub fn on_key_up(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_up(key, modifiers)
    }

    // --- Render ---

    /// Paint the frame image and annotations.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core, self.background.as_ref())
    }

    // --- Queries (delegated) ---

    #[must_use]
    pub fn to_box_list(&self) -> Vec<BoxLabel> {
        self.core.to_box_list()
    }

    #[must_use]
    pub fn selection(&self) -> Option<AnnotationId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }
}
