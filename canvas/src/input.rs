//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! Pointer events arrive as a screen point plus [`Button`] and [`Modifiers`].
//! Between pointer-down and pointer-up the editor tracks one [`InputState`],
//! which remembers where the gesture started so moves can be applied as
//! deltas and cancels can restore the original box. Selection outlives
//! gestures and is kept in [`UiState`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::AnnotationId;
use crate::geometry::CanvasRect;
use crate::hit::ResizeAnchor;

/// Modifier keys held when the event fired.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Which pointer button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A key name as reported by `KeyboardEvent.key` (`"Delete"`, `"Escape"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key deletes the selected annotation.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    /// Whether this key cancels the current gesture and selection.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    /// Whether this key arms panning while held.
    #[must_use]
    pub fn is_pan_key(&self) -> bool {
        self.0 == " "
    }
}

/// Scroll amount from a wheel or trackpad event.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Editor state that outlives a single gesture.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected annotation, if any.
    pub selected_id: Option<AnnotationId>,
    /// Class assigned to newly drawn boxes.
    pub new_box_class: u32,
    /// The pan key (Space) is held down.
    pub pan_key_held: bool,
}

/// The gesture in progress, if any.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the view.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// The user is dragging out a new box.
    Drawing {
        /// Canvas-space corner where the drag started.
        anchor: Point,
        /// Canvas-space position of the latest pointer event.
        current: Point,
    },
    /// The user is moving an existing annotation.
    DraggingAnnotation {
        /// Id of the annotation being dragged.
        id: AnnotationId,
        /// Canvas-space pointer position at the previous event.
        last_world: Point,
        /// Geometry at the start of the drag, restored on cancel.
        orig: CanvasRect,
    },
    /// The user is resizing an annotation by one of its eight handles.
    ResizingAnnotation {
        /// Id of the annotation being resized.
        id: AnnotationId,
        /// Which corner/edge handle is being dragged.
        anchor: ResizeAnchor,
        /// Canvas-space pointer position at the start of the resize.
        start_world: Point,
        /// Geometry at the start of the resize.
        orig: CanvasRect,
    },
}

impl InputState {
    /// The rectangle being drawn, if a draw gesture is active.
    #[must_use]
    pub fn pending_rect(&self) -> Option<CanvasRect> {
        match self {
            Self::Drawing { anchor, current } => Some(CanvasRect::from_corners(*anchor, *current)),
            _ => None,
        }
    }

    /// Whether a pointer gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Coarse interaction phase as seen by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Drawing,
    Panning,
    /// An annotation is selected (and possibly being moved or resized).
    HasSelection(AnnotationId),
}
