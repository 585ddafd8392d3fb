#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::{AnnotationId, AnnotationSet};
use crate::geometry::CanvasRect;

/// Which part of an annotation was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Canvas-space location of this handle on `rect`.
    #[must_use]
    pub fn position(self, rect: &CanvasRect) -> Point {
        let cx = rect.left + rect.width / 2.0;
        let cy = rect.top + rect.height / 2.0;
        match self {
            Self::N => Point::new(cx, rect.top),
            Self::Ne => Point::new(rect.right(), rect.top),
            Self::E => Point::new(rect.right(), cy),
            Self::Se => Point::new(rect.right(), rect.bottom()),
            Self::S => Point::new(cx, rect.bottom()),
            Self::Sw => Point::new(rect.left, rect.bottom()),
            Self::W => Point::new(rect.left, cy),
            Self::Nw => Point::new(rect.left, rect.top),
        }
    }

    /// CSS cursor for hovering this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }

    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub annotation_id: AnnotationId,
    pub part: HitPart,
}

/// Test which annotation (if any) is under `world_pt`.
///
/// Handles of the selected annotation are checked first so a handle that
/// overlaps another box still grabs the selection. Bodies are then checked
/// topmost first (last inserted wins).
#[must_use]
pub fn hit_test(world_pt: Point, set: &AnnotationSet, camera: &Camera, selected_id: Option<AnnotationId>) -> Option<Hit> {
    let slop = camera.screen_dist_to_world(HANDLE_RADIUS_PX);

    if let Some(sel) = selected_id.and_then(|id| set.get(&id)) {
        let rect = sel.effective_rect();
        for anchor in ResizeAnchor::ALL {
            let p = anchor.position(&rect);
            if (world_pt.x - p.x).abs() <= slop && (world_pt.y - p.y).abs() <= slop {
                return Some(Hit { annotation_id: sel.id, part: HitPart::ResizeHandle(anchor) });
            }
        }
    }

    set.iter()
        .rev()
        .find(|a| a.effective_rect().contains(world_pt))
        .map(|a| Hit { annotation_id: a.id, part: HitPart::Body })
}
