//! Class table and color palette.
//!
//! The class list comes from the server; colors do not. They are a fixed
//! local palette indexed by class id so the legend stays stable across
//! sessions.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

use serde::{Deserialize, Serialize};

/// Stroke color for each class id, in palette order.
pub const PALETTE: [&str; 12] = [
    "#FF0000", "#0000FF", "#FFFF00", "#00FF00", "#800080", "#FFA500", "#00FFFF", "#8B4513", "#CCCCCC", "#FFC0CB",
    "#32CD32", "#FFD700",
];

/// Color used for class ids outside the palette.
pub const FALLBACK_COLOR: &str = "#FF0000";

/// Display name for class ids missing from the table.
pub const UNKNOWN_CLASS: &str = "unknown";

const DEFAULT_NAMES: [&str; 12] =
    ["person", "car", "falldown", "bus", "truck", "bicycle", "motorcycle", "boar", "tractor", "scooter", "cat", "dog"];

/// Palette color for a class id.
#[must_use]
pub fn class_color(class_id: u32) -> &'static str {
    PALETTE.get(class_id as usize).copied().unwrap_or(FALLBACK_COLOR)
}

/// One entry of the class list as served by `GET /api/classes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub class_id: u32,
    pub class_name: String,
}

/// Ordered class list with name and color lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTable {
    classes: Vec<ClassInfo>,
}

impl ClassTable {
    #[must_use]
    pub fn new(classes: Vec<ClassInfo>) -> Self {
        Self { classes }
    }

    /// Display name for `class_id`, or `"unknown"`.
    #[must_use]
    pub fn name(&self, class_id: u32) -> &str {
        self.classes
            .iter()
            .find(|c| c.class_id == class_id)
            .map_or(UNKNOWN_CLASS, |c| c.class_name.as_str())
    }

    /// Class id for a display name (exact match).
    #[must_use]
    pub fn id_of(&self, class_name: &str) -> Option<u32> {
        self.classes.iter().find(|c| c.class_name == class_name).map(|c| c.class_id)
    }

    /// Whether the table defines `class_id`.
    #[must_use]
    pub fn contains(&self, class_id: u32) -> bool {
        self.classes.iter().any(|c| c.class_id == class_id)
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, ClassInfo> {
        self.classes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassTable {
    /// The twelve classes the detector is trained on.
    fn default() -> Self {
        let classes = DEFAULT_NAMES
            .iter()
            .zip(0u32..)
            .map(|(name, class_id)| ClassInfo { class_id, class_name: (*name).to_owned() })
            .collect();
        Self { classes }
    }
}
