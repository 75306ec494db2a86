// File: crates/gantt-core/src/category.rs
// Summary: Named, colored task grouping; drives legend entries and bar colors.

use crate::color::normalize_color;
use crate::types::DEFAULT_COLOR;

/// A legend entry shared by any number of tasks.
///
/// Equality and hashing are structural over `(title, color)`, so two
/// categories built from the same inputs collapse into one series.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Category {
    title: String,
    color: String,
}

impl Category {
    /// `color` accepts any shape understood by [`normalize_color`].
    pub fn new(title: impl Into<String>, color: &str) -> Self {
        Self { title: title.into(), color: normalize_color(color) }
    }

    /// Category with the default blue.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, DEFAULT_COLOR)
    }

    pub fn title(&self) -> &str { &self.title }

    /// Normalised `RRGGBBAA`.
    pub fn color(&self) -> &str { &self.color }

    pub fn has_title(&self) -> bool { !self.title.is_empty() }
}

impl Default for Category {
    fn default() -> Self { Self::new("", DEFAULT_COLOR) }
}
