//! Layout selection from the viewport width.

use std::fmt::{Display, Formatter};

/// Widths strictly below this use the compact layout.
pub const BREAKPOINT: u32 = 412;
pub const COMPACT_SIDE: f64 = 240.0;
pub const REGULAR_SIDE: f64 = 360.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layout {
    Compact,
    Regular,
}

impl Layout {
    pub fn for_width(width: u32) -> Self {
        Self::for_width_with(width, BREAKPOINT)
    }

    pub fn for_width_with(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Layout::Compact
        } else {
            Layout::Regular
        }
    }

    /// Default square side for this layout.
    pub fn side(self) -> f64 {
        match self {
            Layout::Compact => COMPACT_SIDE,
            Layout::Regular => REGULAR_SIDE,
        }
    }

    /// Caption of the button that adds `n` points.
    ///
    /// The compact layout drops the verb to save room.
    pub fn batch_label(self, n: usize) -> String {
        match self {
            Layout::Compact => format!("{} Points", n),
            Layout::Regular => format!("Add {} Points", n),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Compact => write!(f, "compact"),
            Layout::Regular => write!(f, "regular"),
        }
    }
}
