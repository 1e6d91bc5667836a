//! Headless session state.
//!
//! A [`Session`] owns the current [`Geometry`] and [`SampleSet`] and drives
//! them through the sampler's pure functions, one whole batch at a time. It is
//! what a presentation layer keeps around between user actions: it reacts to
//! "add points", "reset" and viewport resizes, and hands back a [`Summary`]
//! ready for display. Rendering is left entirely to the caller.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::estimate::{format_estimate, inside_ratio};
use crate::geometry::Geometry;
use crate::sampler::generate_batch;
use crate::samples::{append_batch, reset, SampleSet};
use crate::source::UniformSource;
use crate::viewport::{Layout, BREAKPOINT};

/// Small batch size offered to the user.
pub const BATCH_SMALL: usize = 10;
/// Large batch size offered to the user.
pub const BATCH_LARGE: usize = 100;

/// What happens to accumulated samples when the square side changes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ResizePolicy {
    /// Leave points and counts untouched.
    Keep,
    /// Scale point coordinates to the new side; counts are unchanged.
    #[default]
    Rescale,
    /// Drop all samples.
    Discard,
}

impl Display for ResizePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizePolicy::Keep => write!(f, "keep"),
            ResizePolicy::Rescale => write!(f, "rescale"),
            ResizePolicy::Discard => write!(f, "discard"),
        }
    }
}

impl FromStr for ResizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(ResizePolicy::Keep),
            "rescale" => Ok(ResizePolicy::Rescale),
            "discard" => Ok(ResizePolicy::Discard),
            _ => Err(format!(
                "unknown resize policy '{}', expected one of: keep, rescale, discard",
                s
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionConfig {
    /// Viewport widths below this use the compact side.
    pub breakpoint: u32,
    pub compact_side: f64,
    pub regular_side: f64,
    pub resize_policy: ResizePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            breakpoint: BREAKPOINT,
            compact_side: Layout::Compact.side(),
            regular_side: Layout::Regular.side(),
            resize_policy: ResizePolicy::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    pub fn layout(&self, width: u32) -> Layout {
        Layout::for_width_with(width, self.breakpoint)
    }

    pub fn side(&self, layout: Layout) -> f64 {
        match layout {
            Layout::Compact => self.compact_side,
            Layout::Regular => self.regular_side,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    layout: Layout,
    geometry: Geometry,
    samples: SampleSet,
}

impl Session {
    /// Starts an empty session sized for the given viewport width.
    ///
    /// # Panics
    ///
    /// Panics if either configured side (compact or regular) is not finite and
    /// positive, including the one the starting layout does not use.
    pub fn new(config: SessionConfig, viewport_width: u32) -> Self {
        let compact = Geometry::new(config.compact_side);
        let regular = Geometry::new(config.regular_side);

        let layout = config.layout(viewport_width);
        let geometry = match layout {
            Layout::Compact => compact,
            Layout::Regular => regular,
        };
        debug!(
            "Session::new(width = {}, layout = {}, side = {})",
            viewport_width,
            layout,
            geometry.side()
        );
        Self {
            config,
            layout,
            geometry,
            samples: SampleSet::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    pub fn layout(&self) -> Layout {
        self.layout
    }
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Samples `n` new points against the current geometry and merges them.
    ///
    /// Returns how many of the new points fell inside the circle.
    pub fn add_points<S>(&mut self, source: &mut S, n: usize) -> usize
    where
        S: UniformSource + ?Sized,
    {
        let batch = generate_batch(source, n, self.geometry.side());
        let inside = batch.inside;
        self.samples = append_batch(std::mem::take(&mut self.samples), batch);
        inside
    }

    pub fn reset(&mut self) {
        self.samples = reset();
    }

    /// Re-selects the layout for a new viewport width.
    ///
    /// Returns `true` if the square side changed, in which case the configured
    /// [`ResizePolicy`] has been applied to the accumulated samples.
    pub fn resize(&mut self, viewport_width: u32) -> bool {
        let layout = self.config.layout(viewport_width);
        self.layout = layout;

        let old_side = self.geometry.side();
        let new_side = self.config.side(layout);
        if new_side == old_side {
            return false;
        }

        debug!(
            "resize(width = {}): side {} -> {}, policy = {}",
            viewport_width, old_side, new_side, self.config.resize_policy
        );
        self.geometry = Geometry::new(new_side);
        let samples = std::mem::take(&mut self.samples);
        self.samples = match self.config.resize_policy {
            ResizePolicy::Keep => samples,
            ResizePolicy::Rescale => samples.rescaled(new_side / old_side),
            ResizePolicy::Discard => reset(),
        };
        true
    }

    pub fn summary(&self) -> Summary {
        Summary {
            inside: self.samples.inside_count(),
            total: self.samples.total_count(),
            estimate: self.samples.estimate(),
        }
    }
}

/// Snapshot of the current counts and estimate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Summary {
    pub inside: usize,
    pub total: usize,
    pub estimate: Option<f64>,
}

impl Summary {
    pub fn ratio(&self) -> Option<f64> {
        inside_ratio(self.inside, self.total)
    }

    /// The fraction as shown to the user, e.g. `"7/10"`.
    pub fn ratio_text(&self) -> String {
        format!("{}/{}", self.inside, self.total)
    }

    pub fn estimate_text(&self) -> String {
        format_estimate(self.estimate)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "π ≈ 4 × {} ≈ {}", self.ratio_text(), self.estimate_text())
    }
}
