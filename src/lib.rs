//! # monte-carlo-pi: estimating π by random sampling
//!
//! Scatter points uniformly over a square of side `s` and count how many land
//! in the inscribed circle of radius `r = s / 2`. The areas are:
//!
//! ```text
//!     area of circle  = π r²
//!     area of square  = (2r)² = 4 r²
//! ```
//!
//! so the fraction of points inside the circle approaches `π / 4`, and
//! `4 × inside / total` is an estimate of π.
//!
//! ## Usage
//!
//! ```rust
//! use monte_carlo_pi::estimate::estimate_pi;
//! use monte_carlo_pi::sampler::generate_batch;
//! use monte_carlo_pi::samples::{append_batch, reset};
//!
//! let mut rng = rand::rng();
//!
//! let mut samples = reset();
//! for _ in 0..10 {
//!     let batch = generate_batch(&mut rng, 100, 360.0);
//!     samples = append_batch(samples, batch);
//! }
//!
//! assert_eq!(samples.total_count(), 1000);
//! let pi = estimate_pi(samples.inside_count(), samples.total_count()).unwrap();
//! assert!(pi > 2.5 && pi < 3.8);
//! ```
//!
//! ## Core Components
//!
//! - **[`sampler`]**: point generation and batch classification.
//! - **[`samples`]**: the append-only [`SampleSet`][crate::samples::SampleSet], `append_batch` and `reset`.
//! - **[`estimate`]**: `estimate_pi` and display formatting.
//! - **[`source`]**: injectable uniform random sources, including a scripted one for reproducible runs.
//! - **[`session`]**: a headless state holder that picks the square size from the viewport and applies resize policies.

pub mod estimate;
pub mod geometry;
pub mod point;
pub mod sampler;
pub mod samples;
pub mod session;
pub mod source;
pub mod viewport;
