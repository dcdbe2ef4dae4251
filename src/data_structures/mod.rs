//! Engine data structures: geometry and placed instances.
//!
//! This module contains the core data types for scene representation:
//!
//! - `geometry` contains mesh data, bounding boxes and load-time normalization
//! - `instance` holds per-instance transform, selection state and geometry

pub mod geometry;
pub mod instance;
