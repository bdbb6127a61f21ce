// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BEM-Lite Topology
//!
//! Reconstructs the spatial-boundary topology of building spaces: for each
//! space, which boundaries share a plane, which boundaries host which
//! opening boundaries, and which internal boundary sits on the opposite side
//! of the same partition (the corresponding boundary). The result is a
//! watertight, adjacency-aware set of space-separating surfaces ready for
//! thermal and energy analysis.
//!
//! Entities live in a [`ModelArena`] with generational keys. Relational
//! links are populated by strictly sequenced passes: geometry and placement
//! at materialization, per-space coplanarity and hosting next, and the
//! cross-space corresponding-boundary pass last. Recoverable modeling
//! problems are collected in a [`DefectReport`] instead of aborting the run.

pub mod arena;
pub mod coincident;
pub mod correspond;
pub mod defect;
pub mod error;
pub mod export;
pub mod keys;
pub mod materialize;
pub mod offsets;
pub mod pipeline;
pub mod resolve;

pub use arena::{Boundary, Element, ModelArena, Space};
pub use defect::{Defect, DefectReport};
pub use error::{Error, Result};
pub use export::ModelSummary;
pub use keys::{BoundaryKey, ElementKey, SpaceKey};
pub use pipeline::{resolve_model, ResolvedModel};
