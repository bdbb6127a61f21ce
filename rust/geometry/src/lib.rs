// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BEM-Lite Geometry
//!
//! Turns raw boundary surface descriptions into planar faces in the working
//! coordinate space, and resolves placements from the geometric kernel's
//! native frame.
//!
//! Construction runs through a three-tier fallback: exact boundary
//! representation (when enabled and available), reconstruction from
//! tessellated wire loops, and finally a mesh fallback that keeps only the
//! outer loop. The working coordinate space is millimeters; model input is
//! meters.

pub mod builder;
pub mod error;
pub mod face;
pub mod plane;
pub mod transform;

pub use builder::{build_face, GeometryConfig, MODEL_TO_WORKING_SCALE};
pub use error::{Error, Result};
pub use face::PlanarFace;
pub use plane::Plane;
pub use transform::{basis_transform, placement_from_kernel};
