// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Three-tier face construction from raw surface descriptions.
//!
//! 1. Exact boundary-representation payload, scaled to working units.
//!    Attempted only when [`GeometryConfig::prefer_exact_brep`] is set and
//!    the kernel supplied a payload.
//! 2. Reconstruction from tessellated wire loops: scale, collapse
//!    consecutive duplicate vertices, build the face with holes, place it
//!    with the basis transform.
//! 3. Mesh fallback from the outer loop alone, holes ignored.
//!
//! Each tier catches failure of the previous one; only when the last tier
//! fails does construction report an error for the boundary.

use nalgebra::Point3;

use bem_lite_model::SurfaceDescription;

use crate::error::{Error, Result};
use crate::face::{PlanarFace, PolyLoop};
use crate::transform::basis_transform;

/// Model unit is meters, working unit is millimeters.
pub const MODEL_TO_WORKING_SCALE: f64 = 1000.0;

/// Construction and tolerance settings for the geometry builder.
#[derive(Debug, Clone)]
pub struct GeometryConfig {
    /// Prefer the exact boundary-representation tier when a payload exists.
    /// Off by default: wire reconstruction gives more consistent results
    /// when inner boundaries touch the outer boundary.
    pub prefer_exact_brep: bool,
    /// Model→working unit scale applied to every coordinate.
    pub unit_scale: f64,
    /// Distance below which two vertices collapse into one, working units.
    pub linear_tolerance: f64,
    /// Allowed deviation of `|n1 · n2|` from 1 in plane-coincidence tests.
    pub angular_tolerance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            prefer_exact_brep: false,
            unit_scale: MODEL_TO_WORKING_SCALE,
            linear_tolerance: 1.0,
            angular_tolerance: 1e-6,
        }
    }
}

/// Builds the planar face of one boundary, running the tier fallback.
pub fn build_face(surface: &SurfaceDescription, config: &GeometryConfig) -> Result<PlanarFace> {
    if config.prefer_exact_brep {
        if let Ok(face) = face_from_brep(surface, config) {
            return Ok(face);
        }
    }
    match face_from_wires(surface, config) {
        Ok(face) => Ok(face),
        Err(_) => face_from_mesh(surface, config),
    }
}

/// Tier 1: exact payload, already in world coordinates; scaling only.
pub fn face_from_brep(surface: &SurfaceDescription, config: &GeometryConfig) -> Result<PlanarFace> {
    let brep = surface.brep.as_ref().ok_or(Error::MissingBrep)?;

    let outer = clean_loop(&brep.outer, config);
    if outer.len() < 3 {
        return Err(Error::DegenerateLoop(outer.len()));
    }

    let mut inner = Vec::with_capacity(brep.inner.len());
    for (index, hole) in brep.inner.iter().enumerate() {
        let cleaned = clean_loop(hole, config);
        if cleaned.len() < 3 {
            return Err(Error::DegenerateInnerLoop {
                index,
                count: cleaned.len(),
            });
        }
        inner.push(cleaned);
    }

    PlanarFace::from_loops(outer, inner)
}

/// Tier 2: face with holes from the tessellated loops, placed by the basis.
pub fn face_from_wires(surface: &SurfaceDescription, config: &GeometryConfig) -> Result<PlanarFace> {
    let outer = clean_loop(&surface.outer_bound, config);
    if outer.len() < 3 {
        return Err(Error::DegenerateLoop(outer.len()));
    }

    let mut inner = Vec::with_capacity(surface.inner_bounds.len());
    for (index, hole) in surface.inner_bounds.iter().enumerate() {
        let cleaned = clean_loop(hole, config);
        if cleaned.len() < 3 {
            return Err(Error::DegenerateInnerLoop {
                index,
                count: cleaned.len(),
            });
        }
        inner.push(cleaned);
    }

    let local = PlanarFace::from_loops(outer, inner)?;
    local.transformed(&basis_transform(&surface.basis, config.unit_scale))
}

/// Tier 3: outer loop only, holes ignored.
pub fn face_from_mesh(surface: &SurfaceDescription, config: &GeometryConfig) -> Result<PlanarFace> {
    let outer = clean_loop(&surface.outer_bound, config);
    if outer.len() < 3 {
        return Err(Error::DegenerateLoop(outer.len()));
    }

    let local = PlanarFace::from_loops(outer, [])?;
    local.transformed(&basis_transform(&surface.basis, config.unit_scale))
}

/// Scales a raw loop into working units and removes noise: consecutive
/// vertices closer than the tolerance collapse to one, and a closing vertex
/// repeating the first is dropped.
fn clean_loop(points: &[[f64; 3]], config: &GeometryConfig) -> PolyLoop {
    let tol_sq = config.linear_tolerance * config.linear_tolerance;
    let mut cleaned: PolyLoop = Vec::with_capacity(points.len());

    for raw in points {
        let p = Point3::new(
            raw[0] * config.unit_scale,
            raw[1] * config.unit_scale,
            raw[2] * config.unit_scale,
        );
        if let Some(last) = cleaned.last() {
            if (p - last).norm_squared() <= tol_sq {
                continue;
            }
        }
        cleaned.push(p);
    }

    if cleaned.len() > 1 {
        let first = cleaned[0];
        if (cleaned[cleaned.len() - 1] - first).norm_squared() <= tol_sq {
            cleaned.pop();
        }
    }

    cleaned
}
