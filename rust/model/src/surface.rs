// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw surface descriptions as delivered by the model-loading collaborator.
//!
//! A boundary surface is a curve-bounded plane: an outer loop, optional
//! inner loops (holes), and the local basis that places the loops in the
//! model. Loop coordinates are in the basis frame; the optional BREP payload
//! is already evaluated in world coordinates. Everything is in model units.

use serde::{Deserialize, Serialize};

/// Local coordinate basis of a planar surface: an origin, the plane normal
/// (`axis`), and the in-plane reference direction (`ref_direction`). The
/// third basis vector is `axis × ref_direction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPlacement {
    pub location: [f64; 3],
    pub axis: [f64; 3],
    pub ref_direction: [f64; 3],
}

impl AxisPlacement {
    /// World-aligned basis at the origin.
    pub fn identity() -> Self {
        Self {
            location: [0.0; 3],
            axis: [0.0, 0.0, 1.0],
            ref_direction: [1.0, 0.0, 0.0],
        }
    }
}

/// A boundary-representation face evaluated by the geometric kernel:
/// world-coordinate loops, model units. Input to the exact construction
/// tier; absent whenever the kernel did not produce one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrepFace {
    pub outer: Vec<[f64; 3]>,
    pub inner: Vec<Vec<[f64; 3]>>,
}

/// Raw description of one boundary surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDescription {
    pub basis: AxisPlacement,
    /// Tessellated outer loop in basis-frame coordinates. May contain
    /// consecutive duplicate vertices; construction collapses them.
    pub outer_bound: Vec<[f64; 3]>,
    /// Tessellated inner loops (holes), same frame as the outer loop.
    #[serde(default)]
    pub inner_bounds: Vec<Vec<[f64; 3]>>,
    /// Pre-evaluated exact representation, when the kernel supplied one.
    #[serde(default)]
    pub brep: Option<BrepFace>,
}

impl SurfaceDescription {
    pub fn new(basis: AxisPlacement, outer_bound: Vec<[f64; 3]>) -> Self {
        Self {
            basis,
            outer_bound,
            inner_bounds: Vec::new(),
            brep: None,
        }
    }
}

/// Rigid placement as delivered by the geometric kernel: a 3×4 matrix
/// flattened column-major (three rotation columns, then the translation
/// column), in model units. Note the layout is transposed relative to a
/// row-major target representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelPlacement(pub [f64; 12]);

impl KernelPlacement {
    /// Identity rotation with zero translation.
    pub fn identity() -> Self {
        Self([
            1.0, 0.0, 0.0, // x axis
            0.0, 1.0, 0.0, // y axis
            0.0, 0.0, 1.0, // z axis
            0.0, 0.0, 0.0, // translation
        ])
    }

    pub fn from_translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::identity();
        m.0[9] = x;
        m.0[10] = y;
        m.0[11] = z;
        m
    }
}
