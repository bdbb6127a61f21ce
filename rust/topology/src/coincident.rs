// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optional coincident-vertex matching.
//!
//! Maps each outer-loop vertex of a space's boundaries to a vertex of
//! another boundary at the same position. An extension point for vertex
//! welding across a space's enclosure; not part of the core pipeline.

use rustc_hash::FxHashMap;

use crate::arena::ModelArena;
use crate::error::{Error, Result};
use crate::keys::{BoundaryKey, SpaceKey};

/// One vertex of one boundary's outer loop.
pub type VertexRef = (BoundaryKey, usize);

/// Capability interface for coincident-vertex matching strategies.
pub trait CoincidentVertexMatcher {
    /// Computes a symmetric mapping between coincident vertices of the
    /// space's boundaries. Unmatched vertices are absent from the map.
    fn coincident_vertices(
        &self,
        arena: &ModelArena,
        space: SpaceKey,
    ) -> Result<FxHashMap<VertexRef, VertexRef>>;
}

/// Matches vertices by Euclidean distance: the first vertex of another
/// boundary within the tolerance wins.
#[derive(Debug, Clone)]
pub struct NearestVertexMatcher {
    /// Matching tolerance, working units.
    pub tolerance: f64,
}

impl Default for NearestVertexMatcher {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

impl CoincidentVertexMatcher for NearestVertexMatcher {
    fn coincident_vertices(
        &self,
        arena: &ModelArena,
        space: SpaceKey,
    ) -> Result<FxHashMap<VertexRef, VertexRef>> {
        let keys = arena
            .space(space)
            .ok_or(Error::SpaceNotFound(space))?
            .boundaries()
            .to_vec();
        let tol_sq = self.tolerance * self.tolerance;

        let mut map: FxHashMap<VertexRef, VertexRef> = FxHashMap::default();

        for &a in &keys {
            let outer_a = arena
                .boundary(a)
                .ok_or(Error::BoundaryNotFound(a))?
                .face()
                .outer();

            for (i, point) in outer_a.iter().enumerate() {
                if map.contains_key(&(a, i)) {
                    continue;
                }

                'search: for &b in keys.iter().filter(|&&b| b != a) {
                    let outer_b = arena
                        .boundary(b)
                        .ok_or(Error::BoundaryNotFound(b))?
                        .face()
                        .outer();
                    for (j, other) in outer_b.iter().enumerate() {
                        if map.contains_key(&(b, j)) {
                            continue;
                        }
                        if (point - other).norm_squared() <= tol_sq {
                            map.insert((a, i), (b, j));
                            map.insert((b, j), (a, i));
                            break 'search;
                        }
                    }
                }
            }
        }

        Ok(map)
    }
}
