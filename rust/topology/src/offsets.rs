// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optional offset boundary sets for wall-thickness visualization.
//!
//! Produces expanded (outward) and contracted (inward) copies of the
//! boundary faces, displaced along their normals by the related element's
//! thickness. The displacement rules depend on the authoring application:
//! some applications already place boundaries at the wall axis, so the
//! offsets are halved or skipped. This module is presentation-oriented and
//! never invoked by the core pipeline.

use bem_lite_geometry::PlanarFace;
use bem_lite_model::ModelInfo;

use crate::arena::ModelArena;
use crate::keys::BoundaryKey;

/// Wall thickness assumed when the element carries no material layer set,
/// working units.
pub const DEFAULT_WALL_THICKNESS: f64 = 200.0;

/// Authoring application classes with distinct offset conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringApp {
    Revit,
    Other,
}

impl AuthoringApp {
    /// Detects the application class from the model metadata.
    pub fn detect(info: &ModelInfo) -> Self {
        if info.application_identifier == "Revit" {
            Self::Revit
        } else {
            Self::Other
        }
    }
}

/// Outward-displaced copies of all boundary faces.
///
/// Non-internal boundaries move a full wall thickness outward (half for
/// Revit, which models them at the wall axis); internal boundaries move a
/// half thickness, except under Revit where they already sit mid-wall and
/// are left in place.
pub fn expanded_boundaries(arena: &ModelArena, app: AuthoringApp) -> Vec<(BoundaryKey, PlanarFace)> {
    let mut faces = Vec::new();
    for (key, boundary) in arena.iter_boundaries() {
        let thickness = element_thickness(arena, key);
        let distance = if boundary.is_internal() {
            if app == AuthoringApp::Revit {
                continue;
            }
            thickness / 2.0
        } else {
            match app {
                AuthoringApp::Revit => thickness / 2.0,
                AuthoringApp::Other => thickness,
            }
        };
        faces.push((key, boundary.face().translated_along_normal(distance)));
    }
    faces
}

/// Inward-displaced copies. Only Revit's non-internal boundaries need the
/// correction; everything else is already on the interior face.
pub fn contracted_boundaries(
    arena: &ModelArena,
    app: AuthoringApp,
) -> Vec<(BoundaryKey, PlanarFace)> {
    let mut faces = Vec::new();
    if app != AuthoringApp::Revit {
        return faces;
    }
    for (key, boundary) in arena.iter_boundaries() {
        if boundary.is_internal() {
            continue;
        }
        let thickness = element_thickness(arena, key);
        faces.push((key, boundary.face().translated_along_normal(-thickness / 2.0)));
    }
    faces
}

fn element_thickness(arena: &ModelArena, key: BoundaryKey) -> f64 {
    arena
        .boundary(key)
        .and_then(|b| arena.element(b.element()))
        .map(|e| e.total_thickness())
        .filter(|t| *t > 0.0)
        .unwrap_or(DEFAULT_WALL_THICKNESS)
}
