// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Turns input records into arena entities.
//!
//! Elements come first (boundaries reference them), then spaces with their
//! resolved placements, then boundaries with constructed geometry. A
//! boundary whose surface defeats all construction tiers is recorded as a
//! defect and skipped; its topology and area steps never run. A record
//! referencing an unknown space or element is corrupt input and aborts the
//! run.

use bem_lite_geometry::{build_face, placement_from_kernel, GeometryConfig};
use bem_lite_model::ModelRecords;

use crate::arena::ModelArena;
use crate::defect::{Defect, DefectReport};
use crate::error::{Error, Result};

pub fn materialize(
    records: &ModelRecords,
    config: &GeometryConfig,
    arena: &mut ModelArena,
    report: &mut DefectReport,
) -> Result<()> {
    for element in &records.elements {
        let layer_thicknesses = element
            .layer_thicknesses
            .iter()
            .map(|t| t * config.unit_scale)
            .collect();
        arena.add_element(
            element.info.clone(),
            element.class.clone(),
            element.fills_voids,
            layer_thicknesses,
        );
    }

    for space in &records.spaces {
        let placement = placement_from_kernel(&space.placement, config.unit_scale);
        arena.add_space(space.info.clone(), space.long_name.clone(), placement);
    }

    for boundary in &records.boundaries {
        let space = arena
            .space_by_global_id(&boundary.space)
            .ok_or_else(|| Error::UnknownSpaceRef(boundary.space.clone()))?;
        let element = arena
            .element_by_global_id(&boundary.element)
            .ok_or_else(|| Error::UnknownElementRef(boundary.element.clone()))?;

        // Boundary geometry is relative to the owning space; composing the
        // space placement yields the global position.
        let placement = arena
            .space(space)
            .ok_or(Error::SpaceNotFound(space))?
            .placement;
        let face = match build_face(&boundary.surface, config)
            .and_then(|face| face.transformed(&placement))
        {
            Ok(face) => face,
            Err(err) => {
                tracing::warn!(
                    boundary = %boundary.info.global_id,
                    error = %err,
                    "face construction failed, skipping boundary"
                );
                report.record(Defect::GeometryConstruction {
                    boundary: boundary.info.global_id.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        arena.add_boundary(
            boundary.info.clone(),
            space,
            element,
            boundary.physical_or_virtual,
            boundary.internal_or_external,
            face,
        )?;
    }

    tracing::debug!(
        spaces = arena.space_count(),
        elements = arena.element_count(),
        boundaries = arena.boundary_count(),
        "materialized model records"
    );

    Ok(())
}
