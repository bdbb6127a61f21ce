// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The full resolution pipeline.
//!
//! Passes are strictly sequenced: geometry and placement at
//! materialization, then the per-space topology pass for every space, then
//! the corresponding-boundary pass over the whole model (a corresponding
//! pair may live in two different spaces, so every space must be resolved
//! first). Single-threaded by design; each relational field is written by
//! exactly one pass.

use bem_lite_geometry::GeometryConfig;
use bem_lite_model::{ModelInfo, ModelRecords};

use crate::arena::ModelArena;
use crate::correspond::associate_all;
use crate::defect::DefectReport;
use crate::error::Result;
use crate::export::ModelSummary;
use crate::materialize::materialize;
use crate::resolve::resolve_space_topology;

/// A fully resolved model: the arena with all relational links populated,
/// the aggregated defect report, and the authoring metadata.
#[derive(Debug)]
pub struct ResolvedModel {
    pub arena: ModelArena,
    pub report: DefectReport,
    pub info: ModelInfo,
}

impl ResolvedModel {
    /// Export view for the presentation/storage collaborator.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary::from_resolved(self)
    }
}

/// Runs the whole pipeline over one set of input records.
pub fn resolve_model(records: &ModelRecords, config: &GeometryConfig) -> Result<ResolvedModel> {
    let mut arena = ModelArena::new();
    let mut report = DefectReport::new();

    tracing::info!(
        spaces = records.spaces.len(),
        boundaries = records.boundaries.len(),
        application = %records.info.application_identifier,
        "resolving space-boundary topology"
    );

    materialize(records, config, &mut arena, &mut report)?;

    for space in arena.space_keys() {
        resolve_space_topology(&mut arena, space, config, &mut report)?;
    }

    associate_all(&mut arena, &mut report)?;

    tracing::info!(
        boundaries = arena.boundary_count(),
        defects = report.len(),
        "resolution finished"
    );

    Ok(ResolvedModel {
        arena,
        report,
        info: records.info.clone(),
    })
}
