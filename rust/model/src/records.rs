// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input record types, one per model entity kind.
//!
//! Records reference each other by global id; the resolver turns those
//! references into arena keys during materialization.

use serde::{Deserialize, Serialize};

use crate::classify::{ElementClass, InternalOrExternal, PhysicalOrVirtual};
use crate::entity::EntityInfo;
use crate::surface::{KernelPlacement, SurfaceDescription};

/// Model-level metadata: which application authored the file. Used for
/// labeling and for authoring-application-specific offset defaults only,
/// never for core control flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub application_identifier: String,
    pub application_version: String,
}

/// An enclosed volume (room, corridor, …) bounded by space boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceRecord {
    pub info: EntityInfo,
    /// Secondary descriptive name, shown alongside [`EntityInfo::name`].
    pub long_name: String,
    /// Kernel-frame placement of the space; every boundary of the space is
    /// expressed relative to it.
    pub placement: KernelPlacement,
}

/// A physical building component that provides boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRecord {
    pub info: EntityInfo,
    pub class: ElementClass,
    /// `true` when this element fills a void in another element (doors,
    /// windows); its boundaries are hosted by the punctured element's
    /// boundary.
    pub fills_voids: bool,
    /// Material layer thicknesses in model units, innermost first. Empty
    /// when the model carries no material association.
    #[serde(default)]
    pub layer_thicknesses: Vec<f64>,
}

impl ElementRecord {
    /// Total element thickness from its material layer set, model units.
    pub fn total_thickness(&self) -> f64 {
        self.layer_thicknesses.iter().sum()
    }
}

/// One second-level space boundary: a planar surface patch separating its
/// space from an adjacent space, the exterior, or an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryRecord {
    pub info: EntityInfo,
    /// Global id of the owning space.
    pub space: String,
    /// Global id of the related building element.
    pub element: String,
    pub physical_or_virtual: PhysicalOrVirtual,
    pub internal_or_external: InternalOrExternal,
    pub surface: SurfaceDescription,
}

/// The full input handed over by the model-loading collaborator. Collection
/// order is the source-file order and is preserved by the resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelRecords {
    #[serde(default)]
    pub info: ModelInfo,
    pub elements: Vec<ElementRecord>,
    pub spaces: Vec<SpaceRecord>,
    pub boundaries: Vec<BoundaryRecord>,
}
