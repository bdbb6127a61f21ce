// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export view of a resolved model.
//!
//! Per-space boundary listings with areas and the four relational links,
//! all entities referenced by global id. This is the record interface the
//! presentation/storage collaborator consumes; no wire protocol.

use serde::{Deserialize, Serialize};

use crate::arena::ModelArena;
use crate::keys::BoundaryKey;
use crate::pipeline::ResolvedModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub application_identifier: String,
    pub application_version: String,
    pub spaces: Vec<SpaceSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceSummary {
    pub global_id: String,
    pub name: String,
    pub long_name: String,
    pub boundaries: Vec<BoundarySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundarySummary {
    pub global_id: String,
    pub element: String,
    pub physical_or_virtual: String,
    pub internal_or_external: String,
    pub is_hosted: bool,
    /// Net area, working units squared.
    pub area: f64,
    pub area_with_hosted: f64,
    pub corresponding_boundary: Option<String>,
    pub parent_boundary: Option<String>,
    pub inner_boundaries: Vec<String>,
    pub coplanar_with: Vec<String>,
}

impl ModelSummary {
    pub fn from_resolved(model: &ResolvedModel) -> Self {
        let arena = &model.arena;
        let boundary_id = |key: BoundaryKey| -> String {
            arena
                .boundary(key)
                .map(|b| b.info.global_id.clone())
                .unwrap_or_default()
        };

        let spaces = arena
            .iter_spaces()
            .map(|(_, space)| SpaceSummary {
                global_id: space.info.global_id.clone(),
                name: space.info.name.clone(),
                long_name: space.long_name.clone(),
                boundaries: space
                    .boundaries()
                    .iter()
                    .filter_map(|&key| arena.boundary(key))
                    .map(|b| BoundarySummary {
                        global_id: b.info.global_id.clone(),
                        element: arena
                            .element(b.element())
                            .map(|e| e.info.global_id.clone())
                            .unwrap_or_default(),
                        physical_or_virtual: b.physical_or_virtual.as_str().to_string(),
                        internal_or_external: b.internal_or_external.as_str().to_string(),
                        is_hosted: b.is_hosted(),
                        area: b.area(),
                        area_with_hosted: b.area_with_hosted(),
                        corresponding_boundary: b.corresponding().map(&boundary_id),
                        parent_boundary: b.parent().map(&boundary_id),
                        inner_boundaries: b
                            .inner_boundaries()
                            .iter()
                            .map(|&k| boundary_id(k))
                            .collect(),
                        coplanar_with: b
                            .coplanar_with()
                            .iter()
                            .map(|&k| boundary_id(k))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            application_identifier: model.info.application_identifier.clone(),
            application_version: model.info.application_version.clone(),
            spaces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ModelArena;
    use crate::defect::DefectReport;
    use bem_lite_geometry::PlanarFace;
    use bem_lite_model::{
        ElementClass, EntityInfo, InternalOrExternal, ModelInfo, PhysicalOrVirtual,
    };
    use nalgebra::{Matrix4, Point3};

    #[test]
    fn summary_reflects_links_by_global_id() {
        let mut arena = ModelArena::new();
        let s1 = arena.add_space(
            EntityInfo::new("S1", "IfcSpace", "A"),
            "A".into(),
            Matrix4::identity(),
        );
        let s2 = arena.add_space(
            EntityInfo::new("S2", "IfcSpace", "B"),
            "B".into(),
            Matrix4::identity(),
        );
        let wall = arena.add_element(
            EntityInfo::new("EW", "IfcWall", "Wall"),
            ElementClass::Wall,
            false,
            vec![],
        );

        let face = || {
            PlanarFace::from_loops(
                vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(1000.0, 0.0, 0.0),
                    Point3::new(1000.0, 0.0, 1000.0),
                    Point3::new(0.0, 0.0, 1000.0),
                ],
                [],
            )
            .unwrap()
        };

        let a = arena
            .add_boundary(
                EntityInfo::new("B1", "IfcRelSpaceBoundary", "2ndLevel"),
                s1,
                wall,
                PhysicalOrVirtual::Physical,
                InternalOrExternal::Internal,
                face(),
            )
            .unwrap();
        let b = arena
            .add_boundary(
                EntityInfo::new("B2", "IfcRelSpaceBoundary", "2ndLevel"),
                s2,
                wall,
                PhysicalOrVirtual::Physical,
                InternalOrExternal::Internal,
                face(),
            )
            .unwrap();
        arena.pair_corresponding(a, b).unwrap();

        let model = ResolvedModel {
            arena,
            report: DefectReport::new(),
            info: ModelInfo {
                application_identifier: "TestApp".into(),
                application_version: "1.0".into(),
            },
        };

        let summary = model.summary();
        assert_eq!(summary.spaces.len(), 2);
        let b1 = &summary.spaces[0].boundaries[0];
        assert_eq!(b1.corresponding_boundary.as_deref(), Some("B2"));
        assert_eq!(b1.element, "EW");
        assert_eq!(b1.internal_or_external, "INTERNAL");

        let json = serde_json::to_string(&summary).unwrap();
        let back: ModelSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.spaces[1].boundaries[0].corresponding_boundary.as_deref(),
            Some("B1")
        );
    }
}
