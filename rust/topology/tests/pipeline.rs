// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end pipeline scenarios on synthetic building models.

use approx::assert_relative_eq;
use bem_lite_geometry::GeometryConfig;
use bem_lite_model::{
    AxisPlacement, BoundaryRecord, ElementClass, ElementRecord, EntityInfo, InternalOrExternal,
    KernelPlacement, ModelInfo, ModelRecords, PhysicalOrVirtual, SpaceRecord, SurfaceDescription,
};
use bem_lite_topology::correspond::associate_all;
use bem_lite_topology::{resolve_model, Defect, DefectReport};

/// Rectangle in model units (meters): origin plus two edge directions.
fn rect_surface(origin: [f64; 3], u: [f64; 3], v: [f64; 3], w: f64, h: f64) -> SurfaceDescription {
    let p = |su: f64, sv: f64| {
        [
            origin[0] + u[0] * su + v[0] * sv,
            origin[1] + u[1] * su + v[1] * sv,
            origin[2] + u[2] * su + v[2] * sv,
        ]
    };
    SurfaceDescription::new(
        AxisPlacement::identity(),
        vec![p(0.0, 0.0), p(w, 0.0), p(w, h), p(0.0, h)],
    )
}

fn wall_element(id: &str) -> ElementRecord {
    ElementRecord {
        info: EntityInfo::new(id, "IfcWallStandardCase", id),
        class: ElementClass::Wall,
        fills_voids: false,
        layer_thicknesses: vec![],
    }
}

fn slab_element(id: &str) -> ElementRecord {
    ElementRecord {
        info: EntityInfo::new(id, "IfcSlab", id),
        class: ElementClass::Slab,
        fills_voids: false,
        layer_thicknesses: vec![],
    }
}

fn space_record(id: &str) -> SpaceRecord {
    SpaceRecord {
        info: EntityInfo::new(id, "IfcSpace", id),
        long_name: format!("Space {id}"),
        placement: KernelPlacement::identity(),
    }
}

fn boundary_record(
    id: &str,
    space: &str,
    element: &str,
    ioe: InternalOrExternal,
    surface: SurfaceDescription,
) -> BoundaryRecord {
    BoundaryRecord {
        info: EntityInfo::new(id, "IfcRelSpaceBoundary", "2ndLevel"),
        space: space.into(),
        element: element.into(),
        physical_or_virtual: PhysicalOrVirtual::Physical,
        internal_or_external: ioe,
        surface,
    }
}

/// Six envelope boundaries of a box room spanning `[x0, x0+w] × [0, d] × [0, h]`,
/// with the given element for the wall at `x = x0 + w`.
fn box_room(
    space: &str,
    x0: f64,
    w: f64,
    d: f64,
    h: f64,
    envelope: &str,
    slab: &str,
    far_wall_element: &str,
    far_wall_ioe: InternalOrExternal,
) -> Vec<BoundaryRecord> {
    let ext = InternalOrExternal::External;
    vec![
        boundary_record(
            &format!("{space}-floor"),
            space,
            slab,
            ext,
            rect_surface([x0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], w, d),
        ),
        boundary_record(
            &format!("{space}-ceiling"),
            space,
            slab,
            ext,
            rect_surface([x0, 0.0, h], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], w, d),
        ),
        boundary_record(
            &format!("{space}-south"),
            space,
            envelope,
            ext,
            rect_surface([x0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], w, h),
        ),
        boundary_record(
            &format!("{space}-north"),
            space,
            envelope,
            ext,
            rect_surface([x0, d, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], w, h),
        ),
        boundary_record(
            &format!("{space}-west"),
            space,
            envelope,
            ext,
            rect_surface([x0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], d, h),
        ),
        boundary_record(
            &format!("{space}-east"),
            space,
            far_wall_element,
            far_wall_ioe,
            rect_surface([x0 + w, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], d, h),
        ),
    ]
}

#[test]
fn two_rooms_sharing_a_partition_pair_their_internal_boundaries() {
    let internal = InternalOrExternal::Internal;
    let mut boundaries = box_room("S1", 0.0, 4.0, 3.0, 2.5, "ENV", "SLAB", "PART", internal);
    // Room 2 spans x in [4, 8]; its west wall is the partition.
    let mut room2 = box_room("S2", 4.0, 4.0, 3.0, 2.5, "ENV", "SLAB", "ENV", InternalOrExternal::External);
    room2[4] = boundary_record(
        "S2-west",
        "S2",
        "PART",
        internal,
        rect_surface([4.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], 3.0, 2.5),
    );
    boundaries.append(&mut room2);

    let records = ModelRecords {
        info: ModelInfo::default(),
        elements: vec![wall_element("ENV"), wall_element("PART"), slab_element("SLAB")],
        spaces: vec![space_record("S1"), space_record("S2")],
        boundaries,
    };

    let model = resolve_model(&records, &GeometryConfig::default()).unwrap();
    assert!(
        model.report.is_clean(),
        "unexpected defects: {:?}",
        model.report.defects()
    );

    let links: Vec<_> = model
        .arena
        .iter_boundaries()
        .filter_map(|(key, b)| {
            b.corresponding()
                .map(|other| (key, other, b.info.global_id.clone()))
        })
        .collect();

    // Exactly the two partition boundaries are linked, symmetrically.
    assert_eq!(links.len(), 2);
    for (key, other, _) in &links {
        assert_eq!(
            model.arena.boundary(*other).unwrap().corresponding(),
            Some(*key)
        );
    }
    let mut paired: Vec<_> = links.into_iter().map(|(_, _, id)| id).collect();
    paired.sort();
    assert_eq!(paired, vec!["S1-east", "S2-west"]);
}

#[test]
fn hosted_door_attaches_to_its_wall_and_extends_its_area() {
    let mut boundaries = box_room(
        "S1",
        0.0,
        4.0,
        3.0,
        2.5,
        "ENV",
        "SLAB",
        "ENV",
        InternalOrExternal::External,
    );
    // Door opening in the south wall plane (y = 0)
    boundaries.push(boundary_record(
        "S1-door",
        "S1",
        "DOOR",
        InternalOrExternal::External,
        rect_surface([1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0], 0.9, 2.1),
    ));

    let records = ModelRecords {
        info: ModelInfo::default(),
        elements: vec![
            wall_element("ENV"),
            slab_element("SLAB"),
            ElementRecord {
                info: EntityInfo::new("DOOR", "IfcDoor", "Door"),
                class: ElementClass::Door,
                fills_voids: true,
                layer_thicknesses: vec![],
            },
        ],
        spaces: vec![space_record("S1")],
        boundaries,
    };

    let model = resolve_model(&records, &GeometryConfig::default()).unwrap();
    assert!(
        model.report.is_clean(),
        "unexpected defects: {:?}",
        model.report.defects()
    );

    let find = |id: &str| {
        model
            .arena
            .iter_boundaries()
            .find(|(_, b)| b.info.global_id == id)
            .unwrap()
    };
    let (door_key, door) = find("S1-door");
    let (wall_key, wall) = find("S1-south");

    assert!(door.is_hosted());
    assert_eq!(door.parent(), Some(wall_key));
    assert_eq!(wall.inner_boundaries(), &[door_key]);

    // 4 m × 2.5 m wall plus 0.9 m × 2.1 m door, in mm²
    assert_relative_eq!(wall.area(), 10.0e6, epsilon = 1.0);
    assert_relative_eq!(door.area(), 1.89e6, epsilon = 1.0);
    assert_relative_eq!(wall.area_with_hosted(), wall.area() + door.area(), epsilon = 1e-6);
}

#[test]
fn box_enclosure_passes_the_minimum_topology_check() {
    let records = ModelRecords {
        info: ModelInfo::default(),
        elements: vec![wall_element("ENV"), slab_element("SLAB")],
        spaces: vec![space_record("S1")],
        boundaries: box_room(
            "S1",
            0.0,
            4.0,
            3.0,
            2.5,
            "ENV",
            "SLAB",
            "ENV",
            InternalOrExternal::External,
        ),
    };

    let model = resolve_model(&records, &GeometryConfig::default()).unwrap();
    assert_eq!(model.arena.boundary_count(), 6);
    assert!(model.report.is_clean());
}

#[test]
fn three_boundary_space_raises_a_topology_defect() {
    let mut boundaries = box_room(
        "S1",
        0.0,
        4.0,
        3.0,
        2.5,
        "ENV",
        "SLAB",
        "ENV",
        InternalOrExternal::External,
    );
    boundaries.truncate(3);

    let records = ModelRecords {
        info: ModelInfo::default(),
        elements: vec![wall_element("ENV"), slab_element("SLAB")],
        spaces: vec![space_record("S1")],
        boundaries,
    };

    let model = resolve_model(&records, &GeometryConfig::default()).unwrap();
    assert!(model
        .report
        .iter()
        .any(|d| matches!(d, Defect::TooFewBoundaries { count: 3, .. })));
}

#[test]
fn matcher_is_idempotent_over_a_resolved_model() {
    let internal = InternalOrExternal::Internal;
    let mut boundaries = box_room("S1", 0.0, 4.0, 3.0, 2.5, "ENV", "SLAB", "PART", internal);
    let mut room2 = box_room("S2", 4.0, 4.0, 3.0, 2.5, "ENV", "SLAB", "ENV", InternalOrExternal::External);
    room2[4] = boundary_record(
        "S2-west",
        "S2",
        "PART",
        internal,
        rect_surface([4.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], 3.0, 2.5),
    );
    boundaries.append(&mut room2);

    let records = ModelRecords {
        info: ModelInfo::default(),
        elements: vec![wall_element("ENV"), wall_element("PART"), slab_element("SLAB")],
        spaces: vec![space_record("S1"), space_record("S2")],
        boundaries,
    };

    let mut model = resolve_model(&records, &GeometryConfig::default()).unwrap();
    let before: Vec<_> = model
        .arena
        .iter_boundaries()
        .map(|(_, b)| (b.info.global_id.clone(), b.corresponding()))
        .collect();

    let mut second_report = DefectReport::new();
    associate_all(&mut model.arena, &mut second_report).unwrap();

    assert!(second_report.is_clean());
    let after: Vec<_> = model
        .arena
        .iter_boundaries()
        .map(|(_, b)| (b.info.global_id.clone(), b.corresponding()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn space_placement_moves_boundaries_into_global_position() {
    // Boundary loop at the space-local origin; the space itself sits at
    // x = 6 m in the kernel frame.
    let mut space = space_record("S1");
    space.placement = KernelPlacement::from_translation(6.0, 0.0, 0.0);

    let mut boundaries = box_room(
        "S1",
        0.0,
        4.0,
        3.0,
        2.5,
        "ENV",
        "SLAB",
        "ENV",
        InternalOrExternal::External,
    );
    boundaries.truncate(6);

    let records = ModelRecords {
        info: ModelInfo::default(),
        elements: vec![wall_element("ENV"), slab_element("SLAB")],
        spaces: vec![space],
        boundaries,
    };

    let model = resolve_model(&records, &GeometryConfig::default()).unwrap();
    let (_, floor) = model
        .arena
        .iter_boundaries()
        .find(|(_, b)| b.info.global_id == "S1-floor")
        .unwrap();

    // Local centroid (2 m, 1.5 m, 0) shifted by the 6 m space placement
    let centroid = floor.face().centroid();
    assert_relative_eq!(centroid.x, 8000.0, epsilon = 1e-6);
    assert_relative_eq!(centroid.y, 1500.0, epsilon = 1e-6);
}

#[test]
fn summary_export_round_trips_through_json() {
    let internal = InternalOrExternal::Internal;
    let mut boundaries = box_room("S1", 0.0, 4.0, 3.0, 2.5, "ENV", "SLAB", "PART", internal);
    let mut room2 = box_room("S2", 4.0, 4.0, 3.0, 2.5, "ENV", "SLAB", "ENV", InternalOrExternal::External);
    room2[4] = boundary_record(
        "S2-west",
        "S2",
        "PART",
        internal,
        rect_surface([4.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], 3.0, 2.5),
    );
    boundaries.append(&mut room2);

    let records = ModelRecords {
        info: ModelInfo {
            application_identifier: "TestAuthor".into(),
            application_version: "1.2".into(),
        },
        elements: vec![wall_element("ENV"), wall_element("PART"), slab_element("SLAB")],
        spaces: vec![space_record("S1"), space_record("S2")],
        boundaries,
    };

    let model = resolve_model(&records, &GeometryConfig::default()).unwrap();
    let summary = model.summary();
    assert_eq!(summary.application_identifier, "TestAuthor");
    assert_eq!(summary.spaces.len(), 2);

    let json = serde_json::to_string_pretty(&summary).unwrap();
    let back: bem_lite_topology::ModelSummary = serde_json::from_str(&json).unwrap();

    let east = back.spaces[0]
        .boundaries
        .iter()
        .find(|b| b.global_id == "S1-east")
        .unwrap();
    let west = back.spaces[1]
        .boundaries
        .iter()
        .find(|b| b.global_id == "S2-west")
        .unwrap();
    assert_eq!(east.corresponding_boundary.as_deref(), Some("S2-west"));
    assert_eq!(west.corresponding_boundary.as_deref(), Some("S1-east"));
}
