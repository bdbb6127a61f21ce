// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar faces with holes.
//!
//! A face is an ordered outer vertex loop, zero or more inner loops, and the
//! supporting plane. Area and plane are computed once at construction; a
//! face is immutable afterwards, transforms produce new faces.

use nalgebra::{Matrix4, Point3, Unit, Vector3};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::plane::Plane;

/// An ordered, open vertex loop (no repeated closing vertex).
pub type PolyLoop = Vec<Point3<f64>>;

/// A planar face in working coordinates: outer loop, inner loops (holes),
/// supporting plane, and net area.
#[derive(Debug, Clone)]
pub struct PlanarFace {
    outer: PolyLoop,
    inner: SmallVec<[PolyLoop; 2]>,
    plane: Plane,
    area: f64,
}

impl PlanarFace {
    /// Builds a face from cleaned loops. The plane is anchored at the first
    /// outer vertex with the Newell normal of the outer loop; the area is
    /// the outer loop area minus the hole areas.
    pub fn from_loops(outer: PolyLoop, inner: impl IntoIterator<Item = PolyLoop>) -> Result<Self> {
        if outer.len() < 3 {
            return Err(Error::DegenerateLoop(outer.len()));
        }
        let normal = newell_normal(&outer).ok_or(Error::DegenerateNormal)?;
        let plane = Plane {
            point: outer[0],
            normal,
        };

        let inner: SmallVec<[PolyLoop; 2]> = inner.into_iter().collect();
        let mut area = loop_area(&outer);
        for hole in &inner {
            area -= loop_area(hole);
        }

        Ok(Self {
            outer,
            inner,
            plane,
            area: area.abs(),
        })
    }

    pub fn outer(&self) -> &[Point3<f64>] {
        &self.outer
    }

    pub fn inner(&self) -> &[PolyLoop] {
        &self.inner
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn normal(&self) -> Unit<Vector3<f64>> {
        self.plane.normal
    }

    /// Net face area (holes subtracted), working units squared.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Centroid as the vertex average of the outer loop.
    pub fn centroid(&self) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        for p in &self.outer {
            sum += p.coords;
        }
        Point3::from(sum / self.outer.len() as f64)
    }

    /// Returns a copy of this face moved `distance` along its normal.
    pub fn translated_along_normal(&self, distance: f64) -> Self {
        let offset = self.plane.normal.into_inner() * distance;
        let shift = |l: &PolyLoop| l.iter().map(|p| p + offset).collect::<PolyLoop>();

        let mut face = self.clone();
        face.outer = shift(&self.outer);
        face.inner = self.inner.iter().map(|l| shift(l)).collect();
        face.plane.point += offset;
        face
    }

    /// Applies an affine transform and rebuilds plane and area.
    pub fn transformed(&self, matrix: &Matrix4<f64>) -> Result<Self> {
        let map = |l: &PolyLoop| l.iter().map(|p| matrix.transform_point(p)).collect::<PolyLoop>();
        Self::from_loops(map(&self.outer), self.inner.iter().map(|l| map(l)))
    }

    /// Triangulates the face via ear clipping on the dominant-axis
    /// projection. Returns the concatenated vertex list (outer loop, then
    /// each inner loop) and index triples into it.
    pub fn triangulate(&self) -> Result<(Vec<Point3<f64>>, Vec<[usize; 3]>)> {
        let normal = self.plane.normal;
        let abs_n = Vector3::new(normal.x.abs(), normal.y.abs(), normal.z.abs());
        let (ax_u, ax_v) = if abs_n.z >= abs_n.x && abs_n.z >= abs_n.y {
            (0, 1)
        } else if abs_n.y >= abs_n.x {
            (0, 2)
        } else {
            (1, 2)
        };

        let mut coords_2d: Vec<f64> = Vec::new();
        let mut vertices: Vec<Point3<f64>> = Vec::new();
        let mut hole_indices: Vec<usize> = Vec::new();

        let push_loop = |l: &PolyLoop, coords_2d: &mut Vec<f64>, vertices: &mut Vec<Point3<f64>>| {
            for p in l {
                let c = [p.x, p.y, p.z];
                coords_2d.push(c[ax_u]);
                coords_2d.push(c[ax_v]);
                vertices.push(*p);
            }
        };

        push_loop(&self.outer, &mut coords_2d, &mut vertices);
        for hole in &self.inner {
            hole_indices.push(vertices.len());
            push_loop(hole, &mut coords_2d, &mut vertices);
        }

        let indices = earcutr::earcut(&coords_2d, &hole_indices, 2)
            .map_err(|e| Error::Triangulation(format!("{e:?}")))?;

        let triangles = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Ok((vertices, triangles))
    }
}

/// Polygon normal by Newell's method. Works for any planar polygon; `None`
/// for degenerate (zero-area) loops.
fn newell_normal(points: &[Point3<f64>]) -> Option<Unit<Vector3<f64>>> {
    let mut normal = Vector3::zeros();
    let n = points.len();

    for i in 0..n {
        let curr = points[i];
        let next = points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }

    Unit::try_new(normal, 1e-12)
}

/// Enclosed area of a planar loop via the cross-product fan from vertex 0.
fn loop_area(points: &[Point3<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let p0 = points[0];
    let mut total = Vector3::zeros();
    for i in 1..points.len() - 1 {
        let v1 = points[i] - p0;
        let v2 = points[i + 1] - p0;
        total += v1.cross(&v2);
    }

    total.norm() / 2.0
}
