// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement resolution.
//!
//! Two frames feed the working coordinate space: the local basis of a
//! boundary surface (origin + axis + reference direction) and the geometric
//! kernel's native placement of a space (a column-major 3×4 matrix).
//! Rotations are unit-free; only translations carry the model→working unit
//! scale.

use nalgebra::{Matrix4, Vector3};

use bem_lite_model::{AxisPlacement, KernelPlacement};

/// Builds the local→working transform of a surface basis.
///
/// The in-plane reference direction is the first basis vector, the plane
/// normal (`axis`) the third; the second is their cross product
/// `axis × ref_direction`, giving a right-handed orthonormal frame laid out
/// as rotation columns. The basis origin is scaled into working units.
pub fn basis_transform(basis: &AxisPlacement, unit_scale: f64) -> Matrix4<f64> {
    let v1 = Vector3::from(basis.ref_direction).normalize();
    let v3 = Vector3::from(basis.axis).normalize();
    let v2 = v3.cross(&v1);
    let location = Vector3::from(basis.location) * unit_scale;

    let mut matrix = Matrix4::identity();
    matrix.fixed_view_mut::<3, 1>(0, 0).copy_from(&v1);
    matrix.fixed_view_mut::<3, 1>(0, 1).copy_from(&v2);
    matrix.fixed_view_mut::<3, 1>(0, 2).copy_from(&v3);
    matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&location);
    matrix
}

/// Converts a kernel-native placement into a working-space transform.
///
/// The kernel delivers the 3×4 matrix flattened column-major, transposed
/// relative to the row-major target layout; this reads each row out of the
/// column-major data and scales only the translation components by the unit
/// factor.
pub fn placement_from_kernel(kernel: &KernelPlacement, unit_scale: f64) -> Matrix4<f64> {
    let d = &kernel.0;

    let mut matrix = Matrix4::identity();
    for row in 0..3 {
        matrix[(row, 0)] = d[row];
        matrix[(row, 1)] = d[row + 3];
        matrix[(row, 2)] = d[row + 6];
        matrix[(row, 3)] = d[row + 9] * unit_scale;
    }
    matrix
}
