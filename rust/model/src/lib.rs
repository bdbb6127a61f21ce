// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # BEM-Lite Model
//!
//! Typed records describing the building-model input consumed by the
//! space-boundary resolver: spaces, elements, and second-level space
//! boundaries with their raw surface descriptions.
//!
//! Parsing the source file format is out of scope here: an external
//! collaborator materializes these records and hands them over fully typed.
//! All coordinates in this crate are expressed in model units (meters);
//! conversion into the working coordinate space happens downstream.

pub mod classify;
pub mod entity;
pub mod records;
pub mod surface;

pub use classify::{ElementClass, InternalOrExternal, PhysicalOrVirtual, UnknownCode};
pub use entity::EntityInfo;
pub use records::{BoundaryRecord, ElementRecord, ModelInfo, ModelRecords, SpaceRecord};
pub use surface::{AxisPlacement, BrepFace, KernelPlacement, SurfaceDescription};
