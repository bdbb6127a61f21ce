// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology operations.
//!
//! These are logic errors and invariant violations. Recoverable modeling
//! problems (unbuildable geometry, ambiguous hosts, missing counterparts)
//! are not errors; they are collected as [`crate::Defect`]s.

use crate::keys::{BoundaryKey, ElementKey, SpaceKey};

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during topology operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Space key not found in the arena.
    #[error("space not found: {0:?}")]
    SpaceNotFound(SpaceKey),

    /// Element key not found in the arena.
    #[error("element not found: {0:?}")]
    ElementNotFound(ElementKey),

    /// Boundary key not found in the arena.
    #[error("boundary not found: {0:?}")]
    BoundaryNotFound(BoundaryKey),

    /// A record referenced a space global id that was never materialized.
    #[error("unknown space reference: {0}")]
    UnknownSpaceRef(String),

    /// A record referenced an element global id that was never materialized.
    #[error("unknown element reference: {0}")]
    UnknownElementRef(String),

    /// A boundary cannot be linked to itself.
    #[error("boundary {0:?} cannot be linked to itself")]
    SelfLink(BoundaryKey),

    /// The coplanar pair was already registered.
    #[error("coplanar link between {0:?} and {1:?} already registered")]
    DuplicateCoplanarLink(BoundaryKey, BoundaryKey),

    /// The boundary already has a corresponding boundary; pairing again
    /// would silently overwrite an established link.
    #[error("boundary {0:?} already has a corresponding boundary")]
    AlreadyPaired(BoundaryKey),

    /// Corresponding boundaries must belong to different spaces.
    #[error("boundaries {0:?} and {1:?} belong to the same space")]
    SameSpacePairing(BoundaryKey, BoundaryKey),

    /// Corresponding links are only ever set on internal boundaries.
    #[error("boundary {0:?} is not internal")]
    NotInternal(BoundaryKey),

    /// A host boundary must not itself be hosted.
    #[error("host boundary {0:?} is itself hosted")]
    HostedHost(BoundaryKey),

    /// The hosted boundary already has a parent.
    #[error("boundary {0:?} already has a parent boundary")]
    AlreadyHosted(BoundaryKey),

    /// Host and hosted boundary must belong to the same space.
    #[error("host {0:?} and hosted boundary {1:?} belong to different spaces")]
    CrossSpaceHosting(BoundaryKey, BoundaryKey),
}
