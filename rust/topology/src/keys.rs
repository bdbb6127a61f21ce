// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena key types.
//!
//! Keys are created by `slotmap::SlotMap` and stay valid for the lifetime of
//! the arena (no entity is removed during normal processing).

use slotmap::new_key_type;

new_key_type! {
    /// Key for a space (an enclosed volume).
    pub struct SpaceKey;

    /// Key for a building element (wall, slab, door, window, …).
    pub struct ElementKey;

    /// Key for a second-level space boundary.
    pub struct BoundaryKey;
}
