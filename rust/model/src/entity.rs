// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared identity attributes of model entities.

use serde::{Deserialize, Serialize};

/// Identity attributes common to every model entity (space, element,
/// boundary). Composed by value into the concrete record kinds instead of
/// sitting at the root of an inheritance hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Globally unique identifier from the source model.
    pub global_id: String,
    /// Source entity type tag, e.g. `"IfcWall"` or `"IfcRelSpaceBoundary"`.
    pub ifc_type: String,
    pub name: String,
    pub description: Option<String>,
}

impl EntityInfo {
    pub fn new(global_id: impl Into<String>, ifc_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            global_id: global_id.into(),
            ifc_type: ifc_type.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Display label: entity id plus name, the way interactive viewers tag
    /// model objects.
    pub fn label(&self) -> String {
        format!("{} {}", self.global_id, self.name)
    }
}
