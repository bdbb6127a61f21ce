// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification vocabulary for boundaries and elements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A classification code that is not part of the schema vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification code: {0}")]
pub struct UnknownCode(pub String);

/// Whether a boundary separates two interior spaces or faces the exterior
/// (and which exterior medium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternalOrExternal {
    Internal,
    External,
    ExternalEarth,
    ExternalWater,
    ExternalFire,
    NotDefined,
}

impl InternalOrExternal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "INTERNAL",
            Self::External => "EXTERNAL",
            Self::ExternalEarth => "EXTERNAL_EARTH",
            Self::ExternalWater => "EXTERNAL_WATER",
            Self::ExternalFire => "EXTERNAL_FIRE",
            Self::NotDefined => "NOTDEFINED",
        }
    }
}

impl FromStr for InternalOrExternal {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INTERNAL" => Ok(Self::Internal),
            "EXTERNAL" => Ok(Self::External),
            "EXTERNAL_EARTH" => Ok(Self::ExternalEarth),
            "EXTERNAL_WATER" => Ok(Self::ExternalWater),
            "EXTERNAL_FIRE" => Ok(Self::ExternalFire),
            "NOTDEFINED" => Ok(Self::NotDefined),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

impl fmt::Display for InternalOrExternal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a boundary is backed by a physical element or is a virtual
/// separation (e.g. an open-plan space split).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhysicalOrVirtual {
    Physical,
    Virtual,
    NotDefined,
}

impl PhysicalOrVirtual {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "PHYSICAL",
            Self::Virtual => "VIRTUAL",
            Self::NotDefined => "NOTDEFINED",
        }
    }
}

impl FromStr for PhysicalOrVirtual {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHYSICAL" => Ok(Self::Physical),
            "VIRTUAL" => Ok(Self::Virtual),
            "NOTDEFINED" => Ok(Self::NotDefined),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

impl fmt::Display for PhysicalOrVirtual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element kind, used for display-color labeling and nothing else in the
/// core pipeline (hosting eligibility comes from the fills-voids flag, not
/// from the class).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementClass {
    Wall,
    Window,
    Slab,
    Roof,
    Door,
    /// Any class outside the known vocabulary; carried verbatim.
    Other(String),
}

impl ElementClass {
    /// Parses a source type tag. Unknown tags degrade to [`ElementClass::Other`]
    /// rather than failing, so boundaries of exotic elements still resolve.
    pub fn from_ifc_type(tag: &str) -> Self {
        match tag {
            "IfcWall" | "IfcWallStandardCase" => Self::Wall,
            "IfcWindow" => Self::Window,
            "IfcSlab" => Self::Slab,
            "IfcRoof" => Self::Roof,
            "IfcDoor" => Self::Door,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display color (RGB in 0..=1) per element class. Labeling only.
    pub fn display_color(&self) -> [f64; 3] {
        match self {
            Self::Wall => [0.7, 0.3, 0.0],
            Self::Window => [0.0, 0.7, 1.0],
            Self::Slab => [0.7, 0.7, 0.5],
            Self::Roof => [0.0, 0.3, 0.0],
            Self::Door => [1.0, 1.0, 1.0],
            Self::Other(_) => [0.0, 0.0, 0.0],
        }
    }
}
