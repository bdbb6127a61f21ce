// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Modeling-defect reporting.
//!
//! Defects are recoverable: the affected boundary or space is skipped or
//! left partially resolved, the rest of the run continues, and the caller
//! gets the full list for manual follow-up. Entities are referenced by
//! global id so the report survives export.

use serde::{Deserialize, Serialize};

/// One recoverable modeling problem found during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Defect {
    /// No construction tier could turn the surface into a face; the
    /// boundary carries no geometry and was skipped entirely.
    GeometryConstruction { boundary: String, reason: String },

    /// A space resolved to fewer boundaries than the minimal enclosure
    /// (3 vertical + 2 horizontal surfaces).
    TooFewBoundaries { space: String, count: usize },

    /// A hosted boundary has no coplanar boundary to attach to.
    MissingHost { boundary: String },

    /// A hosted boundary has more than one coplanar candidate; no parent is
    /// assigned rather than guessing.
    AmbiguousHost { boundary: String, candidates: usize },

    /// The single coplanar candidate of a hosted boundary violates the
    /// hosting invariants (e.g. it is itself hosted).
    InvalidHost { boundary: String, reason: String },

    /// Two non-hosted boundaries share a plane: a split boundary pair that
    /// should be merged at their nearest vertices. Detection only.
    SplitBoundaryPair { boundary: String, peer: String },

    /// A non-hosted boundary shares its plane with several non-hosted
    /// peers; left unresolved.
    UnresolvedGap { boundary: String, peers: usize },

    /// An internal boundary has no candidate for its corresponding pair.
    NoCorrespondingCandidate { boundary: String },

    /// The selected corresponding candidate violates the pairing
    /// invariants; the boundary stays unpaired.
    InvalidCorrespondence { boundary: String, reason: String },
}

/// Ordered aggregation of every defect found during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefectReport {
    defects: Vec<Defect>,
}

impl DefectReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, defect: Defect) {
        self.defects.push(defect);
    }

    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.defects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Defect> {
        self.defects.iter()
    }

    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }
}
