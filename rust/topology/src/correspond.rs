// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Corresponding-boundary matching.
//!
//! An internal boundary and the boundary on the opposite side of the same
//! partition are provided by the same element but belong to different
//! spaces. The matcher runs once over the whole model, after every space's
//! topology pass: candidates are the element's other boundaries, excluding
//! anything already paired and anything in the boundary's own space. With
//! several candidates the nearest centroid wins.

use crate::arena::ModelArena;
use crate::defect::{Defect, DefectReport};
use crate::error::{Error, Result};
use crate::keys::BoundaryKey;

/// Upper bound on the centroid distance of a real corresponding pair: no
/// physical element spans 10 m across. Working units.
pub const MAX_PAIRING_DISTANCE: f64 = 10_000.0;

/// Pairs every eligible boundary in materialization order. Already-paired
/// boundaries are skipped, so a second run is a no-op.
pub fn associate_all(arena: &mut ModelArena, report: &mut DefectReport) -> Result<()> {
    for key in arena.boundary_keys() {
        associate_corresponding(arena, key, report)?;
    }
    Ok(())
}

/// Finds and sets the corresponding boundary for `key`, if it is internal
/// and still unpaired. The link is set symmetrically on both boundaries in
/// one atomic step.
pub fn associate_corresponding(
    arena: &mut ModelArena,
    key: BoundaryKey,
    report: &mut DefectReport,
) -> Result<()> {
    let (global_id, element, space, centroid) = {
        let b = arena.boundary(key).ok_or(Error::BoundaryNotFound(key))?;
        if !b.is_internal() || b.corresponding().is_some() {
            return Ok(());
        }
        (
            b.info.global_id.clone(),
            b.element(),
            b.space(),
            b.face().centroid(),
        )
    };

    let candidates: Vec<BoundaryKey> = arena
        .element(element)
        .ok_or(Error::ElementNotFound(element))?
        .provides_boundaries()
        .iter()
        .copied()
        .filter(|&other| other != key)
        .filter(|&other| {
            arena
                .boundary(other)
                .is_some_and(|b| b.corresponding().is_none() && b.space() != space)
        })
        .collect();

    let chosen = match candidates.as_slice() {
        [] => None,
        [only] => Some(*only),
        several => {
            let mut min_distance = MAX_PAIRING_DISTANCE;
            let mut nearest = None;
            for &candidate in several {
                let distance = arena
                    .boundary(candidate)
                    .ok_or(Error::BoundaryNotFound(candidate))?
                    .face()
                    .centroid()
                    .coords
                    .metric_distance(&centroid.coords);
                if distance < min_distance {
                    min_distance = distance;
                    nearest = Some(candidate);
                }
            }
            nearest
        }
    };

    let Some(chosen) = chosen else {
        tracing::warn!(boundary = %global_id, "internal boundary has no corresponding candidate");
        report.record(Defect::NoCorrespondingCandidate {
            boundary: global_id,
        });
        return Ok(());
    };

    if let Err(err) = arena.pair_corresponding(key, chosen) {
        tracing::warn!(boundary = %global_id, error = %err, "corresponding candidate rejected");
        report.record(Defect::InvalidCorrespondence {
            boundary: global_id,
            reason: err.to_string(),
        });
    }

    Ok(())
}
