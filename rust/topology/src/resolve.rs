// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-space topology resolution.
//!
//! Runs after every boundary of the space has geometry. Three steps:
//! pairwise coplanarity over all boundaries of the space, hosting
//! resolution for boundaries whose element fills a void, and detection of
//! split or gap-leaving coplanar groups among the remaining boundaries.
//! Ambiguous cases are reported, never guessed.

use bem_lite_geometry::GeometryConfig;

use crate::arena::ModelArena;
use crate::defect::{Defect, DefectReport};
use crate::error::{Error, Result};
use crate::keys::{BoundaryKey, SpaceKey};

/// Minimal boundary count of a plausible enclosure: up to 3 vertical plus
/// 2 horizontal surfaces. Fewer signals a modeling or reconstruction
/// defect.
pub const MIN_SPACE_BOUNDARIES: usize = 5;

pub fn resolve_space_topology(
    arena: &mut ModelArena,
    space: SpaceKey,
    config: &GeometryConfig,
    report: &mut DefectReport,
) -> Result<()> {
    let (space_id, keys) = {
        let s = arena.space(space).ok_or(Error::SpaceNotFound(space))?;
        (s.info.global_id.clone(), s.boundaries().to_vec())
    };

    if keys.len() < MIN_SPACE_BOUNDARIES {
        tracing::warn!(space = %space_id, count = keys.len(), "space has too few boundaries");
        report.record(Defect::TooFewBoundaries {
            space: space_id.clone(),
            count: keys.len(),
        });
    }

    register_coplanar_pairs(arena, &keys, config)?;
    resolve_hosting(arena, &keys, report)?;
    detect_gaps(arena, &keys, report)?;

    tracing::debug!(space = %space_id, boundaries = keys.len(), "resolved space topology");
    Ok(())
}

/// Tests every unordered boundary pair of the space for plane coincidence.
/// O(n²), with n the space's boundary count.
fn register_coplanar_pairs(
    arena: &mut ModelArena,
    keys: &[BoundaryKey],
    config: &GeometryConfig,
) -> Result<()> {
    for i in 0..keys.len() {
        for j in i + 1..keys.len() {
            let coincident = {
                let a = arena
                    .boundary(keys[i])
                    .ok_or(Error::BoundaryNotFound(keys[i]))?;
                let b = arena
                    .boundary(keys[j])
                    .ok_or(Error::BoundaryNotFound(keys[j]))?;
                a.face().plane().is_coincident(
                    b.face().plane(),
                    config.linear_tolerance,
                    config.angular_tolerance,
                )
            };
            if coincident {
                arena.add_coplanar_link(keys[i], keys[j])?;
            }
        }
    }
    Ok(())
}

/// Attaches each hosted boundary to its single coplanar host. Zero or
/// several candidates leave the boundary unattached with a defect.
fn resolve_hosting(
    arena: &mut ModelArena,
    keys: &[BoundaryKey],
    report: &mut DefectReport,
) -> Result<()> {
    for &key in keys {
        let (global_id, hosted, coplanar) = {
            let b = arena.boundary(key).ok_or(Error::BoundaryNotFound(key))?;
            (
                b.info.global_id.clone(),
                b.is_hosted(),
                b.coplanar_with().to_vec(),
            )
        };
        if !hosted {
            continue;
        }

        match coplanar.as_slice() {
            [] => {
                tracing::warn!(boundary = %global_id, "hosted boundary has no coplanar host");
                report.record(Defect::MissingHost {
                    boundary: global_id,
                });
            }
            [host] => {
                if let Err(err) = arena.attach_inner_boundary(*host, key) {
                    tracing::warn!(boundary = %global_id, error = %err, "host candidate rejected");
                    report.record(Defect::InvalidHost {
                        boundary: global_id,
                        reason: err.to_string(),
                    });
                }
            }
            candidates => {
                tracing::warn!(
                    boundary = %global_id,
                    candidates = candidates.len(),
                    "hosted boundary has several coplanar candidates"
                );
                report.record(Defect::AmbiguousHost {
                    boundary: global_id,
                    candidates: candidates.len(),
                });
            }
        }
    }
    Ok(())
}

/// Flags coplanar groups among non-hosted boundaries. A single non-hosted
/// peer marks a split boundary pair whose merge is left to follow-up;
/// several peers are reported as an unresolved gap case.
fn detect_gaps(
    arena: &ModelArena,
    keys: &[BoundaryKey],
    report: &mut DefectReport,
) -> Result<()> {
    for &key in keys {
        let b = arena.boundary(key).ok_or(Error::BoundaryNotFound(key))?;
        if b.is_hosted() {
            continue;
        }

        let peers: Vec<BoundaryKey> = b
            .coplanar_with()
            .iter()
            .copied()
            .filter(|&peer| {
                arena
                    .boundary(peer)
                    .is_some_and(|p| !p.is_hosted())
            })
            .collect();

        match peers.as_slice() {
            [] => {}
            [peer] => {
                // Each split pair is reported once, from its smaller key.
                if key < *peer {
                    let peer_id = arena
                        .boundary(*peer)
                        .ok_or(Error::BoundaryNotFound(*peer))?
                        .info
                        .global_id
                        .clone();
                    report.record(Defect::SplitBoundaryPair {
                        boundary: b.info.global_id.clone(),
                        peer: peer_id,
                    });
                }
            }
            many => {
                report.record(Defect::UnresolvedGap {
                    boundary: b.info.global_id.clone(),
                    peers: many.len(),
                });
            }
        }
    }
    Ok(())
}
