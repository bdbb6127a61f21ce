// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for spaces, elements, and boundaries.
//!
//! The [`ModelArena`] owns all resolved entities. A boundary's identity,
//! geometry, owning space, and related element are fixed at creation; the
//! four relational links (corresponding boundary, parent boundary, inner
//! boundaries, coplanar set) are private and only mutated through arena
//! methods that enforce the symmetry and append-only invariants atomically.
//! An invariant violation is rejected as an [`Error`], never silently
//! overwritten.

use nalgebra::Matrix4;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use bem_lite_geometry::PlanarFace;
use bem_lite_model::{ElementClass, EntityInfo, InternalOrExternal, PhysicalOrVirtual};

use crate::error::{Error, Result};
use crate::keys::{BoundaryKey, ElementKey, SpaceKey};

/// An enclosed volume bounded by space boundaries.
#[derive(Debug, Clone)]
pub struct Space {
    pub info: EntityInfo,
    pub long_name: String,
    /// Kernel placement resolved into the working coordinate space. Every
    /// boundary of the space is positioned relative to it.
    pub placement: Matrix4<f64>,
    boundaries: Vec<BoundaryKey>,
}

impl Space {
    /// Boundaries owned by this space, in materialization order.
    pub fn boundaries(&self) -> &[BoundaryKey] {
        &self.boundaries
    }

    /// Name plus long name, the label used in reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.info.name, self.long_name)
    }
}

/// A physical building component providing boundaries.
#[derive(Debug, Clone)]
pub struct Element {
    pub info: EntityInfo,
    pub class: ElementClass,
    /// `true` when the element fills a void in another element; its
    /// boundaries are hosted.
    pub fills_voids: bool,
    /// Material layer thicknesses in working units.
    pub layer_thicknesses: Vec<f64>,
    provides_boundaries: Vec<BoundaryKey>,
}

impl Element {
    /// All boundaries provided by this element, across every space.
    pub fn provides_boundaries(&self) -> &[BoundaryKey] {
        &self.provides_boundaries
    }

    /// Total thickness of the material layer set, working units.
    pub fn total_thickness(&self) -> f64 {
        self.layer_thicknesses.iter().sum()
    }
}

/// One second-level space boundary with resolved geometry and relational
/// links.
#[derive(Debug, Clone)]
pub struct Boundary {
    pub info: EntityInfo,
    space: SpaceKey,
    element: ElementKey,
    pub physical_or_virtual: PhysicalOrVirtual,
    pub internal_or_external: InternalOrExternal,
    face: PlanarFace,
    area: f64,
    area_with_hosted: f64,
    is_hosted: bool,
    corresponding: Option<BoundaryKey>,
    parent: Option<BoundaryKey>,
    inner_boundaries: Vec<BoundaryKey>,
    coplanar_with: Vec<BoundaryKey>,
}

impl Boundary {
    /// The owning space. Fixed at creation.
    pub fn space(&self) -> SpaceKey {
        self.space
    }

    /// The related building element. Fixed at creation.
    pub fn element(&self) -> ElementKey {
        self.element
    }

    pub fn face(&self) -> &PlanarFace {
        &self.face
    }

    /// Net area of the face, working units squared.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Area including all hosted inner boundaries. Maintained by
    /// [`ModelArena::attach_inner_boundary`].
    pub fn area_with_hosted(&self) -> f64 {
        self.area_with_hosted
    }

    /// `true` when the related element fills a void: this boundary lies
    /// within a larger host boundary.
    pub fn is_hosted(&self) -> bool {
        self.is_hosted
    }

    pub fn is_internal(&self) -> bool {
        self.internal_or_external == InternalOrExternal::Internal
    }

    /// The boundary on the opposite side of the same partition, once the
    /// correspondence pass has run.
    pub fn corresponding(&self) -> Option<BoundaryKey> {
        self.corresponding
    }

    /// The host boundary, set when this boundary is hosted.
    pub fn parent(&self) -> Option<BoundaryKey> {
        self.parent
    }

    /// Boundaries hosted by this one.
    pub fn inner_boundaries(&self) -> &[BoundaryKey] {
        &self.inner_boundaries
    }

    /// Boundaries of the same space sharing this boundary's plane.
    pub fn coplanar_with(&self) -> &[BoundaryKey] {
        &self.coplanar_with
    }
}

/// The central arena owning all resolved entities and their relations.
#[derive(Debug, Default)]
pub struct ModelArena {
    spaces: SlotMap<SpaceKey, Space>,
    elements: SlotMap<ElementKey, Element>,
    boundaries: SlotMap<BoundaryKey, Boundary>,

    space_index: FxHashMap<String, SpaceKey>,
    element_index: FxHashMap<String, ElementKey>,
}

impl ModelArena {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Creation ---

    pub fn add_space(&mut self, info: EntityInfo, long_name: String, placement: Matrix4<f64>) -> SpaceKey {
        let global_id = info.global_id.clone();
        let key = self.spaces.insert(Space {
            info,
            long_name,
            placement,
            boundaries: Vec::new(),
        });
        self.space_index.insert(global_id, key);
        key
    }

    pub fn add_element(
        &mut self,
        info: EntityInfo,
        class: ElementClass,
        fills_voids: bool,
        layer_thicknesses: Vec<f64>,
    ) -> ElementKey {
        let global_id = info.global_id.clone();
        let key = self.elements.insert(Element {
            info,
            class,
            fills_voids,
            layer_thicknesses,
            provides_boundaries: Vec::new(),
        });
        self.element_index.insert(global_id, key);
        key
    }

    /// Creates a boundary with its geometry and fixed relations. The
    /// hosted flag comes from the element's fills-voids status.
    #[allow(clippy::too_many_arguments)]
    pub fn add_boundary(
        &mut self,
        info: EntityInfo,
        space: SpaceKey,
        element: ElementKey,
        physical_or_virtual: PhysicalOrVirtual,
        internal_or_external: InternalOrExternal,
        face: PlanarFace,
    ) -> Result<BoundaryKey> {
        if !self.spaces.contains_key(space) {
            return Err(Error::SpaceNotFound(space));
        }
        let is_hosted = self
            .elements
            .get(element)
            .ok_or(Error::ElementNotFound(element))?
            .fills_voids;

        let area = face.area();
        let key = self.boundaries.insert(Boundary {
            info,
            space,
            element,
            physical_or_virtual,
            internal_or_external,
            face,
            area,
            area_with_hosted: area,
            is_hosted,
            corresponding: None,
            parent: None,
            inner_boundaries: Vec::new(),
            coplanar_with: Vec::new(),
        });

        self.spaces[space].boundaries.push(key);
        self.elements[element].provides_boundaries.push(key);
        Ok(key)
    }

    // --- Lookup ---

    pub fn space(&self, key: SpaceKey) -> Option<&Space> {
        self.spaces.get(key)
    }

    pub fn element(&self, key: ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    pub fn boundary(&self, key: BoundaryKey) -> Option<&Boundary> {
        self.boundaries.get(key)
    }

    pub fn space_by_global_id(&self, global_id: &str) -> Option<SpaceKey> {
        self.space_index.get(global_id).copied()
    }

    pub fn element_by_global_id(&self, global_id: &str) -> Option<ElementKey> {
        self.element_index.get(global_id).copied()
    }

    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Space keys in materialization order.
    pub fn space_keys(&self) -> Vec<SpaceKey> {
        self.spaces.keys().collect()
    }

    /// Boundary keys in materialization order.
    pub fn boundary_keys(&self) -> Vec<BoundaryKey> {
        self.boundaries.keys().collect()
    }

    pub fn iter_spaces(&self) -> impl Iterator<Item = (SpaceKey, &Space)> {
        self.spaces.iter()
    }

    pub fn iter_boundaries(&self) -> impl Iterator<Item = (BoundaryKey, &Boundary)> {
        self.boundaries.iter()
    }

    // --- Relational mutators (append-only, invariant-enforcing) ---

    /// Registers a symmetric coplanarity link between two boundaries.
    /// Rejects self-links and duplicates: each unordered pair must be
    /// processed exactly once.
    pub fn add_coplanar_link(&mut self, a: BoundaryKey, b: BoundaryKey) -> Result<()> {
        if a == b {
            return Err(Error::SelfLink(a));
        }
        if !self.boundaries.contains_key(a) {
            return Err(Error::BoundaryNotFound(a));
        }
        if !self.boundaries.contains_key(b) {
            return Err(Error::BoundaryNotFound(b));
        }
        if self.boundaries[a].coplanar_with.contains(&b) {
            return Err(Error::DuplicateCoplanarLink(a, b));
        }

        self.boundaries[a].coplanar_with.push(b);
        self.boundaries[b].coplanar_with.push(a);
        Ok(())
    }

    /// Attaches a hosted boundary to its host: sets the parent link,
    /// appends to the host's inner boundaries, and recomputes the host's
    /// hosted-inclusive area before returning.
    pub fn attach_inner_boundary(&mut self, host: BoundaryKey, hosted: BoundaryKey) -> Result<()> {
        if host == hosted {
            return Err(Error::SelfLink(host));
        }
        if !self.boundaries.contains_key(host) {
            return Err(Error::BoundaryNotFound(host));
        }
        if !self.boundaries.contains_key(hosted) {
            return Err(Error::BoundaryNotFound(hosted));
        }
        if self.boundaries[host].is_hosted {
            return Err(Error::HostedHost(host));
        }
        if self.boundaries[hosted].parent.is_some() {
            return Err(Error::AlreadyHosted(hosted));
        }
        if self.boundaries[host].space != self.boundaries[hosted].space {
            return Err(Error::CrossSpaceHosting(host, hosted));
        }

        self.boundaries[hosted].parent = Some(host);
        self.boundaries[host].inner_boundaries.push(hosted);
        self.recompute_area_with_hosted(host)?;
        Ok(())
    }

    /// Sets the corresponding-boundary link on both boundaries in one
    /// atomic step. Both must be internal, unpaired, and in different
    /// spaces.
    pub fn pair_corresponding(&mut self, a: BoundaryKey, b: BoundaryKey) -> Result<()> {
        if a == b {
            return Err(Error::SelfLink(a));
        }
        if !self.boundaries.contains_key(a) {
            return Err(Error::BoundaryNotFound(a));
        }
        if !self.boundaries.contains_key(b) {
            return Err(Error::BoundaryNotFound(b));
        }
        if !self.boundaries[a].is_internal() {
            return Err(Error::NotInternal(a));
        }
        if !self.boundaries[b].is_internal() {
            return Err(Error::NotInternal(b));
        }
        if self.boundaries[a].corresponding.is_some() {
            return Err(Error::AlreadyPaired(a));
        }
        if self.boundaries[b].corresponding.is_some() {
            return Err(Error::AlreadyPaired(b));
        }
        if self.boundaries[a].space == self.boundaries[b].space {
            return Err(Error::SameSpacePairing(a, b));
        }

        self.boundaries[a].corresponding = Some(b);
        self.boundaries[b].corresponding = Some(a);
        Ok(())
    }

    /// Re-derives a boundary's hosted-inclusive area from its current inner
    /// boundaries.
    pub fn recompute_area_with_hosted(&mut self, key: BoundaryKey) -> Result<f64> {
        let inner = self
            .boundaries
            .get(key)
            .ok_or(Error::BoundaryNotFound(key))?
            .inner_boundaries
            .clone();

        let mut area = self.boundaries[key].area;
        for hosted in inner {
            area += self
                .boundaries
                .get(hosted)
                .ok_or(Error::BoundaryNotFound(hosted))?
                .area;
        }

        self.boundaries[key].area_with_hosted = area;
        Ok(area)
    }
}
