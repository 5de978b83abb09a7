//! # Composite Assemblies
//!
//! A `Compound` is an object-in-world whose first CSG operation is the
//! union of its direct slaves. The union's slave list is the authoritative
//! set of parts; named slaves are additionally reachable by name.
//!
//! ## Invariants
//!
//! - `operations[0]` is always the union, and it is the only union
//! - Slave order is the construction order
//! - Each name maps to exactly one index of the union slave list
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use solid_compound::{Compound, SlaveEntry};
//! use solid_kernel::Primitive;
//!
//! let tip = Primitive::cone(DVec3::ZERO, DVec3::Z, 0.2, 0.0).unwrap();
//! let shaft = Primitive::cylinder(-DVec3::Z, DVec3::ZERO, 0.1).unwrap();
//! let arrow = Compound::new(vec![
//!     SlaveEntry::named("tip", tip),
//!     SlaveEntry::anonymous(shaft),
//! ])
//! .unwrap();
//! assert_eq!(arrow.len(), 2);
//! assert!(arrow.slave("tip").is_some());
//! ```

use crate::error::{CompoundError, CompoundResult};
use crate::solid::Solid;
use glam::DAffine3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// CSG operation types.
///
/// Only `Union` is acted upon; the others are bookkeeping for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CsgKind {
    /// Union operation: A ∪ B
    Union,
    /// Intersection operation: A ∩ B
    Intersection,
    /// Difference operation: A - B
    Difference,
}

impl CsgKind {
    /// Returns the renderer keyword of the operation.
    pub fn keyword(&self) -> &'static str {
        match self {
            CsgKind::Union => "union",
            CsgKind::Intersection => "intersection",
            CsgKind::Difference => "difference",
        }
    }
}

/// A CSG keyword applied to an ordered list of slaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsgOperation {
    kind: CsgKind,
    slaves: Vec<Solid>,
}

impl CsgOperation {
    /// The operation kind.
    pub fn kind(&self) -> CsgKind {
        self.kind
    }

    /// The operands, in order.
    pub fn slaves(&self) -> &[Solid] {
        &self.slaves
    }
}

/// One entry of a construction list: a bare solid or a named one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlaveEntry {
    /// Reachable only through the slave list.
    Anonymous(Solid),
    /// Reachable through the slave list and by name.
    Named(String, Solid),
}

impl SlaveEntry {
    /// Creates an anonymous entry.
    pub fn anonymous(solid: impl Into<Solid>) -> Self {
        SlaveEntry::Anonymous(solid.into())
    }

    /// Creates a named entry.
    pub fn named(name: impl Into<String>, solid: impl Into<Solid>) -> Self {
        SlaveEntry::Named(name.into(), solid.into())
    }
}

impl From<Solid> for SlaveEntry {
    fn from(solid: Solid) -> Self {
        SlaveEntry::Anonymous(solid)
    }
}

impl From<solid_kernel::Primitive> for SlaveEntry {
    fn from(primitive: solid_kernel::Primitive) -> Self {
        SlaveEntry::Anonymous(primitive.into())
    }
}

/// A union assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    map: DAffine3,
    operations: Vec<CsgOperation>,
    names: BTreeMap<String, usize>,
    #[serde(skip)]
    staged: Vec<SlaveEntry>,
}

impl Default for Compound {
    fn default() -> Self {
        Self {
            map: DAffine3::IDENTITY,
            operations: vec![CsgOperation {
                kind: CsgKind::Union,
                slaves: Vec::new(),
            }],
            names: BTreeMap::new(),
            staged: Vec::new(),
        }
    }
}

impl Compound {
    /// Builds the union of `entries`, in order.
    ///
    /// # Errors
    ///
    /// `MalformedInput` when a named entry has an empty name or repeats an
    /// earlier name.
    pub fn new(entries: Vec<SlaveEntry>) -> CompoundResult<Self> {
        let mut compound = Self::default();
        compound.assign(entries)?;
        Ok(compound)
    }

    /// Queues an entry for `build_from_slaves`.
    pub fn stage(&mut self, entry: impl Into<SlaveEntry>) -> &mut Self {
        self.staged.push(entry.into());
        self
    }

    /// Number of entries waiting for `build_from_slaves`.
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Replaces the union slave list with the staged entries.
    ///
    /// The staging list is consumed; a second call with nothing staged
    /// empties the union.
    pub fn build_from_slaves(&mut self) -> CompoundResult<&mut Self> {
        let entries = std::mem::take(&mut self.staged);
        self.assign(entries)?;
        Ok(self)
    }

    fn assign(&mut self, entries: Vec<SlaveEntry>) -> CompoundResult<()> {
        let mut names = BTreeMap::new();
        let mut slaves = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                SlaveEntry::Anonymous(solid) => slaves.push(solid),
                SlaveEntry::Named(name, solid) => {
                    if name.is_empty() {
                        return Err(CompoundError::malformed(format!(
                            "slave entry {index} has an empty name"
                        )));
                    }
                    if names.insert(name.clone(), index).is_some() {
                        return Err(CompoundError::malformed(format!(
                            "slave name '{name}' is used twice"
                        )));
                    }
                    slaves.push(solid);
                }
            }
        }

        log::trace!("compound built with {} slaves ({} named)", slaves.len(), names.len());
        self.names = names;
        self.operations[0].slaves = slaves;
        Ok(())
    }

    /// Records an intersection or difference over `slaves`.
    ///
    /// # Errors
    ///
    /// `MalformedInput` for `CsgKind::Union`: the union is always the first
    /// operation and is built from the slave entries.
    pub fn add_operation(&mut self, kind: CsgKind, slaves: Vec<Solid>) -> CompoundResult<&mut Self> {
        if kind == CsgKind::Union {
            return Err(CompoundError::malformed(
                "a compound holds exactly one union, built from its slaves",
            ));
        }
        self.operations.push(CsgOperation { kind, slaves });
        Ok(self)
    }

    /// All CSG operations, the union first.
    pub fn operations(&self) -> &[CsgOperation] {
        &self.operations
    }

    /// The union's slaves, in construction order.
    pub fn slaves(&self) -> &[Solid] {
        &self.operations[0].slaves
    }

    /// Number of union slaves.
    pub fn len(&self) -> usize {
        self.slaves().len()
    }

    /// Whether the union has no slaves.
    pub fn is_empty(&self) -> bool {
        self.slaves().is_empty()
    }

    /// Slave at `index` of the union.
    pub fn slave_at(&self, index: usize) -> Option<&Solid> {
        self.slaves().get(index)
    }

    /// Slave registered under `name`.
    pub fn slave(&self, name: &str) -> Option<&Solid> {
        self.names.get(name).and_then(|index| self.slave_at(*index))
    }

    /// Mutable access to the slave registered under `name`.
    pub fn slave_mut(&mut self, name: &str) -> Option<&mut Solid> {
        let index = *self.names.get(name)?;
        self.operations[0].slaves.get_mut(index)
    }

    /// Registered names, sorted.
    pub fn slave_names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Local-to-world map of the assembly node.
    pub fn map(&self) -> DAffine3 {
        self.map
    }

    /// Premultiplies the assembly pose by `map`, then moves every slave of
    /// every operation by the same map.
    pub fn move_alone(&mut self, map: DAffine3) -> &mut Self {
        self.map = map * self.map;
        for operation in &mut self.operations {
            for slave in &mut operation.slaves {
                slave.move_alone(map);
            }
        }
        self
    }

    /// Tags every leaf reachable through the operations with `tag`.
    pub fn colored(&mut self, tag: &str) -> &mut Self {
        for operation in &mut self.operations {
            for slave in &mut operation.slaves {
                slave.colored(tag);
            }
        }
        self
    }

    /// Leaves of the union tree, depth first.
    pub fn leaves(&self) -> Vec<&Solid> {
        let mut leaves = Vec::new();
        collect_leaves(self, &mut leaves);
        leaves
    }
}

fn collect_leaves<'a>(compound: &'a Compound, leaves: &mut Vec<&'a Solid>) {
    for slave in compound.slaves() {
        match slave {
            Solid::Compound(inner) => collect_leaves(inner, leaves),
            leaf => leaves.push(leaf),
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compound with {} slaves", self.len())?;
        if !self.names.is_empty() {
            let names: Vec<&str> = self.slave_names().collect();
            write!(f, " [{}]", names.join(", "))?;
        }
        Ok(())
    }
}
