//! # Solids
//!
//! The object-in-world of the assembly tree: every node owns a
//! local-to-world pose and is either a leaf (primitive, lathe) or a
//! compound. Ownership is exclusive, so a slave belongs to exactly one
//! assembly.

use crate::compound::Compound;
use crate::lathe::Lathe;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use glam::DAffine3;
use serde::{Deserialize, Serialize};
use solid_kernel::Primitive;
use stacker::maybe_grow;

/// A node of the assembly tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    /// Analytic leaf.
    Primitive(Primitive),
    /// Union assembly of other solids.
    Compound(Compound),
    /// Surface of revolution leaf.
    Lathe(Lathe),
}

impl Solid {
    /// Premultiplies this node's pose by `map` and propagates the motion to
    /// every descendant.
    pub fn move_alone(&mut self, map: DAffine3) -> &mut Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Solid::Primitive(primitive) => {
                primitive.move_alone(map);
            }
            Solid::Compound(compound) => {
                compound.move_alone(map);
            }
            Solid::Lathe(lathe) => {
                lathe.move_alone(map);
            }
        });
        self
    }

    /// Tags every leaf under this node with `tag`.
    pub fn colored(&mut self, tag: &str) -> &mut Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Solid::Primitive(primitive) => {
                primitive.colored(tag);
            }
            Solid::Compound(compound) => {
                compound.colored(tag);
            }
            Solid::Lathe(lathe) => {
                lathe.colored(tag);
            }
        });
        self
    }

    /// Local-to-world map of this node.
    pub fn map(&self) -> DAffine3 {
        match self {
            Solid::Primitive(primitive) => primitive.map(),
            Solid::Compound(compound) => compound.map(),
            Solid::Lathe(lathe) => lathe.map(),
        }
    }

    /// Color tag of a leaf; compounds carry none.
    pub fn color(&self) -> Option<&str> {
        match self {
            Solid::Primitive(primitive) => primitive.color(),
            Solid::Compound(_) => None,
            Solid::Lathe(lathe) => lathe.color(),
        }
    }

    /// Whether this node has no slaves.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Solid::Compound(_))
    }

    /// The primitive, if this is one.
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Solid::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    /// The compound, if this is one.
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Solid::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    /// The lathe, if this is one.
    pub fn as_lathe(&self) -> Option<&Lathe> {
        match self {
            Solid::Lathe(lathe) => Some(lathe),
            _ => None,
        }
    }
}

impl From<Primitive> for Solid {
    fn from(primitive: Primitive) -> Self {
        Solid::Primitive(primitive)
    }
}

impl From<Compound> for Solid {
    fn from(compound: Compound) -> Self {
        Solid::Compound(compound)
    }
}

impl From<Lathe> for Solid {
    fn from(lathe: Lathe) -> Self {
        Solid::Lathe(lathe)
    }
}
