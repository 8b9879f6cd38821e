//! Scene value types handed to the simulator.

use foray_core::{ArenaId, ItemKind, Rgb, Vec3};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;

/// One placeable item entry: a kind plus per-object attribute lists.
///
/// The number of objects is implied by whichever lists are populated;
/// lists are independent and kind-dependent (walls carry only colors,
/// goals only positions, the agent a position and a heading).
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// What the simulator should spawn.
    pub kind: ItemKind,
    /// Positions, one per object.
    pub positions: SmallVec<[Vec3; 1]>,
    /// Headings in degrees.
    pub rotations: SmallVec<[f64; 1]>,
    /// Sizes. Empty lets the simulator choose.
    pub sizes: SmallVec<[Vec3; 1]>,
    /// Colors.
    pub colors: SmallVec<[Rgb; 1]>,
}

impl Item {
    /// An item of `kind` with no attributes.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            positions: SmallVec::new(),
            rotations: SmallVec::new(),
            sizes: SmallVec::new(),
            colors: SmallVec::new(),
        }
    }

    /// Number of objects described, i.e. the longest attribute list.
    pub fn count(&self) -> usize {
        self.positions
            .len()
            .max(self.rotations.len())
            .max(self.sizes.len())
            .max(self.colors.len())
    }
}

/// One simulated arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Arena {
    /// Steps before the episode times out.
    pub time_limit: u32,
    /// Items in spawn order.
    pub items: Vec<Item>,
}

impl Arena {
    /// An empty arena with the given time limit.
    pub fn new(time_limit: u32) -> Self {
        Self {
            time_limit,
            items: Vec::new(),
        }
    }

    /// First item of `kind`, if any.
    pub fn item(&self, kind: ItemKind) -> Option<&Item> {
        self.items.iter().find(|item| item.kind == kind)
    }
}

/// A full scene: arenas in id order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    arenas: IndexMap<ArenaId, Arena>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the arena at `id`.
    pub fn insert(&mut self, id: ArenaId, arena: Arena) -> Option<Arena> {
        self.arenas.insert(id, arena)
    }

    /// The arena at `id`.
    pub fn arena(&self, id: ArenaId) -> Option<&Arena> {
        self.arenas.get(&id)
    }

    /// Number of arenas.
    pub fn len(&self) -> usize {
        self.arenas.len()
    }

    /// Whether the scene has no arenas.
    pub fn is_empty(&self) -> bool {
        self.arenas.is_empty()
    }

    /// Arenas in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ArenaId, &Arena)> {
        self.arenas.iter().map(|(&id, arena)| (id, arena))
    }
}

impl FromIterator<(ArenaId, Arena)> for Scene {
    fn from_iter<I: IntoIterator<Item = (ArenaId, Arena)>>(iter: I) -> Self {
        Self {
            arenas: iter.into_iter().collect(),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Human-readable dump of every arena and item, one attribute per line.
impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, arena) in self.iter() {
            writeln!(f, "Arena Config #{id}")?;
            writeln!(f, "max time steps = {}", arena.time_limit)?;
            for item in &arena.items {
                writeln!(f, "    Item name: {}", item.kind)?;
                f.write_str("        Item positions: ")?;
                write_list(f, item.positions.as_slice())?;
                f.write_str("\n        Item rotations: ")?;
                write_list(f, item.rotations.as_slice())?;
                f.write_str("\n        Item sizes: ")?;
                write_list(f, item.sizes.as_slice())?;
                f.write_str("\n        Item colors: ")?;
                write_list(f, item.colors.as_slice())?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
