//! Per-kind placement rules.

use crate::model::Item;
use foray_core::{ItemKind, Rgb, Vec3};
use rand::Rng;
use std::ops::Range;

/// Color given to every generated wall.
pub const WALL_COLOR: Rgb = Rgb::new(153, 153, 153);

/// How one object of a given kind is placed.
#[derive(Clone, Debug, PartialEq)]
pub enum Placement {
    /// Only a color is fixed; the simulator picks position and size.
    Colored {
        /// Color assigned to the object.
        color: Rgb,
    },
    /// Integer floor coordinates drawn uniformly from half-open ranges.
    Sampled {
        /// Range for `x`.
        x: Range<u32>,
        /// Range for `z`.
        z: Range<u32>,
        /// Fixed `y`.
        height: f64,
        /// Fixed heading in degrees, if the kind carries one.
        rotation: Option<f64>,
    },
}

impl Placement {
    /// Ground height for sampled objects.
    pub const GROUND_HEIGHT: f64 = 1.0;

    /// The placement rule for `kind`.
    ///
    /// Goals may land anywhere on the floor away from the outer cell ring.
    /// The agent spawns in the low-`x`, low-`z` corner region.
    pub fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Wall => Placement::Colored { color: WALL_COLOR },
            ItemKind::GoodGoal | ItemKind::GoodGoalMulti | ItemKind::BadGoal => {
                Placement::Sampled {
                    x: 1..39,
                    z: 1..39,
                    height: Self::GROUND_HEIGHT,
                    rotation: None,
                }
            }
            ItemKind::Agent => Placement::Sampled {
                x: 1..10,
                z: 1..19,
                height: Self::GROUND_HEIGHT,
                rotation: Some(0.0),
            },
        }
    }

    /// Draw one object and append its attributes to `item`.
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R, item: &mut Item) {
        match self {
            Placement::Colored { color } => item.colors.push(*color),
            Placement::Sampled {
                x,
                z,
                height,
                rotation,
            } => {
                let px = rng.random_range(x.clone());
                let pz = rng.random_range(z.clone());
                item.positions
                    .push(Vec3::new(f64::from(px), *height, f64::from(pz)));
                if let Some(deg) = rotation {
                    item.rotations.push(*deg);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn wall_gets_color_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut item = Item::new(ItemKind::Wall);
        Placement::for_kind(ItemKind::Wall).place(&mut rng, &mut item);
        assert_eq!(item.colors.as_slice(), &[WALL_COLOR]);
        assert!(item.positions.is_empty());
        assert!(item.rotations.is_empty());
    }

    #[test]
    fn agent_gets_position_and_zero_heading() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut item = Item::new(ItemKind::Agent);
        Placement::for_kind(ItemKind::Agent).place(&mut rng, &mut item);
        assert_eq!(item.positions.len(), 1);
        assert_eq!(item.rotations.as_slice(), &[0.0]);
        assert!(item.colors.is_empty());

        let p = item.positions[0];
        assert!((1.0..10.0).contains(&p.x));
        assert!((1.0..19.0).contains(&p.z));
        assert_eq!(p.y, 1.0);
    }

    #[test]
    fn goals_sample_integer_coordinates() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for kind in [ItemKind::GoodGoal, ItemKind::GoodGoalMulti, ItemKind::BadGoal] {
            let mut item = Item::new(kind);
            for _ in 0..200 {
                Placement::for_kind(kind).place(&mut rng, &mut item);
            }
            assert!(item.rotations.is_empty());
            for p in &item.positions {
                assert_eq!(p.x.fract(), 0.0);
                assert_eq!(p.z.fract(), 0.0);
                assert!((1.0..39.0).contains(&p.x));
                assert!((1.0..39.0).contains(&p.z));
            }
        }
    }
}
