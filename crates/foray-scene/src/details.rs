//! Flattened views of a scene.

use crate::model::Scene;
use foray_core::{ArenaId, ItemKind, StartPositions, StartRotations};
use indexmap::IndexMap;

/// Plain-tuple attributes of one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemDetails {
    /// `(x, y, z)` per object.
    pub positions: Vec<(f64, f64, f64)>,
    /// Headings in degrees.
    pub rotations: Vec<f64>,
    /// `(x, y, z)` sizes.
    pub sizes: Vec<(f64, f64, f64)>,
    /// `(r, g, b)` colors.
    pub colors: Vec<(u8, u8, u8)>,
}

/// `arena -> item kind -> attributes`.
pub type SceneDetails = IndexMap<ArenaId, IndexMap<ItemKind, ItemDetails>>;

/// Flatten `scene` into plain coordinate tuples.
///
/// If an arena holds several items of the same kind the last one wins.
pub fn extract_details(scene: &Scene) -> SceneDetails {
    scene
        .iter()
        .map(|(id, arena)| {
            let items = arena
                .items
                .iter()
                .map(|item| {
                    let details = ItemDetails {
                        positions: item.positions.iter().map(|p| p.to_tuple()).collect(),
                        rotations: item.rotations.to_vec(),
                        sizes: item.sizes.iter().map(|s| s.to_tuple()).collect(),
                        colors: item.colors.iter().map(|c| c.to_tuple()).collect(),
                    };
                    (item.kind, details)
                })
                .collect();
            (id, items)
        })
        .collect()
}

/// Collect agent and good-goal start positions, and agent headings,
/// across all arenas in arena order.
///
/// The `Agent` and `GoodGoal` position keys and the `Agent` rotation key
/// are always present, even when no arena contributes to them.
pub fn extract_start_positions(scene: &Scene) -> (StartPositions, StartRotations) {
    let mut positions = StartPositions::new();
    positions.insert(ItemKind::Agent, Vec::new());
    positions.insert(ItemKind::GoodGoal, Vec::new());
    let mut rotations = StartRotations::new();
    rotations.insert(ItemKind::Agent, Vec::new());

    for (_, arena) in scene.iter() {
        for item in &arena.items {
            if let Some(list) = positions.get_mut(&item.kind) {
                list.extend(item.positions.iter().copied());
            }
            if let Some(list) = rotations.get_mut(&item.kind) {
                list.extend(item.rotations.iter().copied());
            }
        }
    }

    (positions, rotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Arena, Item};
    use foray_core::{Rgb, Vec3};

    fn two_arena_scene() -> Scene {
        let arena = |ax: f64, gx: f64| {
            let mut agent = Item::new(ItemKind::Agent);
            agent.positions.push(Vec3::new(ax, 1.0, 2.0));
            agent.rotations.push(0.0);
            let mut goal = Item::new(ItemKind::GoodGoal);
            goal.positions.push(Vec3::new(gx, 1.0, 30.0));
            let mut bad = Item::new(ItemKind::BadGoal);
            bad.positions.push(Vec3::new(20.0, 1.0, 20.0));
            let mut wall = Item::new(ItemKind::Wall);
            wall.colors.push(Rgb::new(153, 153, 153));
            wall.sizes.push(Vec3::new(1.0, 2.0, 3.0));
            let mut a = Arena::new(100);
            a.items = vec![agent, goal, wall, bad];
            a
        };
        [(ArenaId(0), arena(3.0, 30.0)), (ArenaId(1), arena(4.0, 31.0))]
            .into_iter()
            .collect()
    }

    #[test]
    fn details_preserve_every_attribute() {
        let details = extract_details(&two_arena_scene());
        assert_eq!(details.len(), 2);

        let arena0 = &details[&ArenaId(0)];
        assert_eq!(arena0[&ItemKind::Agent].positions, vec![(3.0, 1.0, 2.0)]);
        assert_eq!(arena0[&ItemKind::Agent].rotations, vec![0.0]);
        assert_eq!(arena0[&ItemKind::Wall].colors, vec![(153, 153, 153)]);
        assert_eq!(arena0[&ItemKind::Wall].sizes, vec![(1.0, 2.0, 3.0)]);
        assert!(arena0[&ItemKind::Wall].positions.is_empty());

        let kinds: Vec<_> = arena0.keys().copied().collect();
        assert_eq!(
            kinds,
            vec![
                ItemKind::Agent,
                ItemKind::GoodGoal,
                ItemKind::Wall,
                ItemKind::BadGoal
            ]
        );
    }

    #[test]
    fn start_positions_span_arenas_in_order() {
        let (positions, rotations) = extract_start_positions(&two_arena_scene());
        assert_eq!(
            positions[&ItemKind::Agent],
            vec![Vec3::new(3.0, 1.0, 2.0), Vec3::new(4.0, 1.0, 2.0)]
        );
        assert_eq!(
            positions[&ItemKind::GoodGoal],
            vec![Vec3::new(30.0, 1.0, 30.0), Vec3::new(31.0, 1.0, 30.0)]
        );
        assert_eq!(rotations[&ItemKind::Agent], vec![0.0, 0.0]);
        assert!(!positions.contains_key(&ItemKind::BadGoal));
    }

    #[test]
    fn start_positions_keys_present_for_empty_scene() {
        let (positions, rotations) = extract_start_positions(&Scene::new());
        assert!(positions[&ItemKind::Agent].is_empty());
        assert!(positions[&ItemKind::GoodGoal].is_empty());
        assert!(rotations[&ItemKind::Agent].is_empty());
    }
}
