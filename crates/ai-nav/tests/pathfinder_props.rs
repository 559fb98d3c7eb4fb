use std::collections::{BTreeMap, BTreeSet, VecDeque};

use ai_grid::{Cell, GridIndex, GridView, HexCoord, HexGrid, Terrain};
use ai_influence::InfluenceField;
use ai_nav::HexPathfinder;
use proptest::prelude::*;

const RADIUS: i32 = 3;

fn arb_terrain() -> impl Strategy<Value = Terrain> {
    prop_oneof![
        4 => Just(Terrain::Plains),
        2 => Just(Terrain::Forest),
        1 => Just(Terrain::Hills),
        2 => Just(Terrain::Water),
    ]
}

fn arb_grid() -> impl Strategy<Value = HexGrid> {
    let index = GridIndex::new(RADIUS);
    proptest::collection::vec(arb_terrain(), index.cell_count()).prop_map(move |terrain| {
        let cells: BTreeMap<HexCoord, Terrain> = index.coords().zip(terrain).collect();
        HexGrid::from_fn(RADIUS, |c| Cell::new(cells[&c]))
    })
}

fn arb_coord() -> impl Strategy<Value = HexCoord> {
    let coords: Vec<HexCoord> = GridIndex::new(RADIUS).coords().collect();
    proptest::sample::select(coords)
}

fn reachable(grid: &HexGrid, start: HexCoord, goal: HexCoord) -> bool {
    if !grid.cell(goal).is_some_and(|c| c.is_passable()) {
        return false;
    }
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(c) = queue.pop_front() {
        if c == goal {
            return true;
        }
        for n in ai_grid::neighbors(grid, c) {
            if grid.cell(n).is_some_and(|cell| cell.is_passable()) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    false
}

/// Plain Dijkstra on terrain cost only, as a reference optimum.
fn cheapest(grid: &HexGrid, start: HexCoord, goal: HexCoord) -> Option<u32> {
    let mut best = BTreeMap::from([(start, 0u32)]);
    let mut frontier = BTreeSet::from([(0u32, start)]);
    while let Some((d, c)) = frontier.pop_first() {
        if c == goal {
            return Some(d);
        }
        if best.get(&c).is_some_and(|b| *b < d) {
            continue;
        }
        for n in ai_grid::neighbors(grid, c) {
            let Some(cost) = grid.cell(n).and_then(|cell| cell.move_cost()) else {
                continue;
            };
            let nd = d + cost;
            if best.get(&n).map_or(true, |b| nd < *b) {
                best.insert(n, nd);
                frontier.insert((nd, n));
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn paths_are_connected_and_optimal(
        grid in arb_grid(),
        start in arb_coord(),
        goal in arb_coord(),
    ) {
        let threat = InfluenceField::new(grid.index());
        let pf = HexPathfinder::default();
        let path = pf.find_path(&grid, start, goal, &threat);

        prop_assert_eq!(path.is_empty(), !reachable(&grid, start, goal));
        if path.is_empty() {
            return Ok(());
        }

        prop_assert_eq!(path.first().copied(), Some(start));
        prop_assert_eq!(path.last().copied(), Some(goal));
        for w in path.windows(2) {
            prop_assert!(w[0].is_adjacent(w[1]));
        }
        for c in path.iter().skip(1) {
            prop_assert!(grid.cell(*c).is_some_and(|cell| cell.is_passable()));
        }

        let cost = pf.path_cost(&grid, &path, &threat);
        prop_assert_eq!(cost, cheapest(&grid, start, goal).map(|c| c as f32));
    }
}
