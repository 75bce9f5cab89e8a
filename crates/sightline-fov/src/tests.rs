use super::*;
use sightline_geom::Coord;

/// Small bounded grid: `#` wall, `.` floor, `@` floor + origin.
struct Grid {
    width: i32,
    height: i32,
    walls: Vec<bool>,
    origin: Coord,
}

impl Grid {
    fn parse(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let mut walls = Vec::with_capacity((width * height) as usize);
        let mut origin = Coord::ORIGIN;
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len() as i32, width, "ragged test grid");
            for (x, ch) in row.chars().enumerate() {
                if ch == '@' {
                    origin = Coord::new(x as i32, y as i32);
                }
                walls.push(ch == '#');
            }
        }
        Self {
            width,
            height,
            walls,
            origin,
        }
    }
}

impl FovMap for Grid {
    fn blocks_light(&self, x: i32, y: i32) -> bool {
        !self.in_bounds(x, y) || self.walls[(y * self.width + x) as usize]
    }
    fn width(&self) -> i32 {
        self.width
    }
    fn height(&self) -> i32 {
        self.height
    }
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

const OCTANT_SCANNERS: [Algorithm; 3] = [
    Algorithm::ShadowCast,
    Algorithm::DiamondWalls,
    Algorithm::Milazzo,
];

fn disk(origin: Coord, radius: i32) -> VisibleSet {
    let mut out = VisibleSet::default();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                out.insert(origin + Coord::new(dx, dy));
            }
        }
    }
    out
}

fn set_of(cells: &[(i32, i32)]) -> VisibleSet {
    cells.iter().map(|&c| Coord::from(c)).collect()
}

#[test]
fn radius_zero_is_origin_only() {
    let open = FnMap::new(64, 64, |_, _| false);
    let o = Coord::new(7, 9);
    for alg in Algorithm::ALL {
        assert_eq!(alg.compute(&open, o, 0), set_of(&[(7, 9)]), "{alg}");
    }
}

#[test]
fn origin_visible_even_inside_a_wall() {
    let solid = FnMap::new(8, 8, |_, _| true);
    let o = Coord::new(3, 3);
    for alg in Algorithm::ALL {
        for r in [-1, 0, 1, 5] {
            assert!(alg.compute(&solid, o, r).contains(&o), "{alg} r={r}");
        }
    }
}

#[test]
fn open_map_gives_filled_disk() {
    let open = FnMap::new(0, 0, |_, _| false);
    let o = Coord::new(3, -2);
    for alg in OCTANT_SCANNERS {
        for r in 0..=12 {
            assert_eq!(alg.compute(&open, o, r), disk(o, r), "{alg} r={r}");
        }
    }
}

#[test]
fn single_cell_map_sees_only_itself() {
    let grid = Grid::parse(&["@"]);
    for alg in Algorithm::ALL {
        for r in [-1, 0, 1, 3, 10] {
            assert_eq!(alg.compute(&grid, grid.origin, r), set_of(&[(0, 0)]), "{alg} r={r}");
        }
    }
}

#[test]
fn corridor_wall_stops_every_scanner() {
    let grid = Grid::parse(&["@.#.."]);
    for alg in Algorithm::ALL {
        assert_eq!(
            alg.compute(&grid, grid.origin, -1),
            set_of(&[(0, 0), (1, 0), (2, 0)]),
            "{alg}"
        );
    }
}

/// Wall at (1, 0) next to the observer; an outer ring stops the unbounded scan.
fn wall_east_of_origin() -> FnMap<impl Fn(i32, i32) -> bool> {
    FnMap::new(21, 21, |x, y| (x, y) == (1, 0) || x.abs() > 10 || y.abs() > 10)
}

#[test]
fn shadow_cast_hides_cells_behind_adjacent_wall() {
    let visible = ShadowCast::compute(&wall_east_of_origin(), Coord::ORIGIN, -1);
    assert!(visible.contains(&Coord::new(1, 0)));
    for hidden in [(2, 0), (2, 1), (2, -1), (5, 0)] {
        assert!(!visible.contains(&Coord::from(hidden)), "{hidden:?}");
    }
    assert!(visible.contains(&Coord::new(2, 2)));
    assert!(visible.contains(&Coord::new(-5, 0)));
}

#[test]
fn diamond_walls_reveals_wall_flanks() {
    let visible = DiamondWalls::compute(&wall_east_of_origin(), Coord::ORIGIN, -1);
    // Directly behind the wall stays dark: the wall sits on the axis, so the
    // bottom-boundary correction never applies to it.
    assert!(!visible.contains(&Coord::new(2, 0)));
    assert!(visible.contains(&Coord::new(2, 1)));
    assert!(visible.contains(&Coord::new(2, -1)));
}

#[test]
fn milazzo_reveals_wall_flanks() {
    let visible = Milazzo::compute(&wall_east_of_origin(), Coord::ORIGIN, -1);
    assert!(!visible.contains(&Coord::new(2, 0)));
    assert!(visible.contains(&Coord::new(2, 1)));
    assert!(visible.contains(&Coord::new(2, -1)));
}

#[test]
fn pillar_at_shallow_angle() {
    let pillar = FnMap::new(0, 0, |x, y| (x, y) == (3, 1));
    let o = Coord::ORIGIN;
    let r = 6;
    let full = disk(o, r);

    let hidden = |alg: Algorithm| -> VisibleSet {
        let visible = alg.compute(&pillar, o, r);
        full.difference(&visible).copied().collect()
    };

    // Shadow casting only loses the tile squarely behind the pillar.
    assert_eq!(hidden(Algorithm::ShadowCast), set_of(&[(5, 2)]));
    // Beveled corners hide the tile the pillar's centre line crosses, and
    // reveal the grazing tile below the shadow.
    let milazzo = hidden(Algorithm::Milazzo);
    assert_eq!(milazzo, set_of(&[(4, 1), (5, 2)]));
    assert!(Milazzo::compute(&pillar, o, r).contains(&Coord::new(5, 1)));
}

#[test]
fn results_never_exceed_radius() {
    let pillars = FnMap::new(0, 0, |x, y| x % 3 == 0 && y % 4 == 1);
    let o = Coord::new(1, 0);
    for alg in Algorithm::ALL {
        for r in 0..=9 {
            for c in alg.compute(&pillars, o, r) {
                assert!(c.within_radius(o, r), "{alg} r={r} {c}");
            }
        }
    }
}

#[test]
fn ray_cast_clips_to_map_rectangle() {
    let grid = Grid::parse(&[
        ".....", //
        ".....",
        "..@..",
        ".....",
        ".....",
    ]);
    let visible = RayCast::compute(&grid, grid.origin, -1);
    assert_eq!(visible.len(), 25);
    assert!(visible.iter().all(|c| grid.in_bounds(c.x, c.y)));

    let near = RayCast::compute(&grid, grid.origin, 1);
    assert_eq!(near, disk(grid.origin, 1));
}

#[test]
fn ray_cast_origin_outside_map_still_reported() {
    let grid = Grid::parse(&["...", "..."]);
    let o = Coord::new(-4, -4);
    let visible = RayCast::compute(&grid, o, 2);
    assert_eq!(visible, set_of(&[(-4, -4)]));
}

#[test]
fn origins_at_i32_limits_wrap() {
    let open = FnMap::new(0, 0, |_, _| false);
    let corners = [
        Coord::new(i32::MAX, 0),
        Coord::new(i32::MIN, i32::MAX),
        Coord::new(i32::MIN, i32::MIN),
    ];
    for alg in OCTANT_SCANNERS {
        for o in corners {
            assert_eq!(alg.compute(&open, o, 3), disk(o, 3), "{alg} at {o}");
        }
    }
    let east = OCTANT_SCANNERS[0].compute(&open, Coord::new(i32::MAX, 0), 1);
    assert!(east.contains(&Coord::new(i32::MIN, 0)));

    let boxed = FnMap::new(8, 8, |x, y| !(0..8).contains(&x) || !(0..8).contains(&y));
    for o in corners {
        for r in [-1, 2] {
            let visible = RayCast::compute(&boxed, o, r);
            assert!(visible.contains(&o));
            for c in &visible {
                let dx = (i64::from(c.x) - i64::from(o.x)).abs();
                let dy = (i64::from(c.y) - i64::from(o.y)).abs();
                assert!(dx <= 1 && dy <= 1, "{c} far from {o}");
            }
        }
    }
}

#[test]
fn repeated_calls_agree() {
    let grid = Grid::parse(&[
        "##########",
        "#....#...#",
        "#.##...#.#",
        "#..@..#..#",
        "#.#...##.#",
        "#....#...#",
        "##########",
    ]);
    for alg in Algorithm::ALL {
        let a = alg.compute(&grid, grid.origin, -1);
        let b = alg.compute(&grid, grid.origin, -1);
        assert_eq!(a, b, "{alg}");
    }
}

#[test]
fn batch_matches_sequential() {
    let map = FnMap::new(0, 0, |x: i32, y: i32| (x * 7 + y * 13).rem_euclid(11) == 0);
    let observers: Vec<(Coord, i32)> = (0..16).map(|i| (Coord::new(i, -i), i % 7)).collect();
    for alg in Algorithm::ALL {
        let batch = compute_many(alg, &map, &observers);
        assert_eq!(batch.len(), observers.len());
        for (got, &(o, r)) in batch.iter().zip(&observers) {
            assert_eq!(*got, alg.compute(&map, o, r));
        }
    }
}

#[test]
fn algorithm_names_parse() {
    for alg in Algorithm::ALL {
        assert_eq!(alg.name().parse::<Algorithm>(), Ok(alg));
        assert_eq!(alg.to_string(), alg.name());
    }
    assert_eq!("Diamond_Walls".parse::<Algorithm>(), Ok(Algorithm::DiamondWalls));
    let err = "permissive".parse::<Algorithm>().unwrap_err();
    assert!(err.to_string().contains("milazzo"));
    assert_eq!(Algorithm::default(), Algorithm::ShadowCast);
}
