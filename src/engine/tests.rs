use super::*;
use std::collections::HashSet;

const SEED: u64 = 42;

fn config(w: usize, h: usize) -> Config {
    Config::with_size(w, h, 4).seeded(SEED)
}

fn engine_with(w: usize, h: usize, cells: &[(usize, usize)]) -> LifeEngine {
    LifeEngine::from_cells(&config(w, h), cells.iter().copied()).unwrap()
}

fn live_set(engine: &LifeEngine) -> HashSet<(usize, usize)> {
    engine
        .cells()
        .iter()
        .map(|c| (c.x as usize, c.y as usize))
        .collect()
}

fn set(cells: &[(usize, usize)]) -> HashSet<(usize, usize)> {
    cells.iter().copied().collect()
}

/// Bitmap, live list and spatial index must all describe the same cells.
fn assert_consistent(engine: &LifeEngine) {
    let (w, _) = engine.size();
    let from_list: HashSet<usize> = engine
        .cells()
        .iter()
        .map(|c| c.x as usize + c.y as usize * w)
        .collect();
    assert_eq!(from_list.len(), engine.population(), "duplicate live records");

    let from_bitmap: HashSet<usize> = engine
        .grid()
        .bitmap()
        .iter()
        .enumerate()
        .filter_map(|(i, &alive)| alive.then_some(i))
        .collect();
    assert_eq!(from_list, from_bitmap);

    let from_index: HashSet<usize> = engine.spatial_index().iter().collect();
    assert_eq!(from_list, from_index);
    assert_eq!(engine.spatial_index().len(), engine.population());
}

#[test]
fn block_is_still_life() {
    let block = [(5, 5), (6, 5), (5, 6), (6, 6)];
    let mut life = engine_with(16, 16, &block);
    for _ in 0..20 {
        assert!(life.tick());
        assert_eq!(live_set(&life), set(&block));
        for cell in life.cells() {
            assert_eq!(cell.neighbors, 3);
            assert!(!cell.newborn);
        }
    }
    assert_eq!(life.generation(), 20);
    assert_consistent(&life);
}

#[test]
fn block_in_corner_does_not_wrap() {
    let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
    let mut life = engine_with(8, 8, &block);
    for _ in 0..5 {
        life.tick();
    }
    assert_eq!(live_set(&life), set(&block));
}

#[test]
fn blinker_oscillates() {
    let horizontal = [(4, 5), (5, 5), (6, 5)];
    let vertical = [(5, 4), (5, 5), (5, 6)];
    let mut life = engine_with(12, 12, &horizontal);

    life.tick();
    assert_eq!(live_set(&life), set(&vertical));
    for cell in life.cells() {
        if (cell.x, cell.y) == (5, 5) {
            assert_eq!(cell.neighbors, 2);
            assert!(!cell.newborn);
        } else {
            assert_eq!(cell.neighbors, 3);
            assert!(cell.newborn);
        }
    }

    life.tick();
    assert_eq!(live_set(&life), set(&horizontal));
    for _ in 0..10 {
        life.tick();
    }
    assert_eq!(live_set(&life), set(&horizontal));
    assert_consistent(&life);
}

#[test]
fn blinker_clipped_by_edge() {
    // The vertical phase would need row -1, which does not exist.
    let mut life = engine_with(8, 8, &[(3, 0), (4, 0), (5, 0)]);
    life.tick();
    assert_eq!(live_set(&life), set(&[(4, 0), (4, 1)]));
    life.tick();
    assert!(live_set(&life).is_empty());
}

#[test]
fn lonely_cells_die() {
    let mut life = engine_with(16, 16, &[(3, 3)]);
    life.tick();
    assert_eq!(life.population(), 0);

    let mut life = engine_with(16, 16, &[(3, 3), (4, 3)]);
    life.tick();
    assert_eq!(life.population(), 0);
    assert_consistent(&life);
}

#[test]
fn crowded_cell_dies() {
    // Center of a plus sign has four neighbours.
    let plus = [(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)];
    let mut life = engine_with(12, 12, &plus);
    life.tick();
    assert!(!life.is_alive(5, 5));
    assert!(life.is_alive(4, 4) && life.is_alive(6, 6));
}

#[test]
fn paused_tick_is_noop() {
    let mut life = LifeEngine::new(&config(32, 32)).unwrap();
    life.initialize(0.3);
    life.tick();
    life.tick();
    let before = life.cells().to_vec();
    let stats = life.stats();

    life.pause();
    for _ in 0..10 {
        assert!(!life.tick());
    }
    assert_eq!(life.stats(), stats);
    assert_eq!(life.cells(), &before[..]);
    assert_consistent(&life);

    life.resume();
    assert!(life.tick());
    assert_eq!(life.generation(), stats.generation + 1);
}

#[test]
fn density_extremes() {
    let mut life = LifeEngine::new(&config(16, 8)).unwrap();
    life.initialize(0.);
    assert_eq!(life.population(), 0);
    assert_eq!(life.generation(), 0);

    life.initialize(1.);
    assert_eq!(life.population(), 16 * 8);
    assert_eq!(life.generation(), 0);
    assert_consistent(&life);

    // Out-of-range densities are clamped.
    life.initialize(-3.);
    assert_eq!(life.population(), 0);
    life.initialize(f64::NAN);
    assert_eq!(life.population(), 0);
    life.initialize(7.);
    assert_eq!(life.population(), 16 * 8);
}

#[test]
fn seeding_is_deterministic() {
    let mut a = LifeEngine::new(&config(64, 64)).unwrap();
    let mut b = LifeEngine::new(&config(64, 64)).unwrap();
    a.initialize(0.3);
    b.initialize(0.3);
    assert_eq!(a.cells(), b.cells());

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    a.initialize_with(0.3, &mut rng);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    b.initialize_with(0.3, &mut rng);
    assert_eq!(a.cells(), b.cells());
    assert!(a.population() > 0);
}

#[test]
fn seeded_cells_are_newborn_without_counts() {
    let mut life = LifeEngine::new(&config(32, 32)).unwrap();
    life.initialize(0.4);
    assert!(life
        .cells()
        .iter()
        .all(|c| c.neighbors == 0 && c.newborn));
    // Row-major order.
    let keys = life
        .cells()
        .iter()
        .map(|c| (c.y, c.x))
        .collect::<Vec<_>>();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
    assert_consistent(&life);
}

#[test]
fn reset_clears_previous_state() {
    let mut life = engine_with(16, 16, &[(1, 1), (2, 1), (3, 1)]);
    life.tick();
    life.tick();
    life.initialize_cells([(8, 8), (8, 8), (100, 3)]);
    assert_eq!(live_set(&life), set(&[(8, 8)]));
    assert_eq!(life.generation(), 0);
    assert_eq!(life.stats().last_tick, Duration::ZERO);
    assert_consistent(&life);
}

#[test]
fn random_soup_stays_consistent() {
    let mut life = LifeEngine::new(&config(64, 32)).unwrap();
    life.initialize(0.35);
    for _ in 0..40 {
        life.tick();
        assert_consistent(&life);
        for cell in life.cells() {
            assert!(cell.neighbors == 2 || cell.neighbors == 3);
            if cell.neighbors == 2 {
                assert!(!cell.newborn);
            }
        }
    }
}

#[test]
fn active_region_is_bounded_by_population() {
    let mut life = LifeEngine::new(&config(128, 128)).unwrap();
    life.initialize(0.05);
    let region = life.active_region_len();
    assert!(region >= life.population());
    assert!(region <= 9 * life.population());

    let mut life = engine_with(16, 16, &[(0, 0)]);
    assert_eq!(life.active_region_len(), 4);
}

#[test]
fn measuring_active_region_leaves_tick_unchanged() {
    let mut measured = LifeEngine::new(&config(64, 64)).unwrap();
    measured.initialize(0.3);
    let mut plain = LifeEngine::new(&config(64, 64)).unwrap();
    plain.initialize(0.3);

    for _ in 0..10 {
        let len = measured.active_region_len();
        assert_eq!(measured.active_region_len(), len);
        assert!(measured.tick());
        assert!(plain.tick());
        assert_eq!(measured.cells(), plain.cells());
        assert_consistent(&measured);
    }
}

#[test]
fn out_of_bounds_is_dead() {
    let life = engine_with(8, 8, &[(0, 0), (7, 7)]);
    assert!(life.is_alive(0, 0));
    assert!(life.is_alive(7, 7));
    assert!(!life.is_alive(-1, 0));
    assert!(!life.is_alive(0, -1));
    assert!(!life.is_alive(8, 7));
    assert!(!life.is_alive(7, 8));
}

#[test]
fn rejects_bad_bucket_count() {
    let config = Config::with_size(30, 30, 4);
    assert!(matches!(
        LifeEngine::new(&config),
        Err(ConfigError::IndivisibleGrid { .. })
    ));
}

#[test]
fn tick_rate_is_clamped() {
    let mut life = LifeEngine::new(&config(8, 8)).unwrap();
    assert_eq!(life.tick_rate(), 20);
    life.set_tick_rate(0);
    assert_eq!(life.tick_rate(), 1);
    life.slower();
    assert_eq!(life.tick_rate(), 1);
    life.set_tick_rate(500);
    assert_eq!(life.tick_rate(), 60);
    life.faster();
    assert_eq!(life.tick_rate(), 60);
    assert_eq!(life.tick_interval(), Duration::from_secs_f64(1. / 60.));
}

#[test]
fn status_line() {
    let stats = Stats {
        live_cells: 3,
        generation: 12,
        last_tick: Duration::ZERO,
    };
    assert_eq!(
        stats.status_line(false),
        "Conway's Game of Life - Generation: 12"
    );
    assert_eq!(
        stats.status_line(true),
        "Conway's Game of Life - Generation: 12 [PAUSED]"
    );
}
