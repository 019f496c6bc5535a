use autosnake_core::CellCoord;
use autosnake_system_planner::Planner;
use autosnake_world::Grid;

#[test]
fn obstacle_free_paths_span_the_manhattan_distance() {
    let cases = [
        (1, 1, CellCoord::new(0, 0), CellCoord::new(0, 0)),
        (5, 1, CellCoord::new(0, 0), CellCoord::new(4, 0)),
        (1, 6, CellCoord::new(0, 5), CellCoord::new(0, 0)),
        (10, 10, CellCoord::new(2, 3), CellCoord::new(9, 8)),
        (7, 4, CellCoord::new(6, 3), CellCoord::new(0, 0)),
    ];

    for (width, height, start, goal) in cases {
        let grid = Grid::new(width, height);
        let mut planner = Planner::new();
        let path = planner
            .find_path(&grid, start, goal)
            .expect("endpoints in bounds")
            .expect("open grid is fully connected");

        let expected = start.manhattan_distance(goal) as usize + 1;
        assert_eq!(
            path.len(),
            expected,
            "path on {width}x{height} from {start:?} to {goal:?}"
        );
        assert_eq!(path.cells().first(), Some(&start));
        assert_eq!(path.cells().last(), Some(&goal));
    }
}

#[test]
fn consecutive_path_cells_are_grid_adjacent() {
    let mut grid = Grid::new(8, 8);
    for y in 0..7 {
        grid.set_obstacle(CellCoord::new(3, y), true);
    }

    let mut planner = Planner::new();
    let path = planner
        .find_path(&grid, CellCoord::new(0, 0), CellCoord::new(7, 0))
        .expect("endpoints in bounds")
        .expect("detour below the wall exists");

    for pair in path.cells().windows(2) {
        assert_eq!(
            pair[0].manhattan_distance(pair[1]),
            1,
            "cells {:?} and {:?} must differ by one unit in one axis",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn identical_grid_state_yields_identical_paths() {
    let mut grid = Grid::new(9, 9);
    for cell in [
        CellCoord::new(4, 2),
        CellCoord::new(4, 3),
        CellCoord::new(4, 4),
        CellCoord::new(4, 5),
        CellCoord::new(2, 6),
        CellCoord::new(3, 6),
    ] {
        grid.set_obstacle(cell, true);
    }
    let start = CellCoord::new(1, 4);
    let goal = CellCoord::new(7, 4);

    let mut planner = Planner::new();
    let first = planner
        .find_path(&grid, start, goal)
        .expect("endpoints in bounds");
    let second = planner
        .find_path(&grid, start, goal)
        .expect("endpoints in bounds");
    assert_eq!(first, second);

    // A fresh planner sees the same grid state and must agree as well.
    let third = Planner::new()
        .find_path(&grid, start, goal)
        .expect("endpoints in bounds");
    assert_eq!(first, third);
}

#[test]
fn ringed_goal_is_unreachable() {
    let mut grid = Grid::new(5, 5);
    let goal = CellCoord::new(2, 2);
    for neighbor in grid.neighbors(goal).collect::<Vec<_>>() {
        grid.set_obstacle(neighbor, true);
    }

    let mut planner = Planner::new();
    let path = planner
        .find_path(&grid, CellCoord::new(0, 0), goal)
        .expect("endpoints in bounds");
    assert!(path.is_none());
}

#[test]
fn goal_obstacle_flag_does_not_block_entry() {
    let mut grid = Grid::new(4, 4);
    let goal = CellCoord::new(3, 3);
    grid.set_obstacle(goal, true);

    let mut planner = Planner::new();
    let path = planner
        .find_path(&grid, CellCoord::new(0, 0), goal)
        .expect("endpoints in bounds")
        .expect("the destination itself is always enterable");
    assert_eq!(path.cells().last(), Some(&goal));
    assert_eq!(path.len(), 7);
}

#[test]
fn start_equal_to_goal_yields_single_cell_path() {
    let grid = Grid::new(3, 3);
    let cell = CellCoord::new(1, 2);

    let mut planner = Planner::new();
    let path = planner
        .find_path(&grid, cell, cell)
        .expect("endpoints in bounds")
        .expect("trivial path always exists");
    assert_eq!(path.cells(), &[cell]);
}

#[test]
fn walls_force_the_longer_detour() {
    // Corridor grid: the only route from the left column to the right one
    // passes through the single gap at (3, 3).
    let mut grid = Grid::new(7, 4);
    for y in 0..4 {
        if y != 3 {
            grid.set_obstacle(CellCoord::new(3, y), true);
        }
    }

    let mut planner = Planner::new();
    let path = planner
        .find_path(&grid, CellCoord::new(0, 0), CellCoord::new(6, 0))
        .expect("endpoints in bounds")
        .expect("gap keeps the grid connected");

    assert!(path
        .cells()
        .contains(&CellCoord::new(3, 3)));
    assert_eq!(path.len(), 13);
}
