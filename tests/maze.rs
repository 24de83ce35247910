use maze::{solve, Algorithm, Heuristic, Maze, MazeConfig, MazeLocation};
use searcher::SearchOptions;

fn run(maze: &Maze, algorithm: Algorithm) -> Option<Vec<MazeLocation>> {
    solve(maze, algorithm, Heuristic::Manhattan, SearchOptions::default())
        .unwrap()
        .map(|solution| solution.path())
}

fn is_connected(maze: &Maze, path: &[MazeLocation]) -> bool {
    path.windows(2).all(|w| maze.successors(&w[0]).contains(&w[1]))
}

#[test]
fn every_algorithm_reaches_the_goal() {
    let maze: Maze = "
        >>......##......
        ##..##..##..##..
        ....##......##..
        ..######..####..
        ..........##..<<
    "
    .parse()
    .unwrap();

    let lengths: Vec<usize> = Algorithm::all()
        .map(|algorithm| {
            let path = run(&maze, algorithm).unwrap();
            assert_eq!(path.first(), Some(&maze.start()));
            assert_eq!(path.last(), Some(&maze.goal()));
            assert!(is_connected(&maze, &path));
            path.len()
        })
        .collect();

    // dfs, bfs, astar
    assert!(lengths[1] <= lengths[0]);
    assert_eq!(lengths[1], lengths[2]);
}

#[test]
fn enclosed_goal() {
    let maze: Maze = "
        >>........
        ....##....
        ..##<<##..
        ....##....
        ..........
    "
    .parse()
    .unwrap();

    for algorithm in Algorithm::all() {
        assert!(run(&maze, algorithm).is_none());
    }
}

#[test]
fn start_is_goal() {
    let maze = Maze::open(&MazeConfig {
        rows: 3,
        columns: 3,
        sparseness: 0.0,
        start: (1, 1).into(),
        goal: (1, 1).into(),
    })
    .unwrap();

    for algorithm in Algorithm::all() {
        let solution = solve(&maze, algorithm, Heuristic::Euclidean, Default::default())
            .unwrap()
            .unwrap();
        assert_eq!(solution.path(), vec![MazeLocation::new(1, 1)]);
        assert_eq!(solution.stats().expanded, 0);
    }
}
