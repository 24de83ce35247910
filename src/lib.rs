#![deny(clippy::all)]

use clap::{value_t, App, Arg, ArgMatches};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use searcher::problem::FnHeuristic;
use searcher::{astar_search, breadth_first, depth_first};
use searcher::{Cost, SearchOptions, SearchResult, Solution};

pub mod config;
pub mod distance;
mod errors;
pub mod grid;

pub use config::{Algorithm, Heuristic, MazeConfig};
pub use distance::{euclidean_distance, manhattan_distance};
pub use errors::{MazeError, Result as MazeResult};
pub use grid::{Cell, Maze, MazeLocation};

type Error = anyhow::Error;
type Distance = Box<dyn Fn(&MazeLocation) -> Cost>;

/// Solve a maze with one algorithm.
///
/// A* uses `heuristic`, the other algorithms ignore it.
pub fn solve(
    maze: &Maze,
    algorithm: Algorithm,
    heuristic: Heuristic,
    options: SearchOptions,
) -> SearchResult<Option<Solution<MazeLocation>>> {
    let start = maze.start();
    match algorithm {
        Algorithm::DepthFirst => depth_first(maze.clone(), start)
            .with_options(options)
            .run(),
        Algorithm::BreadthFirst => breadth_first(maze.clone(), start)
            .with_options(options)
            .run(),
        Algorithm::AStar => {
            let distance: Distance = match heuristic {
                Heuristic::Manhattan => Box::new(manhattan_distance(maze.goal())),
                Heuristic::Euclidean => Box::new(euclidean_distance(maze.goal())),
            };
            let unit = |_: &MazeLocation, _: &MazeLocation| 1.0;
            let problem = FnHeuristic::new(maze.clone(), distance, unit);
            astar_search(problem, start).with_options(options).run()
        }
    }
}

fn maze_config(matches: &ArgMatches) -> Result<MazeConfig, Error> {
    let rows = value_t!(matches, "rows", usize)?;
    let columns = value_t!(matches, "columns", usize)?;

    let start = match matches.value_of("start") {
        Some(s) => s.parse()?,
        None => MazeLocation::new(0, 0),
    };
    let goal = match matches.value_of("goal") {
        Some(s) => s.parse()?,
        None => MazeLocation::new(rows.saturating_sub(1), columns.saturating_sub(1)),
    };

    let config = MazeConfig {
        rows,
        columns,
        sparseness: value_t!(matches, "sparseness", f64)?,
        start,
        goal,
    };
    config.validate()?;
    Ok(config)
}

pub fn solver() -> Result<(), Error> {
    let matches = App::new("Maze Solver")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Generate a random maze and solve it with graph search")
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .value_name("ROWS")
                .default_value("15")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("columns")
                .long("columns")
                .value_name("COLUMNS")
                .default_value("15")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("sparseness")
                .long("sparseness")
                .value_name("P")
                .help("Probability that a cell is blocked")
                .default_value("0.2")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for a reproducible maze")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .value_name("ROW,COLUMN")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .value_name("ROW,COLUMN")
                .help("Defaults to the bottom right corner")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .value_name("ALGORITHM")
                .possible_values(&["dfs", "bfs", "astar", "all"])
                .default_value("all")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .value_name("HEURISTIC")
                .possible_values(&["manhattan", "euclidean"])
                .default_value("manhattan")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("STEPS")
                .help("Give up after expanding this many nodes")
                .takes_value(true),
        )
        .get_matches();

    let config = maze_config(&matches)?;

    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64)?)
    } else {
        StdRng::from_entropy()
    };

    let algorithms: Vec<Algorithm> = match matches.value_of("algorithm") {
        None | Some("all") => Algorithm::all().collect(),
        Some(name) => vec![name.parse()?],
    };
    let heuristic: Heuristic = value_t!(matches, "heuristic", Heuristic)?;

    let options = SearchOptions {
        limit: if matches.is_present("limit") {
            Some(value_t!(matches, "limit", usize)?)
        } else {
            None
        },
        ..SearchOptions::default()
    };

    let mut maze = Maze::random(&config, &mut rng)?;
    println!("{}", maze);

    for algorithm in algorithms {
        match solve(&maze, algorithm, heuristic, options.clone())? {
            Some(solution) => {
                let path = solution.path();
                info!(
                    "{} found a path of {} steps, expanding {} nodes",
                    algorithm,
                    solution.len(),
                    solution.stats().expanded
                );
                maze.mark(&path);
                println!("{}", maze);
                maze.clear(&path);
            }
            None => println!("No solution found using {}!", algorithm),
        }
    }

    Ok(())
}
