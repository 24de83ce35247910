//! A rectangular maze of open and blocked cells.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use searcher::{Cost, SearchHeuristic, SearchSpace};

use crate::config::MazeConfig;
use crate::distance::manhattan_distance;
use crate::errors::{MazeError, Result};

/// The contents of a single location in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
    Path,
}

impl Cell {
    /// Two character representation used when rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "..",
            Cell::Blocked => "##",
            Cell::Start => ">>",
            Cell::Goal => "<<",
            Cell::Path => "**",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Cell {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ".." => Ok(Cell::Empty),
            "##" => Ok(Cell::Blocked),
            ">>" => Ok(Cell::Start),
            "<<" => Ok(Cell::Goal),
            "**" => Ok(Cell::Path),
            _ => Err(s.to_string()),
        }
    }
}

/// A position in the maze, counted from the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MazeLocation {
    pub row: usize,
    pub column: usize,
}

impl MazeLocation {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for MazeLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

impl From<(usize, usize)> for MazeLocation {
    fn from(coordinates: (usize, usize)) -> Self {
        Self::new(coordinates.0, coordinates.1)
    }
}

impl FromStr for MazeLocation {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\(?\s*(?P<row>\d+)\s*,\s*(?P<column>\d+)\s*\)?\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(MazeError::InvalidLocation(s.to_string())),
            Some(c) => c,
        };

        let row = cap["row"]
            .parse()
            .map_err(|_| MazeError::InvalidLocation(s.to_string()))?;
        let column = cap["column"]
            .parse()
            .map_err(|_| MazeError::InvalidLocation(s.to_string()))?;
        Ok(Self::new(row, column))
    }
}

/// A grid of cells with a start and a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    start: MazeLocation,
    goal: MazeLocation,
    grid: Vec<Vec<Cell>>,
}

impl Maze {
    /// Build an open maze with only the start and goal marked.
    pub fn open(config: &MazeConfig) -> Result<Self> {
        config.validate()?;
        let mut maze = Maze {
            rows: config.rows,
            columns: config.columns,
            start: config.start,
            goal: config.goal,
            grid: vec![vec![Cell::Empty; config.columns]; config.rows],
        };
        maze.stamp();
        Ok(maze)
    }

    /// Build a maze where each cell is blocked with
    /// probability `config.sparseness`.
    pub fn random<R>(config: &MazeConfig, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let mut maze = Self::open(config)?;
        for row in maze.grid.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen::<f64>() < config.sparseness {
                    *cell = Cell::Blocked;
                }
            }
        }
        maze.stamp();
        Ok(maze)
    }

    // Start and goal always win over whatever else is in their cells.
    fn stamp(&mut self) {
        self.set(self.start, Cell::Start);
        self.set(self.goal, Cell::Goal);
    }

    fn set(&mut self, location: MazeLocation, cell: Cell) {
        self.grid[location.row][location.column] = cell;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> MazeLocation {
        self.start
    }

    pub fn goal(&self) -> MazeLocation {
        self.goal
    }

    pub fn cell(&self, location: MazeLocation) -> Option<Cell> {
        self.grid
            .get(location.row)
            .and_then(|row| row.get(location.column))
            .copied()
    }

    /// Block a cell. The start and goal cannot be blocked.
    pub fn block(&mut self, location: MazeLocation) {
        if location != self.start && location != self.goal {
            self.set(location, Cell::Blocked);
        }
    }

    fn is_open(&self, location: MazeLocation) -> bool {
        matches!(self.cell(location), Some(c) if c != Cell::Blocked)
    }

    pub fn goal_test(&self, location: &MazeLocation) -> bool {
        *location == self.goal
    }

    /// Open locations one step away, in the order
    /// down, up, right, left.
    pub fn successors(&self, location: &MazeLocation) -> Vec<MazeLocation> {
        let MazeLocation { row, column } = *location;
        let mut locations = Vec::with_capacity(4);

        let down = MazeLocation::new(row + 1, column);
        if self.is_open(down) {
            locations.push(down);
        }
        if row > 0 && self.is_open(MazeLocation::new(row - 1, column)) {
            locations.push(MazeLocation::new(row - 1, column));
        }
        let right = MazeLocation::new(row, column + 1);
        if self.is_open(right) {
            locations.push(right);
        }
        if column > 0 && self.is_open(MazeLocation::new(row, column - 1)) {
            locations.push(MazeLocation::new(row, column - 1));
        }
        locations
    }

    /// Draw a path onto the maze.
    pub fn mark(&mut self, path: &[MazeLocation]) {
        for location in path {
            self.set(*location, Cell::Path);
        }
        self.stamp();
    }

    /// Erase a path previously drawn with [Maze::mark].
    pub fn clear(&mut self, path: &[MazeLocation]) {
        for location in path {
            self.set(*location, Cell::Empty);
        }
        self.stamp();
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut grid: Vec<Vec<Cell>> = Vec::new();
        let mut start = None;
        let mut goal = None;

        for (n, line) in s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() % 2 != 0 {
                return Err(MazeError::UnknownCell(line.to_string(), n + 1));
            }

            let mut row = Vec::with_capacity(symbols.len() / 2);
            for (column, pair) in symbols.chunks(2).enumerate() {
                let symbol: String = pair.iter().collect();
                let cell: Cell = symbol
                    .parse()
                    .map_err(|s| MazeError::UnknownCell(s, n + 1))?;

                let here = MazeLocation::new(n, column);
                let duplicate = match cell {
                    Cell::Start => start.replace(here).is_some(),
                    Cell::Goal => goal.replace(here).is_some(),
                    _ => false,
                };
                if duplicate {
                    let marker = if cell == Cell::Start { "start" } else { "goal" };
                    return Err(MazeError::DuplicateMarker(marker));
                }
                row.push(cell);
            }

            if let Some(first) = grid.first() {
                if first.len() != row.len() {
                    return Err(MazeError::RaggedRow(n + 1));
                }
            }
            grid.push(row);
        }

        let rows = grid.len();
        let columns = grid.first().map_or(0, Vec::len);
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }

        Ok(Maze {
            rows,
            columns,
            start: start.ok_or(MazeError::MissingMarker("start"))?,
            goal: goal.ok_or(MazeError::MissingMarker("goal"))?,
            grid,
        })
    }
}

impl SearchSpace for Maze {
    type State = MazeLocation;

    fn is_goal(&self, state: &MazeLocation) -> bool {
        self.goal_test(state)
    }

    fn successors(&self, state: &MazeLocation) -> Vec<MazeLocation> {
        Maze::successors(self, state)
    }
}

impl SearchHeuristic for Maze {
    fn heuristic(&self, state: &MazeLocation) -> Cost {
        manhattan_distance(self.goal)(state)
    }
}
