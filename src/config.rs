//! Configuration for generating and solving mazes.

use std::fmt;
use std::str::FromStr;

use crate::errors::{MazeError, Result};
use crate::grid::MazeLocation;

/// Describes the maze to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,

    /// Probability that any given cell is blocked.
    pub sparseness: f64,

    pub start: MazeLocation,
    pub goal: MazeLocation,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            columns: 15,
            sparseness: 0.2,
            start: MazeLocation::new(0, 0),
            goal: MazeLocation::new(14, 14),
        }
    }
}

impl MazeConfig {
    /// Check that the configuration describes a buildable maze.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if !(0.0..=1.0).contains(&self.sparseness) {
            return Err(MazeError::InvalidSparseness(self.sparseness));
        }
        for &(location, name) in &[(self.start, "start"), (self.goal, "goal")] {
            if location.row >= self.rows || location.column >= self.columns {
                return Err(MazeError::OutOfBounds(location, name));
            }
        }
        Ok(())
    }
}

/// The search algorithms which can solve a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Algorithm::DepthFirst, Algorithm::BreadthFirst, Algorithm::AStar]
            .iter()
            .cloned()
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "dfs",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "depth-first search"),
            Algorithm::BreadthFirst => write!(f, "breadth-first search"),
            Algorithm::AStar => write!(f, "A*"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::all()
            .find(|a| a.name() == s.to_lowercase())
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

/// Distance estimates available to A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl FromStr for Heuristic {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(MazeError::UnknownHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(MazeConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_configs() {
        let mut config = MazeConfig::default();
        config.columns = 0;
        assert!(matches!(
            config.validate(),
            Err(MazeError::InvalidDimensions { rows: 15, columns: 0 })
        ));

        let mut config = MazeConfig::default();
        config.sparseness = 1.5;
        assert!(matches!(
            config.validate(),
            Err(MazeError::InvalidSparseness(_))
        ));

        let mut config = MazeConfig::default();
        config.goal = MazeLocation::new(15, 3);
        assert!(matches!(
            config.validate(),
            Err(MazeError::OutOfBounds(_, "goal"))
        ));
    }

    #[test]
    fn algorithms() {
        assert_eq!("dfs".parse::<Algorithm>().unwrap(), Algorithm::DepthFirst);
        assert_eq!("AStar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert!("dijkstra".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::all().count(), 3);
        assert_eq!(Algorithm::BreadthFirst.to_string(), "breadth-first search");
    }

    #[test]
    fn heuristics() {
        assert_eq!(
            "Euclidean".parse::<Heuristic>().unwrap(),
            Heuristic::Euclidean
        );
        assert!("chebyshev".parse::<Heuristic>().is_err());
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
    }
}
