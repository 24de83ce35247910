//! Distance estimates from a location to a fixed goal, for use as A* heuristics.

use searcher::Cost;

use crate::grid::MazeLocation;

/// Straight line distance to `goal`.
pub fn euclidean_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> Cost {
    move |location| {
        let dr = location.row as f64 - goal.row as f64;
        let dc = location.column as f64 - goal.column as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

/// Taxicab distance to `goal`. Never overestimates on a grid
/// where moves are vertical or horizontal.
pub fn manhattan_distance(goal: MazeLocation) -> impl Fn(&MazeLocation) -> Cost {
    move |location| {
        let dr = (location.row as isize - goal.row as isize).abs();
        let dc = (location.column as isize - goal.column as isize).abs();
        (dr + dc) as Cost
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn distances() {
        let goal = MazeLocation::new(3, 4);
        let origin = MazeLocation::new(0, 0);

        assert_eq!(euclidean_distance(goal)(&origin), 5.0);
        assert_eq!(manhattan_distance(goal)(&origin), 7.0);

        let past = MazeLocation::new(6, 8);
        assert_eq!(manhattan_distance(goal)(&past), 7.0);
        assert_eq!(euclidean_distance(goal)(&goal), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let goal = MazeLocation::new(9, 9);
        let euclidean = euclidean_distance(goal);
        let manhattan = manhattan_distance(goal);

        for row in 0..10 {
            for column in 0..10 {
                let location = MazeLocation::new(row, column);
                assert!(euclidean(&location) <= manhattan(&location));
            }
        }
    }
}
