use grid_search::{observer::Observer, Algorithm, Grid, Session, DEFAULT_GRID_SIZE, DEFAULT_WIDTH};
use grid_util::point::Point;

/// Prints the last frame and any message, standing in for a window.
struct Console {
    frames: usize,
}

impl Observer for Console {
    fn draw(&mut self, _grid: &Grid) {
        self.frames += 1;
    }
    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}

// Replays what a user would do with the mouse and keyboard: place a start and an end, paint a
// wall, run a search, then close the gap in the wall and run again.
fn main() {
    let mut session = Session::new(DEFAULT_GRID_SIZE, DEFAULT_WIDTH).unwrap();
    session.paint(Point::new(5, 5)).unwrap();
    session.paint(Point::new(40, 45)).unwrap();
    for row in 0..DEFAULT_GRID_SIZE as i32 - 1 {
        session.paint(Point::new(row, 20)).unwrap();
    }

    let mut console = Console { frames: 0 };
    for algorithm in [Algorithm::astar(), Algorithm::bfs()] {
        session.reset_search();
        let outcome = session.run(&algorithm, &mut console).unwrap();
        if let Some(path) = outcome.path() {
            println!("{}: {} steps, {} frames", algorithm.name(), path.len(), console.frames);
        }
        console.frames = 0;
    }

    session.reset_search();
    session.paint(Point::new(DEFAULT_GRID_SIZE as i32 - 1, 20)).unwrap();
    session.run(&Algorithm::bfs(), &mut console).unwrap();
}
