use crate::grid::Grid;

/// Receives control from a running search at fixed points so an external renderer can redraw the
/// grid. All calls are synchronous: the search only resumes once the observer returns. The grid is
/// lent read-only, so an observer cannot reclassify cells.
pub trait Observer {
    /// Called once per expanded cell and once per cell revealed as part of the path.
    fn draw(&mut self, grid: &Grid);

    /// Checked at every iteration boundary. Returning `true` ends the run without reconstructing a
    /// path.
    fn should_abort(&mut self) -> bool {
        false
    }

    /// User-facing notification, such as the message shown when no path exists.
    fn message(&mut self, _text: &str) {}
}

/// Any `FnMut(&Grid)` closure can be used as a draw hook that never aborts.
impl<F> Observer for F
where
    F: FnMut(&Grid),
{
    fn draw(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Observer that ignores every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn draw(&mut self, _grid: &Grid) {}
}

/// Records what a run reported. Useful in tests and for replaying a search frame by frame.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// Text rendering of the grid at every draw call.
    pub frames: Vec<String>,
    pub messages: Vec<String>,
    /// Abort once this many frames have been drawn.
    pub abort_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }
    pub fn aborting_after(frames: usize) -> Recorder {
        Recorder {
            abort_after: Some(frames),
            ..Recorder::default()
        }
    }
}

impl Observer for Recorder {
    fn draw(&mut self, grid: &Grid) {
        self.frames.push(grid.to_string());
    }
    fn should_abort(&mut self) -> bool {
        self.abort_after.is_some_and(|n| self.frames.len() >= n)
    }
    fn message(&mut self, text: &str) {
        self.messages.push(text.to_owned());
    }
}
