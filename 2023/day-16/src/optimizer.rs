use std::cmp::Reverse;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use rayon::prelude::*;

use crate::beam::{BeamState, Direction, Position};
use crate::error::{Malformation, Result};
use crate::grid::Grid;
use crate::simulator::Simulator;

/// How candidate entries are spread over threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Parallel,
    Sequential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestEntry {
    pub entry: BeamState,
    pub count: usize,
}

/// Every state on the edge of `grid` that points inwards.
///
/// Rows come first (left edge heading right, then right edge heading left),
/// followed by columns (top edge heading down, then bottom edge heading up).
/// A corner shows up once for each edge it lies on.
pub fn boundary_entries(grid: &Grid) -> Vec<BeamState> {
    let last_x = grid.width() as i32 - 1;
    let last_y = grid.height() as i32 - 1;

    let rows = (0..grid.height() as i32).flat_map(|y| {
        [
            BeamState::new(Position::new(0, y), Direction::Right),
            BeamState::new(Position::new(last_x, y), Direction::Left),
        ]
    });
    let columns = (0..grid.width() as i32).flat_map(|x| {
        [
            BeamState::new(Position::new(x, 0), Direction::Down),
            BeamState::new(Position::new(x, last_y), Direction::Up),
        ]
    });

    rows.chain(columns).collect()
}

/// Finds the boundary entry that energizes the most cells.
#[derive(Debug, Clone, Copy)]
pub struct Optimizer<'g> {
    simulator: Simulator<'g>,
    strategy: Strategy,
    progress: bool,
}

impl<'g> Optimizer<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            simulator: Simulator::new(grid),
            strategy: Strategy::default(),
            progress: false,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Draw a progress bar on stderr while candidates are simulated.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Simulates every boundary entry. Ties go to the candidate listed first
    /// by [`boundary_entries`], whatever the strategy.
    #[tracing::instrument(skip(self), fields(strategy = ?self.strategy))]
    pub fn best_entry(&self) -> Result<BestEntry> {
        let candidates = boundary_entries(self.simulator.grid());
        let bar = if self.progress {
            ProgressBar::new(candidates.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let simulator = self.simulator;
        let counts: Vec<usize> = match self.strategy {
            Strategy::Parallel => candidates
                .par_iter()
                .progress_with(bar.clone())
                .map(|&entry| simulator.energized_count(entry))
                .collect::<Result<_>>()?,
            Strategy::Sequential => candidates
                .iter()
                .progress_with(bar.clone())
                .map(|&entry| simulator.energized_count(entry))
                .collect::<Result<_>>()?,
        };
        bar.finish_and_clear();

        let best = counts
            .iter()
            .enumerate()
            .max_by_key(|&(index, &count)| (count, Reverse(index)))
            .map(|(index, &count)| BestEntry {
                entry: candidates[index],
                count,
            })
            .ok_or(Malformation::Empty)?;

        tracing::debug!(
            candidates = candidates.len(),
            count = best.count,
            entry = ?best.entry,
            "best boundary entry"
        );
        Ok(best)
    }

    pub fn best_count(&self) -> Result<usize> {
        self.best_entry().map(|best| best.count)
    }
}
