use std::fmt;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::beam::{BeamState, Direction, Position};
use crate::error::{Error, Result};
use crate::grid::{position_from_index, Grid};

type Cells = BitVec<usize, Lsb0>;

/// Cells lit up by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Energized {
    width: usize,
    cells: Cells,
    visited_states: usize,
}

impl Energized {
    pub fn count(&self) -> usize {
        self.cells.count_ones()
    }

    /// Distinct (position, direction) states the beams went through.
    pub fn visited_states(&self) -> usize {
        self.visited_states
    }

    pub fn contains(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 || position.x as usize >= self.width {
            return false;
        }
        let index = position.y as usize * self.width + position.x as usize;
        self.cells.get(index).is_some_and(|bit| *bit)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter_ones()
            .map(|index| position_from_index(index, self.width))
    }
}

impl fmt::Display for Energized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|bit| if *bit { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n");
        f.write_str(&rendered)
    }
}

/// Traces beams through a borrowed grid. Holds no per-run state, so one
/// simulator can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'g> {
    grid: &'g Grid,
}

impl<'g> Simulator<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Follows every beam spawned from `start` until all of them have left
    /// the grid or are retracing a state already seen.
    #[tracing::instrument(level = "trace", skip(self), fields(width = self.grid.width(), height = self.grid.height()))]
    pub fn run(&self, start: BeamState) -> Result<Energized> {
        if !self.grid.is_inside(start.position) {
            return Err(Error::InvalidStart { state: start });
        }

        let area = self.grid.area();
        // One bit per (cell, direction); a beam entering a state twice would loop.
        let mut visited = bitvec![usize, Lsb0; 0; area * Direction::COUNT];
        let mut cells = bitvec![usize, Lsb0; 0; area];
        let mut visited_states = 0;

        let mut stack: Vec<BeamState> = Vec::with_capacity(self.grid.width() + self.grid.height());
        stack.push(start);

        while let Some(state) = stack.pop() {
            let index = self.grid.index_of(state.position)?;
            let slot = index * Direction::COUNT + state.direction.index();
            if visited[slot] {
                continue;
            }
            visited.set(slot, true);
            visited_states += 1;
            cells.set(index, true);

            let tile = self.grid.tile_at_index(index);
            for &direction in tile.outgoing(state.direction).as_slice() {
                let next = state.step(direction);
                if self.grid.is_inside(next.position) {
                    stack.push(next);
                }
            }
        }

        let energized = Energized {
            width: self.grid.width(),
            cells,
            visited_states,
        };
        tracing::trace!(
            energized = energized.count(),
            visited_states,
            "beam settled"
        );
        Ok(energized)
    }

    pub fn energized_count(&self, start: BeamState) -> Result<usize> {
        self.run(start).map(|energized| energized.count())
    }
}
