use miette::*;

use crate::beam::BeamState;
use crate::grid::Grid;
use crate::simulator::Simulator;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;

    // The beam enters through the top-left corner heading right.
    let energized = Simulator::new(&grid).run(BeamState::default())?;
    tracing::debug!(
        energized = energized.count(),
        visited_states = energized.visited_states(),
        "beam settled"
    );

    Ok(energized.count().to_string())
}
