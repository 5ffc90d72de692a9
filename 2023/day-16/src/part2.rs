use miette::*;

use crate::grid::Grid;
use crate::optimizer::Optimizer;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;

    let best = Optimizer::new(&grid).best_entry()?;

    Ok(best.count.to_string())
}
