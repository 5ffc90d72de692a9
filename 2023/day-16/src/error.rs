use miette::Diagnostic;
use thiserror::Error;

use crate::beam::{BeamState, Position};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("malformed grid: {0}")]
    #[diagnostic(
        code(day16::malformed_grid),
        help("rows must share one length and only contain `.`, `/`, `\\`, `|` or `-`")
    )]
    MalformedGrid(Malformation),

    #[error("position {position} lies outside the {width}x{height} grid")]
    #[diagnostic(code(day16::out_of_bounds))]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("beam cannot start at {} heading {}: outside the grid", .state.position, .state.direction)]
    #[diagnostic(code(day16::invalid_start))]
    InvalidStart { state: BeamState },
}

/// Why a grid was rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("grid has no tiles")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    UnequalRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized {} at line {line}, column {column}", describe(.symbol))]
    UnrecognizedSymbol {
        symbol: Option<char>,
        line: usize,
        column: usize,
    },

    #[error("{width}x{height} does not fit in 32-bit coordinates")]
    TooLarge { width: usize, height: usize },
}

impl From<Malformation> for Error {
    fn from(malformation: Malformation) -> Self {
        Error::MalformedGrid(malformation)
    }
}

fn describe(symbol: &Option<char>) -> String {
    match symbol {
        Some(symbol) => format!("symbol {symbol:?}"),
        None => String::from("end of input"),
    }
}
