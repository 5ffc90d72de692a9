use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;
use itertools::Itertools;
use strum::EnumIter;

use crate::beam::Position;
use crate::error::{Error, Malformation, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TileKind {
    /// `.`
    Empty,
    /// `/`
    MirrorForward,
    /// `\`
    MirrorBackward,
    /// `|`
    SplitterVertical,
    /// `-`
    SplitterHorizontal,
}

impl TileKind {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(TileKind::Empty),
            '/' => Some(TileKind::MirrorForward),
            '\\' => Some(TileKind::MirrorBackward),
            '|' => Some(TileKind::SplitterVertical),
            '-' => Some(TileKind::SplitterHorizontal),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::MirrorForward => '/',
            TileKind::MirrorBackward => '\\',
            TileKind::SplitterVertical => '|',
            TileKind::SplitterHorizontal => '-',
        }
    }
}

/// A dense, immutable grid of tiles stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Builds a grid from rows of tiles, rejecting empty or ragged input.
    pub fn new(rows: Vec<Vec<TileKind>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        if rows.iter().all(Vec::is_empty) {
            return Err(Malformation::Empty.into());
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(Malformation::UnequalRows {
                row,
                expected: width,
                found,
            }
            .into());
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(Malformation::TooLarge { width, height }.into());
        }

        Ok(Self {
            width,
            height,
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_inside(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    /// Row-major index of `position`.
    #[inline(always)]
    pub fn index_of(&self, position: Position) -> Result<usize> {
        if !self.is_inside(position) {
            return Err(Error::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok(position.y as usize * self.width + position.x as usize)
    }

    pub fn tile_at(&self, position: Position) -> Result<TileKind> {
        self.index_of(position).map(|index| self.tiles[index])
    }

    /// Tile at a row-major index previously obtained from [`Grid::index_of`].
    #[inline(always)]
    pub(crate) fn tile_at_index(&self, index: usize) -> TileKind {
        self.tiles[index]
    }

    /// Inverse of [`Grid::index_of`].
    pub fn position_of(&self, index: usize) -> Position {
        position_from_index(index, self.width)
    }
}

/// Position of a row-major `index` in a grid `width` cells wide.
#[inline(always)]
pub(crate) fn position_from_index(index: usize, width: usize) -> Position {
    Position::new((index % width) as i32, (index / width) as i32)
}

/// Splits the input into rows at `\n`. Every other character, `\r` included,
/// stays in its row.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<String>, extra::Err<Rich<'a, char>>> {
    none_of("\n")
        .repeated()
        .collect::<String>()
        .separated_by(just('\n'))
        .allow_trailing()
        .collect()
}

/// Maps one row of symbols to tiles, reporting the first unknown one.
fn tiles(line: usize, row: &str) -> Result<Vec<TileKind>, Malformation> {
    row.chars()
        .enumerate()
        .map(|(column, symbol)| {
            TileKind::from_symbol(symbol).ok_or(Malformation::UnrecognizedSymbol {
                symbol: Some(symbol),
                line,
                column: column + 1,
            })
        })
        .collect()
}

/// 1-based line and column of a byte offset.
fn locate(input: &str, offset: usize) -> (usize, usize) {
    let before = &input[..offset.min(input.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (line, before[line_start..].chars().count() + 1)
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut rows = parser().parse(input).into_result().map_err(|errors| {
            let (symbol, offset) = errors
                .first()
                .map(|e| (e.found().copied(), e.span().start))
                .unwrap_or((None, input.len()));
            let (line, column) = locate(input, offset);
            Error::from(Malformation::UnrecognizedSymbol {
                symbol,
                line,
                column,
            })
        })?;

        // A `\r` directly before `\n` belongs to the line break. The last row
        // has no `\n` after it, so a `\r` there is a stray symbol.
        let terminated = rows.len().saturating_sub(1);
        for row in &mut rows[..terminated] {
            if row.ends_with('\r') {
                row.pop();
            }
        }

        // Trailing newlines leave empty rows behind.
        while rows.last().is_some_and(String::is_empty) {
            rows.pop();
        }

        let rows = rows
            .iter()
            .enumerate()
            .map(|(y, row)| tiles(y + 1, row))
            .collect::<Result<Vec<_>, _>>()?;

        Grid::new(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .tiles
            .chunks(self.width)
            .map(|row| row.iter().map(|tile| tile.symbol()).collect::<String>())
            .join("\n");
        f.write_str(&rendered)
    }
}
