use crate::beam::Direction;
use crate::grid::TileKind;

/// Directions a beam leaves a tile in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outgoing {
    Single(Direction),
    Split([Direction; 2]),
}

impl Outgoing {
    pub fn as_slice(&self) -> &[Direction] {
        match self {
            Outgoing::Single(direction) => std::slice::from_ref(direction),
            Outgoing::Split(directions) => directions,
        }
    }
}

impl TileKind {
    /// Where a beam arriving with `incoming` goes next.
    ///
    /// Mirrors turn the beam by 90 degrees. Splitters let a beam hit along
    /// their own axis pass untouched and split a perpendicular hit into both
    /// directions of that axis.
    #[inline(always)]
    pub fn outgoing(self, incoming: Direction) -> Outgoing {
        use Direction::*;
        use Outgoing::*;

        match (self, incoming) {
            (TileKind::Empty, direction) => Single(direction),

            (TileKind::MirrorForward, Right) => Single(Up),
            (TileKind::MirrorForward, Left) => Single(Down),
            (TileKind::MirrorForward, Up) => Single(Right),
            (TileKind::MirrorForward, Down) => Single(Left),

            (TileKind::MirrorBackward, Right) => Single(Down),
            (TileKind::MirrorBackward, Left) => Single(Up),
            (TileKind::MirrorBackward, Up) => Single(Left),
            (TileKind::MirrorBackward, Down) => Single(Right),

            (TileKind::SplitterVertical, Right | Left) => Split([Up, Down]),
            (TileKind::SplitterVertical, direction @ (Up | Down)) => Single(direction),

            (TileKind::SplitterHorizontal, Up | Down) => Split([Left, Right]),
            (TileKind::SplitterHorizontal, direction @ (Left | Right)) => Single(direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::iproduct;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use Direction::*;
    use TileKind::*;

    #[rstest]
    #[case(Empty, Right, &[Right])]
    #[case(Empty, Left, &[Left])]
    #[case(Empty, Up, &[Up])]
    #[case(Empty, Down, &[Down])]
    #[case(MirrorForward, Right, &[Up])]
    #[case(MirrorForward, Left, &[Down])]
    #[case(MirrorForward, Up, &[Right])]
    #[case(MirrorForward, Down, &[Left])]
    #[case(MirrorBackward, Right, &[Down])]
    #[case(MirrorBackward, Left, &[Up])]
    #[case(MirrorBackward, Up, &[Left])]
    #[case(MirrorBackward, Down, &[Right])]
    #[case(SplitterVertical, Right, &[Up, Down])]
    #[case(SplitterVertical, Left, &[Up, Down])]
    #[case(SplitterVertical, Up, &[Up])]
    #[case(SplitterVertical, Down, &[Down])]
    #[case(SplitterHorizontal, Right, &[Right])]
    #[case(SplitterHorizontal, Left, &[Left])]
    #[case(SplitterHorizontal, Up, &[Left, Right])]
    #[case(SplitterHorizontal, Down, &[Left, Right])]
    fn follows_table(
        #[case] tile: TileKind,
        #[case] incoming: Direction,
        #[case] expected: &[Direction],
    ) {
        assert_eq!(tile.outgoing(incoming).as_slice(), expected);
    }

    #[test]
    fn every_pair_has_one_or_two_exits() {
        for (tile, incoming) in iproduct!(TileKind::iter(), Direction::iter()) {
            let exits = tile.outgoing(incoming);
            let exits = exits.as_slice();
            assert!(
                (1..=2).contains(&exits.len()),
                "{tile:?} hit from {incoming:?} gave {exits:?}"
            );
            assert!(
                !exits.contains(&opposite(incoming)),
                "{tile:?} reflected a beam back"
            );
        }
    }

    #[test]
    fn mirrors_are_their_own_inverse() {
        for (mirror, incoming) in iproduct!([MirrorForward, MirrorBackward], Direction::iter()) {
            let Outgoing::Single(exit) = mirror.outgoing(incoming) else {
                panic!("{mirror:?} split a beam");
            };
            assert_eq!(mirror.outgoing(opposite(exit)), Outgoing::Single(opposite(incoming)));
        }
    }

    fn opposite(direction: Direction) -> Direction {
        match direction {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}
