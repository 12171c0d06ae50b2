//! The chess board: 64 slots, each empty or holding one piece.

use std::fmt;

use crate::color::Color;
use crate::error::SquareParseError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back rank layout from file A to file H.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A complete board position.
///
/// `Board` is a `Copy` value: every move produces a new board and the
/// original is never touched, so any number of snapshots can coexist.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Slot contents indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.setup_initial_position();
        board
    }

    /// Reset this board to the standard 32-piece opening layout.
    pub fn setup_initial_position(&mut self) {
        self.squares = [None; Square::COUNT];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            self.place(0, col, Piece::new(kind, Color::White));
            self.place(1, col, Piece::new(PieceKind::Pawn, Color::White));
            self.place(6, col, Piece::new(PieceKind::Pawn, Color::Black));
            self.place(7, col, Piece::new(kind, Color::Black));
        }
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(sq) = Square::new(row, col) {
            self.squares[sq.index()] = Some(piece);
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Look up a square by its algebraic name.
    ///
    /// `Ok(None)` means the square is empty; `Err` means the text does not
    /// name a square.
    pub fn get_piece(&self, square: &str) -> Result<Option<Piece>, SquareParseError> {
        let sq: Square = square.parse()?;
        Ok(self.piece_at(sq))
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put `piece` on `sq`, returning whatever was there before.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    /// Empty `sq`, returning whatever was there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterate over every occupied square in index order (A1, B1, ..., H8).
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the pieces of one color in index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color() == color)
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Return the square of the first king of `color` in index order.
    ///
    /// `None` when that king is not on the board (for example after it has
    /// been captured).
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as a console grid, rank 8 at the top.
///
/// White pieces are uppercase, black pieces lowercase, empty squares blank.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FILES: &str = "    A   B   C   D   E   F   G   H";
        let rule = format!("  {}", "-".repeat(33));

        writeln!(f, "{FILES}")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{rule}")?;
        for row in (0u8..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0u8..8 {
                let c = Square::new(row, col)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or(' ', Piece::to_char);
                write!(f, "| {c} ")?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{rule}")?;
        }
        writeln!(f, "{rule}")?;
        write!(f, "{FILES}")
    }
}
