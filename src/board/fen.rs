use super::error::FenError;
use super::{Board, BoardBuilder, Color, PieceKind, Square};

impl Board {
    /// Parse a board from the piece-placement field of a FEN string.
    ///
    /// Fields after the first are ignored here; see [`side_to_move`] for the
    /// second. Castling and en passant fields are accepted but have no
    /// meaning for these rules.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let mut builder = BoardBuilder::new();
        let mut ranks = 0;

        for (rank_idx, rank_str) in placement.split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            ranks = rank_idx + 1;
            let row = 8 - rank_idx as i32;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square::new(row, file as i32 + 1).ok_or(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                builder.place(square, color, kind)?;
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        if ranks < 8 {
            return Err(FenError::TooFewRanks { found: ranks });
        }
        Ok(builder.build()?)
    }

    /// Parse a board from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Piece-placement field of the position in FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (1..=8).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for column in 1..=8 {
                match Square::new(row, column).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.kind.to_fen_char(piece.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

/// Side to move from the second FEN field; White when the field is absent.
pub fn side_to_move(fen: &str) -> Result<Color, FenError> {
    match fen.split_whitespace().nth(1) {
        None | Some("w") => Ok(Color::White),
        Some("b") => Ok(Color::Black),
        Some(other) => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}
