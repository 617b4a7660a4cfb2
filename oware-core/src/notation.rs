//! External text notations: board positions, single moves, and
//! alternating move sequences. Parsing is regex-driven, matching the
//! small marker-regex style used for FEN-like notations elsewhere in the
//! pack; conversion itself is plain arithmetic.

use std::fmt::Write as _;

use lazy_static::lazy_static;
use regex::Regex;

use crate::board::{Board, Move, Side};
use crate::error::NotationError;

lazy_static! {
    static ref BOARD_RE: Regex = Regex::new(r"^((?:[1-4]?[0-9]-){14})(S|N)$").unwrap();
    static ref MOVES_RE: Regex =
        Regex::new(r"^(([A-F]([a-f][A-F])*[a-f]?)|([a-f]([A-F][a-f])*[A-F]?))$").unwrap();
}

pub fn to_board_notation(board: &Board, turn: Side) -> String {
    let mut out = String::with_capacity(48);
    for value in board.0.iter() {
        write!(out, "{}-", value).unwrap();
    }
    out.push_str(match turn {
        Side::South => "S",
        Side::North => "N",
    });
    out
}

pub fn to_position(input: &str) -> Result<(Board, Side), NotationError> {
    let expected = "14 dash-separated integers followed by -S or -N";
    let caps = BOARD_RE
        .captures(input)
        .ok_or_else(|| NotationError::InvalidNotation {
            input: input.to_string(),
            expected,
        })?;

    let mut houses = [0i32; 14];
    for (i, token) in caps[1].trim_end_matches('-').split('-').enumerate() {
        houses[i] = token.parse().map_err(|_| NotationError::InvalidNotation {
            input: input.to_string(),
            expected,
        })?;
    }

    let turn = match &caps[2] {
        "S" => Side::South,
        "N" => Side::North,
        _ => unreachable!("regex only captures S or N"),
    };

    Ok((Board(houses), turn))
}

pub fn to_move_notation(mv: Move) -> char {
    let house = mv as u8;
    if house < 6 {
        (b'A' + house) as char
    } else {
        (b'a' + house - 6) as char
    }
}

pub fn to_move(letter: char) -> Result<Move, NotationError> {
    let code = letter as u32;
    if (65..=70).contains(&code) {
        Ok((code - 65) as Move)
    } else if (97..=102).contains(&code) {
        Ok((code - 91) as Move)
    } else {
        Err(NotationError::InvalidNotation {
            input: letter.to_string(),
            expected: "A-F or a-f",
        })
    }
}

pub fn to_moves_notation(moves: &[Move]) -> String {
    moves.iter().copied().map(to_move_notation).collect()
}

pub fn to_moves(input: &str) -> Result<Vec<Move>, NotationError> {
    if !MOVES_RE.is_match(input) {
        return Err(NotationError::InvalidNotation {
            input: input.to_string(),
            expected: "an alternating-side letter sequence",
        });
    }
    input.chars().map(to_move).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_notation_round_trips() {
        let board = Board([4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 0, 0]);
        let text = to_board_notation(&board, Side::South);
        assert_eq!(text, "4-4-4-4-4-4-4-4-4-4-4-4-0-0-S");
        assert_eq!(to_position(&text).unwrap(), (board, Side::South));
    }

    #[test]
    fn board_notation_rejects_garbage() {
        assert!(to_position("not a position").is_err());
        assert!(to_position("4-4-4-4-4-4-4-4-4-4-4-4-0-0-X").is_err());
    }

    #[test]
    fn move_letters_cover_both_rows() {
        assert_eq!(to_move_notation(0), 'A');
        assert_eq!(to_move_notation(5), 'F');
        assert_eq!(to_move_notation(6), 'a');
        assert_eq!(to_move_notation(11), 'f');
        assert_eq!(to_move('A').unwrap(), 0);
        assert_eq!(to_move('f').unwrap(), 11);
        assert!(to_move('z').is_err());
    }

    #[test]
    fn move_sequence_round_trips() {
        let moves: Vec<Move> = vec![0, 6, 1, 7];
        let text = to_moves_notation(&moves);
        assert_eq!(text, "AaBb");
        assert_eq!(to_moves(&text).unwrap(), moves);
    }

    #[test]
    fn move_sequence_rejects_same_side_twice_in_a_row() {
        assert!(to_moves("AB").is_err());
        assert!(to_moves("Aab").is_err());
    }
}

