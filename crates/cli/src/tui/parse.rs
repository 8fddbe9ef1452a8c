//! Parsing helpers for recorded move strings.

use tictactoe_core::square::Square;

/// Parses a concatenated move string like "b2a1c3" into a list of squares.
///
/// Reads two characters at a time, interpreting each pair as a square in
/// algebraic notation.
pub fn parse_move_string(input: &str) -> Result<Vec<Square>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if !input.len().is_multiple_of(2) {
        return Err("Input length must be even (each move is 2 characters)".to_string());
    }

    let mut moves = Vec::new();
    for i in (0..input.len()).step_by(2) {
        let move_str = &input[i..i + 2];
        match move_str.parse::<Square>() {
            Ok(sq) => moves.push(sq),
            Err(e) => {
                return Err(format!("Invalid move at position {}: {e}", (i / 2) + 1));
            }
        }
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_string_valid() {
        let moves = parse_move_string("b2a1c3").unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0], Square::B2);
        assert_eq!(moves[1], Square::A1);
        assert_eq!(moves[2], Square::C3);
    }

    #[test]
    fn test_parse_move_string_trims_whitespace() {
        let moves = parse_move_string("  a1b2  ").unwrap();
        assert_eq!(moves, vec![Square::A1, Square::B2]);
    }

    #[test]
    fn test_parse_move_string_empty() {
        assert!(parse_move_string("").is_err());
        assert!(parse_move_string("   ").is_err());
    }

    #[test]
    fn test_parse_move_string_odd_length() {
        assert!(parse_move_string("b2a").is_err());
    }

    #[test]
    fn test_parse_move_string_invalid_square() {
        let err = parse_move_string("b2d1").unwrap_err();
        assert!(err.contains("position 2"), "unexpected error: {err}");
    }
}
