//! Terminal rendering and input parsing.
//!
//! Pure string building and parsing only; the binary owns the actual
//! stdin/stdout plumbing.

use noughts_core::Board;

/// Renders the board with coordinate headers and box-drawing borders.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("\n    0   1   2 \n");
    out.push_str("  ┌───┬───┬───┐\n");
    for (i, row) in board.cells().iter().enumerate() {
        out.push_str(&format!("{i} │ {} │ {} │ {} │\n", row[0], row[1], row[2]));
        if i < 2 {
            out.push_str("  ├───┼───┼───┤\n");
        } else {
            out.push_str("  └───┴───┴───┘\n");
        }
    }
    out
}

/// Parses a "row col" input line into a coordinate pair.
///
/// Accepts any integers; the server is the authority on whether they
/// land on the board.
#[must_use]
pub fn parse_coords(input: &str) -> Option<(i32, i32)> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Mark;

    #[test]
    fn test_render_empty_board() {
        let rendered = render_board(&Board::new());
        assert!(rendered.contains("    0   1   2 "));
        assert!(rendered.contains("┌───┬───┬───┐"));
        assert!(rendered.contains("└───┴───┴───┘"));
        // Three data rows, labelled 0..2.
        for i in 0..3 {
            assert!(rendered.contains(&format!("{i} │   │   │   │")));
        }
    }

    #[test]
    fn test_render_marks_in_place() {
        let mut board = Board::new();
        board.apply(Mark::X, 0, 0).unwrap();
        board.apply(Mark::O, 1, 2).unwrap();

        let rendered = render_board(&board);
        assert!(rendered.contains("0 │ X │   │   │"));
        assert!(rendered.contains("1 │   │   │ O │"));
        assert!(rendered.contains("2 │   │   │   │"));
    }

    #[test]
    fn test_parse_coords_valid() {
        assert_eq!(parse_coords("1 1"), Some((1, 1)));
        assert_eq!(parse_coords("  0\t2 "), Some((0, 2)));
        // Out-of-range numbers still parse; the server rejects them.
        assert_eq!(parse_coords("-1 9"), Some((-1, 9)));
    }

    #[test]
    fn test_parse_coords_invalid() {
        assert_eq!(parse_coords(""), None);
        assert_eq!(parse_coords("1"), None);
        assert_eq!(parse_coords("a b"), None);
        assert_eq!(parse_coords("1 2 3"), None);
        assert_eq!(parse_coords("1,2"), None);
    }
}
