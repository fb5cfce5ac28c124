//! Parsing of rectangle lists like `{"0 292 399 307", "48 192 351 207"}` into land grids

use common::debug;

use crate::{cell::Cell, coord::Coord, error::ParseError, grid::Grid, rectangle::Rectangle};

/// Reads a file with one input line per row, skipping blank rows
pub fn read_inputs_from_file(file_path: &str) -> std::io::Result<Vec<String>> {
    let input_string = std::fs::read_to_string(file_path)?;

    Ok(input_string
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect())
}

/// Parses `input` into a `max_width` x `max_height` grid with every rectangle marked barren
///
/// Rectangles are applied in input order. Either the complete grid or the first violation found
/// is returned.
pub fn parse_input(
    input: &str,
    max_width: usize,
    max_height: usize,
) -> Result<Grid<Cell>, ParseError> {
    let rectangles = parse_rectangles(input, max_width, max_height)?;

    let mut grid = Grid::new(max_width, max_height, Cell::Fertile);
    for Rectangle { x1, y1, x2, y2 } in rectangles {
        if let Err(e) = grid.fill_rectangle(Cell::Barren, x1, y1, x2, y2) {
            unreachable!("Validated rectangle does not fit onto grid: '{}'", e)
        }
    }

    Ok(grid)
}

/// Validates `input` and returns its rectangles in input order
///
/// Checks run in a fixed order and the first failing one is reported.
pub fn parse_rectangles(
    input: &str,
    max_width: usize,
    max_height: usize,
) -> Result<Vec<Rectangle>, ParseError> {
    if max_width == 0 || max_height == 0 {
        return Err(ParseError::EmptyParcel {
            width: max_width,
            height: max_height,
        });
    }
    // largest usable index on each axis
    let max_x = max_width as i64 - 1;
    let max_y = max_height as i64 - 1;

    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let input = input.strip_prefix('{').ok_or(ParseError::MissingOpenBrace)?;
    let input = input.strip_suffix('}').ok_or(ParseError::MissingCloseBrace)?;
    // catches a dangling ", " or any other garbage after the last rectangle
    if !input.ends_with('"') {
        return Err(ParseError::TrailingGarbage);
    }

    let rectangles = input
        .split(", ")
        .map(|token| parse_rectangle(token, max_x, max_y))
        .collect::<Result<Vec<Rectangle>, ParseError>>()?;

    debug!("Parsed {} rectangle(s)", rectangles.len());
    Ok(rectangles)
}

fn parse_rectangle(token: &str, max_x: i64, max_y: i64) -> Result<Rectangle, ParseError> {
    let content = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| ParseError::BadRectangleDelimiters(token.to_string()))?;

    let sides = content.split(' ').collect::<Vec<&str>>();
    if sides.len() != 4 {
        return Err(ParseError::WrongCoordinateCount(sides.len()));
    }

    let sides = sides
        .into_iter()
        .map(|side| {
            side.parse::<Coord>()
                .map_err(|_| ParseError::NotAnInteger(side.to_string()))
        })
        .collect::<Result<Vec<Coord>, ParseError>>()?;
    let (x1, y1, x2, y2) = (sides[0], sides[1], sides[2], sides[3]);

    check_in_range("x1", x1, max_x)?;
    check_in_range("y1", y1, max_y)?;
    check_in_range("x2", x2, max_x)?;
    check_not_below("x2", x2, x1)?;
    check_in_range("y2", y2, max_y)?;
    check_not_below("y2", y2, y1)?;

    Ok(Rectangle { x1, y1, x2, y2 })
}

fn check_in_range(name: &'static str, value: Coord, max: i64) -> Result<(), ParseError> {
    if value < 0 || value as i64 > max {
        Err(ParseError::CoordinateOutOfRange { name, value, max })
    } else {
        Ok(())
    }
}

fn check_not_below(name: &'static str, value: Coord, min: Coord) -> Result<(), ParseError> {
    if value < min {
        Err(ParseError::InvertedRectangle { name, value, min })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_rejected {
        ($input: expr, $error: pat) => {
            let result = parse_input($input, 400, 600);
            assert!(
                matches!(result, Err($error)),
                "{:?} gave {:?}",
                $input,
                result.map(|grid| grid.count(&Cell::Barren))
            );
        };
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_input("", 400, 600), Err(ParseError::EmptyInput));
        assert_eq!(
            ParseError::EmptyInput.to_string(),
            "the entered string was empty"
        );
    }

    #[test]
    fn test_empty_parcel() {
        assert_eq!(
            parse_input(r#"{"0 0 0 0"}"#, 0, 600),
            Err(ParseError::EmptyParcel {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_must_begin_with_curly_brace() {
        assert_rejected!(r#""111 111 222 222"}"#, ParseError::MissingOpenBrace);
    }

    #[test]
    fn test_must_end_with_curly_brace() {
        assert_rejected!(r#"{"111 111 222 222""#, ParseError::MissingCloseBrace);
        assert_rejected!("{", ParseError::MissingCloseBrace);
    }

    #[test]
    fn test_trailing_garbage() {
        assert_rejected!(r#"{"111 111 399 222", }"#, ParseError::TrailingGarbage);
        assert_rejected!(r#"{"111 111 399 222" }"#, ParseError::TrailingGarbage);
        assert_rejected!("{}", ParseError::TrailingGarbage);
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        assert_rejected!(r#" {"1 1 2 2"}"#, ParseError::MissingOpenBrace);
        assert_rejected!(r#"{"1 1 2 2"} "#, ParseError::MissingCloseBrace);
    }

    #[test]
    fn test_bad_rectangle_delimiters() {
        assert_rejected!(r#"{"1 1 2 2", 3 3 4 4"}"#, ParseError::BadRectangleDelimiters(_));
        assert_rejected!(r#"{"}"#, ParseError::BadRectangleDelimiters(_));
    }

    #[test]
    fn test_not_four_numbers_in_a_rectangle() {
        assert_eq!(
            parse_input(r#"{"111 111 222"}"#, 400, 600),
            Err(ParseError::WrongCoordinateCount(3))
        );
        assert_rejected!(r#"{"1  1 2 2"}"#, ParseError::WrongCoordinateCount(5));
    }

    #[test]
    fn test_rectangles_not_comma_space_delimited() {
        assert_rejected!(
            r#"{"111 111 222 222","111 222 333 444"}"#,
            ParseError::WrongCoordinateCount(7)
        );
    }

    #[test]
    fn test_not_an_integer() {
        assert_eq!(
            parse_input(r#"{"111 111 4OO 222"}"#, 400, 600),
            Err(ParseError::NotAnInteger("4OO".to_string()))
        );
        assert_rejected!(r#"{"1 1 2 99999999999"}"#, ParseError::NotAnInteger(_));
    }

    #[test]
    fn test_width_exceeds_bounds() {
        assert_eq!(
            parse_input(r#"{"111 111 400 222"}"#, 400, 600),
            Err(ParseError::CoordinateOutOfRange {
                name: "x2",
                value: 400,
                max: 399
            })
        );
    }

    #[test]
    fn test_height_exceeds_bounds() {
        assert_rejected!(
            r#"{"111 111 222 600"}"#,
            ParseError::CoordinateOutOfRange { name: "y2", .. }
        );
    }

    #[test]
    fn test_start_coordinates_out_of_bounds() {
        assert_rejected!(
            r#"{"-1 0 5 5"}"#,
            ParseError::CoordinateOutOfRange { name: "x1", .. }
        );
        assert_rejected!(
            r#"{"0 600 5 5"}"#,
            ParseError::CoordinateOutOfRange { name: "y1", .. }
        );
    }

    #[test]
    fn test_inverted_rectangle() {
        assert_eq!(
            parse_input(r#"{"111 111 50 222"}"#, 400, 600),
            Err(ParseError::InvertedRectangle {
                name: "x2",
                value: 50,
                min: 111
            })
        );
        assert_rejected!(
            r#"{"111 300 222 222"}"#,
            ParseError::InvertedRectangle { name: "y2", .. }
        );
    }

    #[test]
    fn test_negative_end_coordinate() {
        assert_rejected!(
            r#"{"111 111 -222 222"}"#,
            ParseError::CoordinateOutOfRange { name: "x2", .. }
        );
    }

    #[test]
    fn test_first_violation_wins() {
        assert_rejected!(
            r#"{"1 1 2 2", "1 1 2", "a b c d"}"#,
            ParseError::WrongCoordinateCount(3)
        );
    }

    #[test]
    fn test_valid_single_rectangle() {
        let grid = parse_input(r#"{"111 111 222 222"}"#, 400, 600).unwrap();
        assert_eq!(grid.count(&Cell::Barren), 112 * 112);
        assert_eq!(grid.get(111, 111), Some(&Cell::Barren));
        assert_eq!(grid.get(110, 111), Some(&Cell::Fertile));
    }

    #[test]
    fn test_rectangle_touching_the_edge() {
        assert!(parse_input(r#"{"0 0 399 599"}"#, 400, 600).is_ok());
    }

    #[test]
    fn test_zero_width_rectangle() {
        let grid = parse_input(r#"{"5 0 5 9"}"#, 10, 10).unwrap();
        assert_eq!(grid.count(&Cell::Barren), 10);
    }

    #[test]
    fn test_full_coverage_leaves_no_fertile_land() {
        let grid = parse_input(r#"{"0 0 399 599"}"#, 400, 600).unwrap();
        assert_eq!(grid.count(&Cell::Fertile), 0);
    }

    #[test]
    fn test_overlapping_rectangles() {
        let rectangles = parse_rectangles(
            r#"{"48 192 351 207", "48 392 351 407", "120 52 135 547", "260 52 275 547"}"#,
            400,
            600,
        )
        .unwrap();
        assert_eq!(rectangles.len(), 4);
        assert_eq!(rectangles[2], Rectangle::new(120, 52, 135, 547));

        let grid = parse_input(
            r#"{"48 192 351 207", "48 392 351 407", "120 52 135 547", "260 52 275 547"}"#,
            400,
            600,
        )
        .unwrap();
        let overlap = 4 * 16 * 16;
        let barren = rectangles.iter().map(Rectangle::area).sum::<u64>() - overlap;
        assert_eq!(grid.count(&Cell::Barren) as u64, barren);
    }
}
