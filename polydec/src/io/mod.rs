use std::io::BufRead;

use itertools::Itertools;

use crate::errors::DecompError;
use crate::geometry::Point;

/// Reads an ordered coordinate sequence from text input, one `x,y` pair per
/// line. Surrounding whitespace is tolerated and blank lines are skipped,
/// anything else that does not parse as two integers is rejected.
pub fn parse_points(reader: impl BufRead) -> Result<Vec<Point>, DecompError> {
    let mut points = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| DecompError::InvalidInput(format!("line {}: {e}", i + 1)))?;
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_pair(&line, i + 1)?);
    }

    if points.is_empty() {
        return Err(DecompError::InvalidInput(
            "input contains no coordinate pairs".to_string(),
        ));
    }
    Ok(points)
}

/// Convenience wrapper around [`parse_points`] for in-memory input
pub fn parse_points_str(input: &str) -> Result<Vec<Point>, DecompError> {
    parse_points(input.as_bytes())
}

fn parse_pair(line: &str, line_nr: usize) -> Result<Point, DecompError> {
    let fields = line.trim().split(',').collect_vec();
    let &[x, y] = fields.as_slice() else {
        return Err(DecompError::InvalidInput(format!(
            "line {line_nr}: expected two comma separated coordinates, got {:?}",
            line.trim()
        )));
    };
    Ok(Point(parse_coord(x, line_nr)?, parse_coord(y, line_nr)?))
}

fn parse_coord(token: &str, line_nr: usize) -> Result<i32, DecompError> {
    token.trim().parse().map_err(|_| {
        DecompError::InvalidInput(format!(
            "line {line_nr}: {:?} is not an integer coordinate",
            token.trim()
        ))
    })
}
