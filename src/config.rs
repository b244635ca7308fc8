//! Parsing of the line-oriented maze configuration format.

use std::str::Lines;

use color_eyre::eyre::{ensure, eyre, Result, WrapErr as _};

use crate::types::Point;

/// Parsed maze configuration.
///
/// This structure holds every field extracted from a configuration file as a plain record.
/// Parsing and grid mutation are kept as separate phases on purpose: a malformed file fails
/// here before any grid exists, instead of leaving a partially populated grid behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
    /// Side length of the square maze.
    pub(crate) dimension: usize,
    /// Fixed obstacles in file order.
    pub(crate) obstacles: Vec<Point>,
    /// Number of random obstacles to place once the fixed layout is known.
    pub(crate) random_obstacles: usize,
    /// Start marker coordinate.
    pub(crate) start: Point,
    /// Goal marker coordinate.
    pub(crate) goal: Point,
}

impl Config {
    /// Parses a complete configuration from its textual form.
    ///
    /// This function consumes the line-oriented format strictly forward, one section at a
    /// time: a title line that is skipped, the dimension, a separator, the fixed obstacle
    /// list terminated by the first line that is not a coordinate pair, the random obstacle
    /// count, and the start and goal points with a separator line after each. Lines past
    /// the goal section are ignored.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - the input ends before a required section
    /// - the dimension or random obstacle count line is not a valid integer
    /// - the dimension is zero
    /// - the start or goal line is not a coordinate pair of the form `(row,col)`
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let mut lines = input.lines();

        let _title = next_section_line(&mut lines, "title")?;

        let dimension_line = next_section_line(&mut lines, "dimension")?;
        let dimension = parse_integer(dimension_line).wrap_err("invalid maze dimension")?;
        ensure!(dimension >= 1, "maze dimension must be at least 1");
        let _separator = next_section_line(&mut lines, "fixed obstacle list")?;

        // The terminating line of the obstacle list is the separator before the count.
        let mut obstacles = Vec::new();
        loop {
            let line = next_section_line(&mut lines, "random obstacle count")?;
            let Some(point) = parse_point(line) else {
                break;
            };
            obstacles.push(point);
        }

        let count_line = next_section_line(&mut lines, "random obstacle count")?;
        let random_obstacles =
            parse_integer(count_line).wrap_err("invalid random obstacle count")?;
        let _separator = lines.next();

        let start_line = next_section_line(&mut lines, "start point")?;
        let start = parse_point(start_line)
            .ok_or_else(|| eyre!("expected a start point '(row,col)', found '{start_line}'"))?;
        let _separator = lines.next();

        let goal_line = next_section_line(&mut lines, "goal point")?;
        let goal = parse_point(goal_line)
            .ok_or_else(|| eyre!("expected a goal point '(row,col)', found '{goal_line}'"))?;

        Ok(Self {
            dimension,
            obstacles,
            random_obstacles,
            start,
            goal,
        })
    }
}

/// Advances to the next line, naming the missing section on truncated input.
///
/// This function replaces the silent fallthrough the format would otherwise invite: a
/// configuration that ends early produces an explicit error naming the section that was
/// being read instead of feeding garbage values downstream.
fn next_section_line<'input>(lines: &mut Lines<'input>, section: &str) -> Result<&'input str> {
    lines
        .next()
        .ok_or_else(|| eyre!("configuration ended before the {section} section"))
}

/// Parses a single non-negative integer line.
///
/// # Errors
///
/// This function may return errors if the trimmed line is not a valid non-negative integer.
fn parse_integer(line: &str) -> Result<usize> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .wrap_err_with(|| format!("expected an integer, found '{trimmed}'"))
}

/// Attempts to parse a line as a coordinate pair of the form `(row,col)`.
///
/// This function returns `None` for any line that does not match the pattern, which is how
/// the obstacle list finds its end; a missing point is only fatal where the format requires
/// one. Whitespace around the line and around each integer is tolerated.
fn parse_point(line: &str) -> Option<Point> {
    let inner = line.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (row_text, col_text) = inner.split_once(',')?;
    let row = row_text.trim().parse().ok()?;
    let col = col_text.trim().parse().ok()?;

    Some(Point::new(row, col))
}
