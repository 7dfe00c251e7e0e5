extern crate failure;
#[macro_use]
extern crate tracing;

pub mod bmp;
pub mod read;
pub mod eval;

use std::fmt;

use failure::Fail;

pub use bmp::Screen;
pub use eval::solve;

/// Screen width used by the command-line driver when none is given.
pub const DEFAULT_WIDTH: usize = 50;

/// Screen height used by the command-line driver when none is given.
pub const DEFAULT_HEIGHT: usize = 6;

/// Convenience alias with a default error type.
pub type Result<T, E=Error> = std::result::Result<T, E>;

/// Everything that can abort a run. Nothing is retried or skipped.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    MalformedInstruction { text: String },
    OutOfBounds { axis: Axis, value: usize, limit: usize },
    EmptyScreen { width: usize, height: usize },
    ScreenTooLarge { width: usize, height: usize },

    /// Wraps whatever went wrong on line `number` of a program.
    Line { number: usize, text: String, cause: Box<Error> },
}

/// Names the dimension an out-of-bounds access overran.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

/// One drawing instruction, as read from a single line of input.
///
/// Instructions are applied in input order and never commute in general:
/// a fill followed by a rotation is not the same as the reverse.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Instr {
    /// Light the top-left `width` x `height` rectangle.
    FillRect { width: usize, height: usize },

    /// Shift row `y` right by `amount`, wrapping at the screen width.
    RotateRow { y: usize, amount: usize },

    /// Shift column `x` down by `amount`, wrapping at the screen height.
    RotateColumn { x: usize, amount: usize },
}

impl Error {
    /// Strips line context, leaving the error that actually aborted the run.
    pub fn root(&self) -> &Error {
        match self {
            &Error::Line { ref cause, .. } => cause.root(),
            other => other,
        }
    }

    #[inline]
    fn out_of_bounds(axis: Axis, value: usize, limit: usize) -> Self {
        Error::OutOfBounds { axis, value, limit }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::MalformedInstruction { ref text } => {
                write!(f, "Malformed instruction {:?}", text)
            },

            &Error::OutOfBounds { axis, value, limit } => {
                write!(f, "{} coordinate {} out of bounds (limit {})", axis, value, limit)
            },

            &Error::EmptyScreen { width, height } => {
                write!(f, "Screen dimensions {}x{} must be positive", width, height)
            },

            &Error::ScreenTooLarge { width, height } => {
                write!(f, "Screen dimensions {}x{} are too large", width, height)
            },

            &Error::Line { number, ref text, ref cause } => {
                write!(f, "Line {} ({:?}): {}", number, text, cause)
            },
        }
    }
}

// Written out by hand: the derive can't name a boxed cause.
impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        match self {
            &Error::Line { ref cause, .. } => Some(&**cause),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Axis::X => f.write_str("x"),
            &Axis::Y => f.write_str("y"),
        }
    }
}

#[cfg(test)]
fn screen(width: usize, height: usize, program: &[&str]) -> Result<Screen> {
    solve(width, height, &program.join("\n"))
}

#[test]
fn example_program() {
    let screen = screen(7, 3, &[
        "rect 3x2",
        "rotate column x=1 by 1",
        "rotate row y=0 by 4",
        "rotate column x=1 by 1",
    ]).unwrap();

    assert_eq!(screen.render(), ".#..#.#\n#.#....\n.#.....\n");
    assert_eq!(screen.lit_count(), 6);
}

#[test]
fn example_program_intermediate_states() {
    let mut screen = Screen::new(7, 3).unwrap();

    screen.execute("rect 3x2").unwrap();
    assert_eq!(screen.render(), "###....\n###....\n.......\n");

    screen.execute("rotate column x=1 by 1").unwrap();
    assert_eq!(screen.render(), "#.#....\n###....\n.#.....\n");

    screen.execute("rotate row y=0 by 4").unwrap();
    assert_eq!(screen.render(), "....#.#\n###....\n.#.....\n");
}

#[test]
fn single_pixel() {
    let screen = screen(7, 3, &["rect 1x1"]).unwrap();

    assert!(screen.get(0, 0).unwrap());
    assert_eq!(screen.lit_count(), 1);
    assert_eq!(screen.render(), "#......\n.......\n.......\n");
}

#[test]
fn oversized_rotations_wrap() {
    let row = screen(7, 3, &["rect 1x1", "rotate row y=0 by 15"]).unwrap();
    assert_eq!(row.render(), ".#.....\n.......\n.......\n");

    let column = screen(7, 3, &["rect 1x1", "rotate column x=0 by 7"]).unwrap();
    assert_eq!(column.render(), ".......\n#......\n.......\n");
}

#[test]
fn order_matters() {
    let fill_first = screen(7, 3, &["rect 3x2", "rotate column x=1 by 1"]).unwrap();
    let rotate_first = screen(7, 3, &["rotate column x=1 by 1", "rect 3x2"]).unwrap();

    assert_ne!(fill_first, rotate_first);
    assert_eq!(rotate_first.render(), "###....\n###....\n.......\n");
}

#[test]
fn failures_keep_their_kind() {
    let err = screen(7, 3, &["rect 1x1", "scale 2x3"]).unwrap_err();
    match err.root() {
        &Error::MalformedInstruction { ref text } => assert_eq!(text, "scale 2x3"),
        other => panic!("unexpected error {:?}", other),
    }

    let err = screen(7, 3, &["rotate row y=9 by 1"]).unwrap_err();
    assert_eq!(*err.root(), Error::out_of_bounds(Axis::Y, 9, 3));
}

#[test]
fn line_errors_chain_to_their_cause() {
    let err = screen(7, 3, &["rotate row y=9 by 1"]).unwrap_err();

    let cause = err.cause().unwrap();
    assert_eq!(cause.to_string(), "y coordinate 9 out of bounds (limit 3)");
    assert!(cause.cause().is_none());

    let chain: Vec<String> = failure::Error::from(err)
        .iter_chain()
        .map(|fail| fail.to_string())
        .collect();
    assert_eq!(chain.len(), 2);
}

#[test]
fn lit_count_agrees_with_pixels() {
    let screen = screen(7, 3, &[
        "rect 4x3",
        "rotate row y=1 by 5",
        "rotate column x=6 by 2",
        "rect 2x1",
        "rotate row y=2 by 100",
    ]).unwrap();

    let mut lit = 0;
    for y in 0..screen.height() {
        for x in 0..screen.width() {
            if screen.get(x, y).unwrap() {
                lit += 1;
            }
        }
    }

    assert_eq!(screen.lit_count(), lit);
}
