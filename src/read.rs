use std::fmt;

use super::*;

/// Parses one line of input. Tokens must match exactly: no extra
/// whitespace, no case folding, no signs on numbers.
pub fn from_line(line: &str) -> Result<Instr> {
    let malformed = || Error::MalformedInstruction { text: line.to_owned() };

    if let Some(dims) = line.strip_prefix("rect ") {
        let (width, height) = pair(dims, "x").ok_or_else(malformed)?;
        return Ok(Instr::FillRect { width, height });
    }

    if let Some(args) = line.strip_prefix("rotate row y=") {
        let (y, amount) = pair(args, " by ").ok_or_else(malformed)?;
        return Ok(Instr::RotateRow { y, amount });
    }

    if let Some(args) = line.strip_prefix("rotate column x=") {
        let (x, amount) = pair(args, " by ").ok_or_else(malformed)?;
        return Ok(Instr::RotateColumn { x, amount });
    }

    Err(malformed())
}

/// Parses a whole program, one instruction per line. The first bad line
/// aborts parsing; the error names it by its 1-based line number.
pub fn from_string(input: &str) -> Result<Vec<Instr>> {
    input.lines().enumerate().map(|(i, line)| {
        from_line(line).map_err(|cause| Error::Line {
            number: i + 1,
            text: line.to_owned(),
            cause: Box::new(cause),
        })
    }).collect()
}

pub fn to_string(input: &[Instr]) -> String {
    let mut buf = String::new();

    for instr in input.iter() {
        buf.push_str(&instr.to_string());
        buf.push('\n');
    }

    buf
}

fn pair(args: &str, sep: &str) -> Option<(usize, usize)> {
    let (lhs, rhs) = args.split_once(sep)?;
    Some((number(lhs)?, number(rhs)?))
}

fn number(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Instr::FillRect { width, height } => {
                write!(f, "rect {}x{}", width, height)
            },

            &Instr::RotateRow { y, amount } => {
                write!(f, "rotate row y={} by {}", y, amount)
            },

            &Instr::RotateColumn { x, amount } => {
                write!(f, "rotate column x={} by {}", x, amount)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(line: &str) {
        assert_eq!(
            from_line(line),
            Err(Error::MalformedInstruction { text: line.to_owned() }),
            "{:?} should not parse", line,
        );
    }

    #[test]
    fn recognized_forms() {
        assert_eq!(from_line("rect 3x2"), Ok(Instr::FillRect { width: 3, height: 2 }));
        assert_eq!(from_line("rect 0x0"), Ok(Instr::FillRect { width: 0, height: 0 }));
        assert_eq!(from_line("rotate row y=0 by 4"), Ok(Instr::RotateRow { y: 0, amount: 4 }));
        assert_eq!(from_line("rotate column x=1 by 1"), Ok(Instr::RotateColumn { x: 1, amount: 1 }));
        assert_eq!(from_line("rotate row y=12 by 200"), Ok(Instr::RotateRow { y: 12, amount: 200 }));
    }

    #[test]
    fn unknown_commands() {
        malformed("scale 2x3");
        malformed("");
        malformed("rect");
        malformed("rotate diagonal x=1 by 1");
        malformed("RECT 3x2");
        malformed("Rotate row y=0 by 4");
    }

    #[test]
    fn whitespace_is_exact() {
        malformed(" rect 3x2");
        malformed("rect 3x2 ");
        malformed("rect  3x2");
        malformed("rect 3 x 2");
        malformed("rotate row y=0  by 4");
        malformed("rotate row y = 0 by 4");
        malformed("rotate column x=1 by 1\t");
    }

    #[test]
    fn bad_numbers() {
        malformed("rect 3x");
        malformed("rect x2");
        malformed("rect 3x2x1");
        malformed("rect 3X2");
        malformed("rect +3x2");
        malformed("rotate row y=-1 by 4");
        malformed("rotate row y=0 by -4");
        malformed("rotate column x=a by 1");
        malformed("rotate column x=1 by 99999999999999999999999999");
    }

    #[test]
    fn row_and_column_prefixes_are_not_interchangeable() {
        malformed("rotate row x=0 by 4");
        malformed("rotate column y=1 by 1");
    }

    #[test]
    fn program_reports_failing_line() {
        let err = from_string("rect 3x2\nrotate row y=0 by 4\nscale 2x3\nrect 1x1").unwrap_err();

        assert_eq!(err, Error::Line {
            number: 3,
            text: "scale 2x3".to_owned(),
            cause: Box::new(Error::MalformedInstruction { text: "scale 2x3".to_owned() }),
        });
    }

    #[test]
    fn canonical_text() {
        let program = "rect 3x2\nrotate column x=1 by 1\nrotate row y=0 by 4\n";
        let instrs = from_string(program).unwrap();

        assert_eq!(instrs.len(), 3);
        assert_eq!(to_string(&instrs), program);
    }
}
