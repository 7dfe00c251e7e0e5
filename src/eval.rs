use super::*;

impl Screen {
    /// Applies one instruction to completion, or leaves the screen
    /// untouched and reports why it could not.
    #[inline]
    pub fn step(&mut self, instr: Instr) -> Result<()> {
        debug!(%instr, "applying instruction");

        match instr {
            Instr::FillRect { width, height } => {
                self.fill_rect(width, height)?;
            },

            Instr::RotateRow { y, amount } => {
                trace!(y, shift = amount % self.width(), "rotating row");
                self.rotate_row(y, amount)?;
            },

            Instr::RotateColumn { x, amount } => {
                trace!(x, shift = amount % self.height(), "rotating column");
                self.rotate_column(x, amount)?;
            },
        }

        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> Result<()> {
        let instr = read::from_line(line)?;
        self.step(instr)
    }

    /// Executes every line of `input` in order, stopping at the first
    /// failure. The screen is only meaningful if this returns `Ok`.
    pub fn run(&mut self, input: &str) -> Result<()> {
        for (i, line) in input.lines().enumerate() {
            self.execute(line).map_err(|cause| Error::Line {
                number: i + 1,
                text: line.to_owned(),
                cause: Box::new(cause),
            })?;
        }

        debug!(lit = self.lit_count(), "program finished");

        Ok(())
    }
}

/// Runs `input` on a fresh `width` x `height` screen.
pub fn solve(width: usize, height: usize, input: &str) -> Result<Screen> {
    let mut screen = Screen::new(width, height)?;
    screen.run(input)?;
    Ok(screen)
}
