use std::fmt;

use super::*;

/// A fixed-size grid of lit/unlit pixels, bit-packed in row-major order.
///
/// Every pixel starts out unlit. The grid is never resized, and all
/// coordinates are checked against it before any read or write.
#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    bytes: Box<[u8]>,
    width: usize,
    height: usize,
}

/// Row-major offset of a single pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Bit(usize);

impl Screen {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyScreen { width, height });
        }

        let len = width.checked_mul(height)
            .and_then(|pixels| pixels.checked_add(7))
            .ok_or(Error::ScreenTooLarge { width, height })? / 8;

        Ok(Screen {
            bytes: vec![0; len].into(),
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let bit = self.bit(x, y)?;
        Ok(self.read(bit))
    }

    pub fn set(&mut self, x: usize, y: usize) -> Result<()> {
        let bit = self.bit(x, y)?;
        self.write(bit, true);
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Result<()> {
        let bit = self.bit(x, y)?;
        self.write(bit, false);
        Ok(())
    }

    /// Number of lit pixels on the whole screen.
    pub fn lit_count(&self) -> usize {
        // Padding bits past the last pixel are never written.
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Lights every pixel with `x < width` and `y < height`.
    pub fn fill_rect(&mut self, width: usize, height: usize) -> Result<()> {
        if width > self.width {
            return Err(Error::out_of_bounds(Axis::X, width - 1, self.width));
        }

        if height > self.height {
            return Err(Error::out_of_bounds(Axis::Y, height - 1, self.height));
        }

        for y in 0..height {
            for x in 0..width {
                let bit = self.offset(x, y);
                self.write(bit, true);
            }
        }

        Ok(())
    }

    /// Shifts row `y` right by `amount`, wrapping around the width.
    pub fn rotate_row(&mut self, y: usize, amount: usize) -> Result<()> {
        if y >= self.height {
            return Err(Error::out_of_bounds(Axis::Y, y, self.height));
        }

        let width = self.width;
        let shift = amount % width;

        // Every write below reads from this snapshot, never from the row.
        let row: Vec<bool> = (0..width)
            .map(|x| self.read(self.offset(x, y)))
            .collect();

        for (x, lit) in row.into_iter().enumerate() {
            let bit = self.offset((x + shift) % width, y);
            self.write(bit, lit);
        }

        Ok(())
    }

    /// Shifts column `x` down by `amount`, wrapping around the height.
    pub fn rotate_column(&mut self, x: usize, amount: usize) -> Result<()> {
        if x >= self.width {
            return Err(Error::out_of_bounds(Axis::X, x, self.width));
        }

        let height = self.height;
        let shift = amount % height;

        let column: Vec<bool> = (0..height)
            .map(|y| self.read(self.offset(x, y)))
            .collect();

        for (y, lit) in column.into_iter().enumerate() {
            let bit = self.offset(x, (y + shift) % height);
            self.write(bit, lit);
        }

        Ok(())
    }

    /// One line per row, `#` for lit and `.` for unlit pixels.
    pub fn render(&self) -> String {
        let mut buf = String::with_capacity((self.width + 1) * self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                buf.push(if self.read(self.offset(x, y)) { '#' } else { '.' });
            }
            buf.push('\n');
        }

        buf
    }

    #[inline]
    fn bit(&self, x: usize, y: usize) -> Result<Bit> {
        if x >= self.width {
            return Err(Error::out_of_bounds(Axis::X, x, self.width));
        }

        if y >= self.height {
            return Err(Error::out_of_bounds(Axis::Y, y, self.height));
        }

        Ok(self.offset(x, y))
    }

    /// Callers must have checked `x` and `y` already.
    #[inline]
    fn offset(&self, x: usize, y: usize) -> Bit {
        debug_assert!(x < self.width && y < self.height);
        Bit(y * self.width + x)
    }

    #[inline]
    fn read(&self, bit: Bit) -> bool {
        let (bit, i) = bit.unpack();
        (self.bytes[i] & bit) != 0
    }

    #[inline]
    fn write(&mut self, bit: Bit, value: bool) {
        let (bit, i) = bit.unpack();
        if value {
            self.bytes[i] |= bit;
        } else {
            self.bytes[i] &= !bit;
        }
    }
}

impl Bit {
    #[inline]
    fn unpack(self) -> (u8, usize) {
        let i = self.0;
        let x = 1 << (i % 8);
        let y = i / 8;
        (x, y)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}
