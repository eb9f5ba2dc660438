// @module: Fit-or-flush line accumulation

/// What happened to a unit pushed into the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The unit opened an empty line
    Started,
    /// The unit was appended to the current line
    Appended,
    /// The current line was flushed and the unit opened a new one
    Flushed,
}

/// Collects atomic units into lines no longer than a budget
///
/// A unit that does not fit flushes the current line and starts the next
/// one. A unit longer than the whole budget still gets a line of its own.
#[derive(Debug)]
pub struct LineAccumulator<'s> {
    max_len: usize,
    separator: &'s str,
    separator_len: usize,
    current: String,
    current_len: usize,
    lines: Vec<String>,
}

impl<'s> LineAccumulator<'s> {
    /// Create an accumulator; `separator` is inserted between units on a line
    pub fn new(max_len: usize, separator: &'s str) -> Self {
        Self {
            max_len,
            separator,
            separator_len: separator.chars().count(),
            current: String::new(),
            current_len: 0,
            lines: Vec::new(),
        }
    }

    /// Check whether a unit of `unit_len` characters fits on the current line
    pub fn fits(&self, unit_len: usize) -> bool {
        if self.current.is_empty() {
            return unit_len <= self.max_len;
        }
        self.current_len + self.separator_len + unit_len <= self.max_len
    }

    /// Place one unit of `unit_len` rendered characters
    pub fn push(&mut self, unit: &str, unit_len: usize) -> Placement {
        if self.current.is_empty() {
            self.start_line(unit, unit_len);
            return Placement::Started;
        }

        if self.fits(unit_len) {
            self.current.push_str(self.separator);
            self.current.push_str(unit);
            self.current_len += self.separator_len + unit_len;
            Placement::Appended
        } else {
            self.flush();
            self.start_line(unit, unit_len);
            Placement::Flushed
        }
    }

    /// Length of the line being built
    pub fn current_len(&self) -> usize {
        self.current_len
    }

    /// Lines completed so far, excluding the one being built
    pub fn completed(&self) -> &[String] {
        &self.lines
    }

    /// Flush the residual line and return all lines
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.lines
    }

    fn start_line(&mut self, unit: &str, unit_len: usize) {
        self.current.push_str(unit);
        self.current_len = unit_len;
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
        self.current_len = 0;
    }
}
