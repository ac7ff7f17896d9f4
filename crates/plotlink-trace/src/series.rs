/// Starting value of the auto-increment x-cursor.
///
/// The instrument tool's step axis is 1-based and pre-incremented, so the
/// first appended sample lands at x = 2.0.
const INITIAL_X_CURSOR: f64 = 1.0;

/// The ordered (x, y) sample sequence backing one trace slot.
///
/// Two mutation styles, matching the two data-carrying commands:
/// - wholesale [`replace`](Series::replace) (PLOT)
/// - incremental [`append_auto`](Series::append_auto) with an
///   auto-incrementing x-cursor (BYTE_BUFFER)
///
/// The cursor persists across frames and is never reset by replace or
/// clear — repeated BYTE_BUFFER frames keep extending the same axis unless
/// the caller intervenes.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<(f64, f64)>,
    x_cursor: f64,
}

impl Series {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            x_cursor: INITIAL_X_CURSOR,
        }
    }

    /// Replace all samples wholesale. Prior content is dropped.
    pub fn replace(&mut self, samples: Vec<(f64, f64)>) {
        self.points = samples;
    }

    /// Append one sample, advancing the x-cursor by 1 first.
    pub fn append_auto(&mut self, y: f64) {
        self.x_cursor += 1.0;
        self.points.push((self.x_cursor, y));
    }

    /// Drop all samples. The x-cursor is left untouched.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current x-cursor position (the x of the most recently appended
    /// sample, or the initial value if nothing was ever appended).
    pub fn x_cursor(&self) -> f64 {
        self.x_cursor
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}
