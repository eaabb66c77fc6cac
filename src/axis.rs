/// Wraparound position counter over the inclusive coordinate range `[min, max]`.
///
/// Stepping past `max` lands on `min` and stepping before `min` lands on `max`.
/// An empty range (`max < min`) is an invariant violation and is only checked
/// in debug builds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Axis {
    min: i32,
    len: i32,
    index: i32,
}

impl Axis {
    /// Creates an axis positioned at `min`.
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        debug_assert!(max >= min, "axis range must be non-empty");

        Self {
            min,
            len: max - min + 1,
            index: 0,
        }
    }

    /// Creates an axis positioned at `value`, clamped into the range.
    #[must_use]
    pub fn starting_at(min: i32, max: i32, value: i32) -> Self {
        let mut axis = Self::new(min, max);
        axis.index = value.clamp(min, max) - min;
        axis
    }

    /// Advances one step with wraparound and returns the new value.
    pub fn advance(&mut self) -> i32 {
        self.index = (self.index + 1) % self.len;
        self.current()
    }

    /// Retreats one step with wraparound and returns the new value.
    pub fn retreat(&mut self) -> i32 {
        self.index = (self.index + self.len - 1) % self.len;
        self.current()
    }

    #[must_use]
    pub fn current(self) -> i32 {
        self.min + self.index
    }

    #[must_use]
    pub fn max(self) -> i32 {
        self.min + self.len - 1
    }

    /// Returns true when `value` is a legal coordinate on this axis.
    #[must_use]
    pub fn contains(self, value: i32) -> bool {
        (self.min..=self.max()).contains(&value)
    }
}
