use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// A value on the settings screen that can be stepped up & down
pub(crate) trait Adjustable {
    fn increase(&mut self);
    fn decrease(&mut self);
    fn minimize(&mut self);
    fn maximize(&mut self);
    fn can_increase(&self) -> bool;
    fn can_decrease(&self) -> bool;
}

/// Time between movements of the snake, in milliseconds.  Always within
/// [`TickInterval::MINIMUM`] and [`TickInterval::MAXIMUM`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(from = "u64")]
pub(crate) struct TickInterval(u64);

impl TickInterval {
    pub(crate) const MINIMUM: TickInterval = TickInterval(50);
    pub(crate) const MAXIMUM: TickInterval = TickInterval(500);

    /// Amount by which a single increase or decrease changes the interval
    pub(crate) const STEP: u64 = 10;

    /// Construct a `TickInterval`, forcing `millis` into range
    pub(crate) fn clamped(millis: u64) -> TickInterval {
        TickInterval(millis.clamp(Self::MINIMUM.0, Self::MAXIMUM.0))
    }

    pub(crate) fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> TickInterval {
        TickInterval(100)
    }
}

impl From<u64> for TickInterval {
    fn from(millis: u64) -> TickInterval {
        TickInterval::clamped(millis)
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{} ms", self.0))
    }
}

impl Adjustable for TickInterval {
    fn increase(&mut self) {
        *self = TickInterval::clamped(self.0.saturating_add(Self::STEP));
    }

    fn decrease(&mut self) {
        *self = TickInterval::clamped(self.0.saturating_sub(Self::STEP));
    }

    fn minimize(&mut self) {
        *self = Self::MINIMUM;
    }

    fn maximize(&mut self) {
        *self = Self::MAXIMUM;
    }

    fn can_increase(&self) -> bool {
        *self < Self::MAXIMUM
    }

    fn can_decrease(&self) -> bool {
        *self > Self::MINIMUM
    }
}
