use chrono::{DateTime, Utc};

/// Source of the `iat` timestamp stamped on signed tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Runtime configuration for a token codec.
#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    /// Clock used for the issued-at claim.
    pub clock: Clock,
}

impl CodecConfig {
    /// Construct config reading the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp every token with the same issued-at time.
    pub fn with_fixed_clock(mut self, at: DateTime<Utc>) -> Self {
        self.clock = Clock::Fixed(at);
        self
    }
}
