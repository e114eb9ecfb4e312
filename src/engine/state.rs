use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineState {
    #[default]
    Idle,
    Revealing,
    Final,
}

impl EngineState {
    /// Only forward moves are allowed; `Idle -> Final` skips the reveal and is refused.
    pub fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Revealing) | (Self::Revealing, Self::Final)
        )
    }

    /// One-line status shown to the user while the engine is in this state.
    pub fn status_label(self) -> &'static str {
        match self {
            Self::Idle => "ENHANCE: resolving...",
            Self::Revealing => "ENHANCE: applying detail passes...",
            Self::Final => "ENHANCE: complete.",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Revealing => "revealing",
            Self::Final => "final",
        };
        f.write_str(s)
    }
}

/// Index into the reveal sequence; it only moves forward and never passes `last`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealCursor {
    index: usize,
    last: usize,
}

impl RevealCursor {
    pub fn new(last: usize) -> Self {
        Self { index: 0, last }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1).min(self.last);
        self.index
    }

    /// `index / max(1, last)` in `[0, 1]`.
    pub fn progress(self) -> f64 {
        (self.index as f64 / self.last.max(1) as f64).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlashCountdown {
    left_ms: u32,
}

impl FlashCountdown {
    pub fn arm(&mut self, duration_ms: u32) {
        self.left_ms = duration_ms;
    }

    pub fn decay(&mut self, dt_ms: u32) {
        self.left_ms = self.left_ms.saturating_sub(dt_ms);
    }

    pub fn left_ms(self) -> u32 {
        self.left_ms
    }

    pub fn is_active(self) -> bool {
        self.left_ms > 0
    }
}

/// Fires the wrapped callback at most once.
#[derive(Default)]
pub struct CompletionLatch {
    callback: Option<Box<dyn FnOnce() + Send>>,
    fired: bool,
}

impl CompletionLatch {
    pub fn new(callback: Box<dyn FnOnce() + Send>) -> Self {
        Self {
            callback: Some(callback),
            fired: false,
        }
    }

    /// Returns `true` only on the call that actually fired.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        if let Some(cb) = self.callback.take() {
            cb();
        }
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl fmt::Debug for CompletionLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionLatch")
            .field("has_callback", &self.callback.is_some())
            .field("fired", &self.fired)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/state.rs"]
mod tests;
