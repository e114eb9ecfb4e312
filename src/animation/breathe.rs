use std::f64::consts::TAU;

/// Brightness multiplier of the idle "breathing" pulse at `elapsed_secs`.
pub fn breathing_factor(strength: f64, hz: f64, elapsed_secs: f64) -> f64 {
    1.0 + strength * (TAU * hz * elapsed_secs).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/breathe.rs"]
mod tests;
