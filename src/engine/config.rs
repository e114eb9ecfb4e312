use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::{Fps, Viewport},
    error::{RevealError, RevealResult},
};

/// Tunables of the reveal animation. Missing JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub fps: u32,
    pub start_block_px: u32,
    pub breathe_strength: f64,
    pub breathe_hz: f64,
    pub grid_alpha: u8,
    pub grid_min_block: u32,
    pub reveal_step_ms: u32,
    pub flash_ms: u32,
    /// The source is shrunk to fit these bounds once; all rendering happens at that size.
    pub max_preview: Viewport,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            start_block_px: 32,
            breathe_strength: 0.035,
            breathe_hz: 0.55,
            grid_alpha: 70,
            grid_min_block: 6,
            reveal_step_ms: 90,
            flash_ms: 170,
            max_preview: Viewport::new(980, 720),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> RevealResult<Self> {
        let cfg: Self = serde_json::from_str(s).context("parse engine config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> RevealResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read engine config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> RevealResult<()> {
        if self.fps == 0 || self.fps > 1000 {
            return Err(RevealError::validation("fps must be in 1..=1000"));
        }
        if self.reveal_step_ms == 0 {
            return Err(RevealError::validation("reveal_step_ms must be > 0"));
        }
        if !self.breathe_strength.is_finite() || !self.breathe_hz.is_finite() {
            return Err(RevealError::validation(
                "breathe_strength and breathe_hz must be finite",
            ));
        }
        if self.max_preview.is_degenerate() {
            return Err(RevealError::validation("max_preview must be non-zero"));
        }
        Ok(())
    }

    pub fn frame_rate(&self) -> RevealResult<Fps> {
        Fps::new(self.fps, 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
