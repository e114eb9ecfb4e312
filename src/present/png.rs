use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{
    foundation::error::{RevealError, RevealResult},
    layout::fit::Placement,
    present::{Presenter, ResampleHint, compose_letterboxed},
};

pub const DEFAULT_BACKGROUND: [u8; 4] = [0x0b, 0x0f, 0x14, 255];

/// Writes every presented frame as `frame_00000.png`, `frame_00001.png`, ...
#[derive(Debug)]
pub struct PngSequencePresenter {
    dir: PathBuf,
    background: [u8; 4],
    next_index: u64,
    max_frames: Option<u64>,
}

impl PngSequencePresenter {
    pub fn new(dir: impl Into<PathBuf>) -> RevealResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            background: DEFAULT_BACKGROUND,
            next_index: 0,
            max_frames: None,
        })
    }

    /// Refuse further frames once `n` have been written, which stops the engine.
    pub fn with_max_frames(mut self, n: u64) -> Self {
        self.max_frames = Some(n);
        self
    }

    pub fn with_background(mut self, rgba: [u8; 4]) -> Self {
        self.background = rgba;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn frames_written(&self) -> u64 {
        self.next_index
    }
}

impl Presenter for PngSequencePresenter {
    fn present(
        &mut self,
        frame: &RgbaImage,
        placement: &Placement,
        hint: ResampleHint,
    ) -> RevealResult<()> {
        if self.max_frames.is_some_and(|max| self.next_index >= max) {
            return Err(RevealError::presentation("frame budget exhausted"));
        }
        let canvas = compose_letterboxed(frame, placement, hint, self.background);
        let path = self.dir.join(format!("frame_{:05}.png", self.next_index));
        canvas
            .save(&path)
            .map_err(|e| RevealError::presentation(format!("write '{}': {e}", path.display())))?;
        self.next_index += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/png.rs"]
mod tests;
