use std::sync::{Arc, Mutex};

use image::RgbaImage;

use crate::{
    foundation::error::{RevealError, RevealResult},
    layout::fit::Placement,
    present::{Presenter, ResampleHint},
};

#[derive(Clone, Debug)]
pub struct PresentedFrame {
    pub frame: RgbaImage,
    pub placement: Placement,
    pub hint: ResampleHint,
}

/// Shared record of everything a [`MemoryPresenter`] was given.
#[derive(Clone, Debug, Default)]
pub struct FrameLog {
    inner: Arc<Mutex<Vec<PresentedFrame>>>,
}

impl FrameLog {
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<PresentedFrame> {
        self.lock().last().cloned()
    }

    pub fn snapshot(&self) -> Vec<PresentedFrame> {
        self.lock().clone()
    }

    fn push(&self, f: PresentedFrame) {
        self.lock().push(f);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PresentedFrame>> {
        // A poisoned log still holds valid frames.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Keeps presented frames in memory; can be told to fail after `n` presentations.
#[derive(Debug, Default)]
pub struct MemoryPresenter {
    log: FrameLog,
    fail_after: Option<usize>,
}

impl MemoryPresenter {
    pub fn new() -> (Self, FrameLog) {
        let p = Self::default();
        let log = p.log.clone();
        (p, log)
    }

    pub fn failing_after(n: usize) -> (Self, FrameLog) {
        let (mut p, log) = Self::new();
        p.fail_after = Some(n);
        (p, log)
    }
}

impl Presenter for MemoryPresenter {
    fn present(
        &mut self,
        frame: &RgbaImage,
        placement: &Placement,
        hint: ResampleHint,
    ) -> RevealResult<()> {
        if self.fail_after.is_some_and(|n| self.log.len() >= n) {
            return Err(RevealError::presentation("memory surface closed"));
        }
        self.log.push(PresentedFrame {
            frame: frame.clone(),
            placement: *placement,
            hint,
        });
        Ok(())
    }
}
