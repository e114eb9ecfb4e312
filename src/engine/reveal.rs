//! The reveal engine: a single-owner state machine that renders one frame per tick.
//!
//! `Idle` breathes the source under a grid until a result arrives, `Revealing` walks the
//! mosaic block sequence while the grid fades and detail cross-fades in, and `Final`
//! flashes once and then holds the full-detail frame.
//!
//! The engine never sleeps or spawns. Whatever drives it (see
//! [`Scheduler`](crate::engine::scheduler::Scheduler)) calls [`RevealEngine::tick`] at the
//! frame rate and [`RevealEngine::reveal_step`] at the reveal cadence, from one thread.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use image::{DynamicImage, RgbaImage};
use tokio::time::Instant;

use crate::{
    animation::{breathe::breathing_factor, ease::Ease, sequence::RevealSequence},
    effects::{
        composite::{brighten_in_place, crossfade_in_place},
        flash::apply_flash_in_place,
        grid::{GridStyle, overlay_grid_in_place},
        mosaic::pixelate,
    },
    engine::{
        config::EngineConfig,
        state::{CompletionLatch, EngineState, FlashCountdown, RevealCursor},
    },
    foundation::{
        core::{Viewport, to_opaque_rgba8},
        error::RevealResult,
    },
    layout::fit::{Placement, fit_exact, fit_within},
    present::{Presenter, ResampleHint},
};

/// Eased progress below which the mosaic is shown without any true-detail blend.
const DETAIL_BLEND_START: f64 = 0.1;

/// Cooperative cancellation shared between the engine and its handles.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Presented,
    /// Rendered but not drawn (zero-area viewport or nothing cached yet).
    Skipped,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    Advanced(usize),
    /// The sequence is exhausted and the engine entered `Final`. The step timer must stop.
    Finished,
    /// Not revealing (idle, final or stopped). The step timer must stop.
    Inactive,
}

/// Per-frame mix parameters of the progressive reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMix {
    pub block: u32,
    pub eased: f64,
    pub grid_alpha: u8,
    /// Weight of the full-detail image over the mosaic, `0..=1`.
    pub detail_blend: f32,
}

impl RevealMix {
    pub fn at(sequence: &RevealSequence, cursor: RevealCursor, base_grid_alpha: u8) -> Self {
        let eased = Ease::SmoothStep.apply(cursor.progress());
        let grid_alpha = (f64::from(base_grid_alpha) * (1.0 - eased)).floor() as u8;
        let detail_blend = if eased > DETAIL_BLEND_START {
            Ease::Linear.apply((eased - DETAIL_BLEND_START) / (1.0 - DETAIL_BLEND_START)) as f32
        } else {
            0.0
        };
        Self {
            block: sequence.block_at(cursor.index()),
            eased,
            grid_alpha,
            detail_blend,
        }
    }
}

pub struct RevealEngine {
    config: EngineConfig,
    frame_interval_ms: u32,
    sequence: RevealSequence,
    preview: RgbaImage,
    reveal_base: Option<RgbaImage>,
    state: EngineState,
    cursor: RevealCursor,
    flash: FlashCountdown,
    completion: CompletionLatch,
    viewport: Viewport,
    placement: Placement,
    last_frame: Option<RgbaImage>,
    presenter: Box<dyn Presenter + Send>,
    stop: StopFlag,
    started: Instant,
}

impl RevealEngine {
    #[tracing::instrument(skip_all, fields(src_w = source.width(), src_h = source.height()))]
    pub fn new(
        source: &DynamicImage,
        config: EngineConfig,
        viewport: Viewport,
        presenter: Box<dyn Presenter + Send>,
    ) -> RevealResult<Self> {
        config.validate()?;
        let frame_interval_ms = config.frame_rate()?.frame_interval_ms();
        let sequence = RevealSequence::from_start_block(config.start_block_px);
        let preview = fit_within(&to_opaque_rgba8(source), config.max_preview);
        let placement = Placement::fit(preview.width(), preview.height(), viewport);
        tracing::debug!(
            preview_w = preview.width(),
            preview_h = preview.height(),
            steps = sequence.len(),
            "reveal engine ready"
        );

        Ok(Self {
            cursor: RevealCursor::new(sequence.last_index()),
            config,
            frame_interval_ms,
            sequence,
            preview,
            reveal_base: None,
            state: EngineState::Idle,
            flash: FlashCountdown::default(),
            completion: CompletionLatch::default(),
            viewport,
            placement,
            last_frame: None,
            presenter,
            stop: StopFlag::default(),
            started: Instant::now(),
        })
    }

    /// Invoked once, on the first tick after the finale flash has fully decayed.
    pub fn with_completion(mut self, on_complete: impl FnOnce() + Send + 'static) -> Self {
        self.completion = CompletionLatch::new(Box::new(on_complete));
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn cursor(&self) -> RevealCursor {
        self.cursor
    }

    pub fn flash_left_ms(&self) -> u32 {
        self.flash.left_ms()
    }

    pub fn sequence(&self) -> &RevealSequence {
        &self.sequence
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn preview_dimensions(&self) -> (u32, u32) {
        self.preview.dimensions()
    }

    pub fn last_frame(&self) -> Option<&RgbaImage> {
        self.last_frame.as_ref()
    }

    /// Time since construction; the clock of the breathing pulse.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_interval_ms))
    }

    pub fn reveal_step_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.config.reveal_step_ms))
    }

    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_raised()
    }

    pub fn is_complete(&self) -> bool {
        self.completion.has_fired()
    }

    /// Idempotent. Nothing is rendered, presented or called back afterwards.
    pub fn stop(&mut self) {
        if !self.stop.is_raised() {
            tracing::debug!(state = %self.state, "reveal engine stopped");
        }
        self.stop.raise();
    }

    /// Accepts the enhanced image once. Later calls (or calls after `stop`) are ignored
    /// and return `false`.
    #[tracing::instrument(skip_all, fields(w = result.width(), h = result.height()))]
    pub fn supply_result(&mut self, result: &DynamicImage) -> bool {
        if self.is_stopped() {
            tracing::warn!("result supplied after stop; ignoring");
            return false;
        }
        if !self.state.can_advance_to(EngineState::Revealing) {
            tracing::warn!(state = %self.state, "result already supplied; ignoring");
            return false;
        }
        let (w, h) = self.preview.dimensions();
        self.reveal_base = Some(fit_exact(&to_opaque_rgba8(result), w, h));
        self.cursor = RevealCursor::new(self.sequence.last_index());
        self.flash = FlashCountdown::default();
        self.transition(EngineState::Revealing);
        self.refresh_cached_frame();
        true
    }

    /// One frame: decay the flash, render for the current state, present, and fire the
    /// completion latch once the finale has settled.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if self.is_stopped() {
            return TickOutcome::Stopped;
        }
        self.flash.decay(self.frame_interval_ms);

        let frame = match self.render_frame(elapsed) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(error = %err, "frame render failed; keeping previous frame");
                return TickOutcome::Skipped;
            }
        };
        self.last_frame = Some(frame);

        let outcome = self.draw_cached();
        if outcome == TickOutcome::Stopped {
            return outcome;
        }

        if self.state == EngineState::Final && !self.flash.is_active() && self.completion.fire() {
            tracing::info!("reveal complete");
        }
        outcome
    }

    /// Advance the reveal by one block size. Reaching the second-to-last step ends the
    /// reveal: the final block-size-1 mosaic is never drawn, the flash starts instead.
    pub fn reveal_step(&mut self) -> RevealStep {
        if self.is_stopped() || self.state != EngineState::Revealing {
            return RevealStep::Inactive;
        }
        let index = self.cursor.advance();
        if index + 1 >= self.sequence.len() {
            self.flash.arm(self.config.flash_ms);
            self.transition(EngineState::Final);
            self.refresh_cached_frame();
            return RevealStep::Finished;
        }
        tracing::debug!(index, block = self.sequence.block_at(index), "reveal step");
        RevealStep::Advanced(index)
    }

    /// Re-place and redraw the cached frame without rendering a new one.
    pub fn resize(&mut self, viewport: Viewport) -> TickOutcome {
        if self.is_stopped() {
            return TickOutcome::Stopped;
        }
        self.viewport = viewport;
        let (w, h) = self.preview.dimensions();
        self.placement = Placement::fit(w, h, viewport);
        self.draw_cached()
    }

    pub fn reveal_mix(&self) -> RevealMix {
        RevealMix::at(&self.sequence, self.cursor, self.config.grid_alpha)
    }

    fn transition(&mut self, next: EngineState) {
        debug_assert!(self.state.can_advance_to(next));
        tracing::debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }

    /// Re-render the cached frame for the current state so a resize before the next tick
    /// never redraws a frame from the previous state.
    fn refresh_cached_frame(&mut self) {
        if self.last_frame.is_none() {
            return;
        }
        match self.render_frame(self.elapsed()) {
            Ok(frame) => self.last_frame = Some(frame),
            Err(err) => {
                tracing::warn!(error = %err, "frame render failed; dropping cached frame");
                self.last_frame = None;
            }
        }
    }

    fn detail_base(&self) -> &RgbaImage {
        self.reveal_base.as_ref().unwrap_or(&self.preview)
    }

    fn render_frame(&self, elapsed: Duration) -> RevealResult<RgbaImage> {
        match self.state {
            EngineState::Idle => {
                let mut frame = self.preview.clone();
                let factor = breathing_factor(
                    self.config.breathe_strength,
                    self.config.breathe_hz,
                    elapsed.as_secs_f64(),
                );
                brighten_in_place(&mut frame, factor);
                let grid = self.grid_style(self.config.start_block_px, self.config.grid_alpha);
                overlay_grid_in_place(&mut frame, grid);
                Ok(frame)
            }
            EngineState::Revealing => {
                let base = self.detail_base();
                let mix = self.reveal_mix();
                let mut frame = pixelate(base, mix.block);
                overlay_grid_in_place(&mut frame, self.grid_style(mix.block, mix.grid_alpha));
                if mix.detail_blend > 0.0 {
                    crossfade_in_place(&mut frame, base, mix.detail_blend)?;
                }
                apply_flash_in_place(&mut frame, self.flash.left_ms(), self.config.flash_ms);
                Ok(frame)
            }
            EngineState::Final => {
                let mut frame = self.detail_base().clone();
                apply_flash_in_place(&mut frame, self.flash.left_ms(), self.config.flash_ms);
                Ok(frame)
            }
        }
    }

    fn grid_style(&self, spacing: u32, alpha: u8) -> GridStyle {
        GridStyle {
            spacing,
            alpha,
            min_spacing: self.config.grid_min_block,
        }
    }

    fn draw_cached(&mut self) -> TickOutcome {
        if self.is_stopped() {
            return TickOutcome::Stopped;
        }
        let Some(frame) = self.last_frame.as_ref() else {
            return TickOutcome::Skipped;
        };
        if self.viewport.is_degenerate() {
            return TickOutcome::Skipped;
        }
        let hint = match self.state {
            EngineState::Revealing => ResampleHint::Nearest,
            EngineState::Idle | EngineState::Final => ResampleHint::Smooth,
        };
        match self.presenter.present(frame, &self.placement, hint) {
            Ok(()) => TickOutcome::Presented,
            Err(err) => {
                tracing::warn!(error = %err, "presentation failed; stopping reveal engine");
                self.stop();
                TickOutcome::Stopped
            }
        }
    }
}

impl fmt::Debug for RevealEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealEngine")
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .field("flash", &self.flash)
            .field("viewport", &self.viewport)
            .field("preview", &self.preview.dimensions())
            .field("stopped", &self.is_stopped())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/reveal.rs"]
mod tests;
