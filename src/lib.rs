//! revealfx renders the "enhance" reveal animation shown while an image-enhancement
//! service works on a crop.
//!
//! # Lifecycle
//!
//! 1. **Idle**: the source crop breathes (a slow brightness pulse) under a faint grid,
//!    for as long as the result takes, possibly forever.
//! 2. **Revealing**: once the result is supplied it resolves from a coarse mosaic down to
//!    full detail along a precomputed block-size sequence, while the grid fades and true
//!    detail cross-fades in.
//! 3. **Final**: a short white flash, one completion callback, then a static frame.
//!
//! [`RevealEngine`] is the synchronous state machine; [`Scheduler`] drives it on a tokio
//! task with a frame timer and an independent reveal-step timer, and [`EngineHandle`] is
//! the thread-safe way to feed it results, resizes and stop requests.
//!
//! Frames are opaque RGBA8 [`image::RgbaImage`]s handed to a [`Presenter`] together with
//! a [`Placement`] that centres and scales them in the current viewport.
#![forbid(unsafe_code)]

pub mod animation;
pub mod effects;
pub mod engine;
pub mod foundation;
pub mod layout;
pub mod present;

pub use animation::ease::Ease;
pub use animation::sequence::RevealSequence;
pub use engine::config::EngineConfig;
pub use engine::reveal::{RevealEngine, RevealMix, RevealStep, StopFlag, TickOutcome};
pub use engine::scheduler::{EngineCommand, EngineHandle, Scheduler};
pub use engine::state::{CompletionLatch, EngineState, FlashCountdown, RevealCursor};
pub use foundation::core::{Fps, Viewport};
pub use foundation::error::{RevealError, RevealResult};
pub use layout::fit::Placement;
pub use present::memory::{FrameLog, MemoryPresenter, PresentedFrame};
pub use present::png::PngSequencePresenter;
pub use present::{Presenter, ResampleHint};
