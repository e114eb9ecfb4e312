use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "revealfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the mosaic block sizes walked by the reveal.
    Sequence(SequenceArgs),
    /// Play the full animation headless, writing every presented frame as a PNG.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Starting block size in pixels.
    #[arg(long, default_value_t = 32)]
    start_block: u32,

    /// Reveal step interval in milliseconds.
    #[arg(long, default_value_t = 90)]
    step_ms: u32,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Source crop shown while waiting.
    #[arg(long)]
    source: PathBuf,

    /// Enhanced image revealed once the simulated service answers.
    #[arg(long)]
    result: PathBuf,

    /// Directory receiving `frame_NNNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Simulated enhancement latency in milliseconds.
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,

    /// Viewport size, `WxH`.
    #[arg(long, default_value = "980x720")]
    viewport: revealfx::Viewport,

    /// Engine config JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep rendering this long after completion before stopping.
    #[arg(long, default_value_t = 350)]
    settle_ms: u64,

    /// Stop after this many frames even if the reveal has not finished.
    #[arg(long)]
    max_frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sequence(args) => cmd_sequence(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let seq = revealfx::RevealSequence::from_start_block(args.start_block);
    let blocks: Vec<String> = seq.blocks().iter().map(u32::to_string).collect();
    println!("{}", blocks.join(" "));
    println!(
        "{} steps, reveal completes {}ms after the result arrives",
        seq.len(),
        seq.last_index() as u64 * u64::from(args.step_ms)
    );
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => revealfx::EngineConfig::load(path)?,
        None => revealfx::EngineConfig::default(),
    };
    let source = image::open(&args.source)
        .with_context(|| format!("open source '{}'", args.source.display()))?;
    let result = image::open(&args.result)
        .with_context(|| format!("open result '{}'", args.result.display()))?;

    let mut presenter = revealfx::PngSequencePresenter::new(&args.out_dir)?;
    if let Some(n) = args.max_frames {
        presenter = presenter.with_max_frames(n);
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("build tokio runtime")?;

    rt.block_on(async move {
        let (done_tx, done_rx) = tokio::sync::oneshot::channel::<()>();
        let engine =
            revealfx::RevealEngine::new(&source, config, args.viewport, Box::new(presenter))?
                .with_completion(move || {
                    let _ = done_tx.send(());
                });
        let (scheduler, handle) = revealfx::Scheduler::new(engine);

        // Stand-in for the enhancement service: answers from its own thread.
        let worker = handle.clone();
        let delay = Duration::from_millis(args.delay_ms);
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            worker.supply_result(result);
        });

        let closer = handle.clone();
        let settle = Duration::from_millis(args.settle_ms);
        tokio::spawn(async move {
            if done_rx.await.is_ok() {
                tokio::time::sleep(settle).await;
                closer.stop();
            }
        });

        let engine = scheduler.run().await;
        tracing::info!(
            state = %engine.state(),
            status = engine.state().status_label(),
            complete = engine.is_complete(),
            out_dir = %args.out_dir.display(),
            "playback finished"
        );
        anyhow::Ok(())
    })
}
