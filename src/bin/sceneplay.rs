use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sceneplay::{
    ActionPair, ArrayView, BlockSummary, EngineCall, EntryPoint, Rgba8, Scene, SceneConfig,
    Showable, TraceEngine,
};

#[derive(Parser, Debug)]
#[command(name = "sceneplay", version)]
struct Cli {
    /// Log phase and block details to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a bubble sort, apply edits, and print the resulting timeline.
    Sort(SortArgs),
    /// Print the default scene config as JSON.
    DefaultConfig,
}

#[derive(Parser, Debug)]
struct SortArgs {
    /// Values to sort, comma separated.
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Scene config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Make every pair tagged NAME instant. Repeatable.
    #[arg(long = "skip", value_name = "NAME")]
    skip: Vec<String>,

    /// Speed up every pair tagged NAME by FACTOR. Repeatable.
    #[arg(long = "fast-forward", value_name = "NAME=FACTOR", value_parser = parse_fast_forward)]
    fast_forward: Vec<(String, f64)>,

    /// Insert a caption so it lands at INDEX of the edited list. Repeatable; applied in
    /// ascending INDEX order.
    #[arg(long = "caption-at", value_name = "INDEX=TEXT", value_parser = parse_caption)]
    caption_at: Vec<(usize, String)>,

    /// Print blocks and engine calls as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct SortOutput<'a> {
    sorted: Vec<i64>,
    duration: f64,
    blocks: Vec<BlockSummary>,
    calls: &'a [EngineCall],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Sort(args) => cmd_sort(args),
        Command::DefaultConfig => cmd_default_config(),
    }
}

fn parse_fast_forward(s: &str) -> Result<(String, f64), String> {
    let (name, factor) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FACTOR, got '{s}'"))?;
    let factor: f64 = factor
        .parse()
        .map_err(|e| format!("invalid factor '{factor}': {e}"))?;
    if !(factor.is_finite() && factor > 0.0) {
        return Err(format!("factor must be > 0, got {factor}"));
    }
    Ok((name.to_string(), factor))
}

fn parse_caption(s: &str) -> Result<(usize, String), String> {
    let (index, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=TEXT, got '{s}'"))?;
    let index: usize = index
        .parse()
        .map_err(|e| format!("invalid index '{index}': {e}"))?;
    Ok((index, text.to_string()))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SceneConfig> {
    match path {
        Some(p) => SceneConfig::from_path(p)
            .with_context(|| format!("load scene config '{}'", p.display())),
        None => Ok(SceneConfig::default()),
    }
}

fn cmd_sort(args: SortArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let mut scene = Scene::new(config)?;

    let mut sorted = Vec::new();
    scene
        .construct(|rec| {
            let mut arr = ArrayView::new(rec, &args.values);
            arr.show(rec, None);
            let n = arr.len();
            for pass in 0..n.saturating_sub(1) {
                for i in 0..n - 1 - pass {
                    if arr.compare(rec, i, i + 1, None)?.is_gt() {
                        arr.swap(rec, i, i + 1, None)?;
                    }
                }
            }
            sorted = arr.values();
            Ok(())
        })
        .context("record bubble sort")?;

    let mut captions = args.caption_at.clone();
    captions.sort_by_key(|(index, _)| *index);
    scene
        .customize(|c| {
            for name in &args.skip {
                let mut skipped = 0usize;
                for pair in c.pairs_named_mut(name) {
                    if pair.skip() {
                        skipped += 1;
                    }
                }
                tracing::debug!(name, skipped, "skip applied");
            }
            for (name, factor) in &args.fast_forward {
                for pair in c.pairs_named_mut(name) {
                    pair.fast_forward(*factor);
                }
            }
            for (index, text) in captions {
                c.insert_action_pair(index, ActionPair::caption(text, Rgba8::WHITE))?;
            }
            Ok(())
        })
        .context("apply edits")?;

    let mut engine = TraceEngine::new();
    let report = scene.execute(&mut engine).context("execute scene")?;

    if args.json {
        let out = SortOutput {
            sorted,
            duration: report.duration,
            blocks: scene.timeline_summary(),
            calls: engine.calls(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let sorted: Vec<String> = sorted.iter().map(i64::to_string).collect();
    println!("sorted: {}", sorted.join(","));
    for b in scene.timeline_summary() {
        let entry = match b.entry {
            EntryPoint::Play => "play",
            EntryPoint::Apply => "apply",
        };
        println!(
            "#{:<3} {:>7}ms {:>7}ms  {entry:<5}  {}",
            b.index, b.start_ms, b.end_ms, b.description
        );
    }
    println!(
        "{} blocks, {} pairs, {:.3}s",
        report.blocks, report.pairs, report.duration
    );
    Ok(())
}

fn cmd_default_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&SceneConfig::default())
        .context("serialize default config")?;
    println!("{json}");
    Ok(())
}
