//! `pathtrace replay` - paced, frame-by-frame replay of the trace

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::cli::{Cli, OutputFormat, ReplayArgs};
use pathtrace_core::config::{DisplayConfig, PathtraceConfig};
use pathtrace_core::error::{PathtraceError, Result};
use pathtrace_core::format::format_distance;
use pathtrace_core::graph::{compute_shortest_paths, AdjacencyGraph};
use pathtrace_core::records::{header, record_token};
use pathtrace_core::replay::{ReplayCursor, ReplayFrame};

use super::input::{load_graph, require_node};

/// Granularity of the interruptible sleep between frames
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Execute the replay command
pub fn execute(cli: &Cli, config: &PathtraceConfig, args: &ReplayArgs) -> Result<()> {
    let start = args.graph.start.as_str();
    let interval = Duration::from_millis(args.interval_ms.unwrap_or(config.replay.interval_ms));

    let loaded = load_graph(&args.graph.file)?;
    require_node(&loaded.graph, start)?;

    let result = compute_shortest_paths(&loaded.graph, start);
    let mut cursor = ReplayCursor::new(&result.trace);
    let total = cursor.len();

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    tracing::debug!(start, steps = total, interval_ms = ?interval, "replay_start");

    if cli.format == OutputFormat::Records {
        println!(
            "{}",
            header(
                "replay",
                &[
                    ("start", record_token(start)),
                    ("steps", total.to_string()),
                ],
            )
        );
    } else if cli.format == OutputFormat::Human && !cli.quiet {
        println!("Replaying {} steps from {}", total, start);
    }

    play(
        &mut cursor,
        &loaded.graph,
        start,
        interval,
        &interrupted,
        |frame| print_frame(cli.format, &config.display, frame, total),
    )?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Replay complete ({} steps)", total);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "done": true, "steps": total }));
        }
        OutputFormat::Records => println!("C done steps={}", total),
    }

    Ok(())
}

/// Emit every remaining frame, pausing `interval` between frames.
///
/// Stops with `Interrupted` before the next frame once `interrupted` is set.
fn play<'a>(
    cursor: &mut ReplayCursor<'a>,
    graph: &'a AdjacencyGraph,
    start: &'a str,
    interval: Duration,
    interrupted: &AtomicBool,
    mut emit: impl FnMut(&ReplayFrame<'a>) -> Result<()>,
) -> Result<()> {
    let total = cursor.len();
    while let Some(frame) = cursor.advance_frame(graph, start) {
        if frame.index > 0 && !pause(interval, interrupted) {
            tracing::info!(replayed = frame.index, total, "Replay interrupted");
            return Err(PathtraceError::Interrupted);
        }
        emit(&frame)?;
    }
    Ok(())
}

/// Sleep for `interval`, waking early if interrupted. Returns false when
/// the replay should stop.
fn pause(interval: Duration, interrupted: &AtomicBool) -> bool {
    let mut remaining = interval;
    while !remaining.is_zero() {
        if interrupted.load(Ordering::SeqCst) {
            return false;
        }
        let slice = remaining.min(SLEEP_SLICE);
        thread::sleep(slice);
        remaining -= slice;
    }
    !interrupted.load(Ordering::SeqCst)
}

fn print_frame(
    format: OutputFormat,
    display: &DisplayConfig,
    frame: &ReplayFrame<'_>,
    total: usize,
) -> Result<()> {
    let step = frame.step;
    let distance = format_distance(step.distance, display);

    match format {
        OutputFormat::Human => {
            let highlighted: Vec<&str> = frame.highlighted.iter().map(|n| n.as_str()).collect();
            println!(
                "Step {}/{}: {} = {} (from {}) [neighbors: {}]",
                frame.index + 1,
                total,
                step.node,
                distance,
                step.previous,
                highlighted.join(", ")
            );
        }
        OutputFormat::Json => {
            // One JSON object per line so frames can be consumed as they arrive
            println!("{}", serde_json::to_string(frame)?);
        }
        OutputFormat::Records => {
            let highlighted: Vec<String> =
                frame.highlighted.iter().map(|n| record_token(n)).collect();
            println!(
                "F {} {} {} from={} highlight={}",
                frame.index + 1,
                record_token(&step.node),
                distance,
                record_token(&step.previous),
                if highlighted.is_empty() {
                    "-".to_string()
                } else {
                    highlighted.join(",")
                }
            );
        }
    }

    Ok(())
}
