//! SimpleKit headless demo
//!
//! Replays a pointer scenario against a single button and prints the paint
//! commands recorded at every `draw` step.
//!
//! Run with: cargo run -p simplekit_demo -- crates/simplekit_demo/scenarios/press_release.json

mod scenario;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use simplekit_core::{FocusArbiter, PointerFocus};
use simplekit_paint::{PaintCommand, PaintContext};
use simplekit_widgets::{button, ButtonEnv, ButtonState, EstimatingMeasurer, Style};
use tracing_subscriber::EnvFilter;

use crate::scenario::{Scenario, ScenarioStep};

#[derive(Debug, Parser)]
#[command(
    name = "simplekit",
    version,
    about = "Replay a pointer scenario against a SimpleKit button"
)]
struct Args {
    /// Scenario JSON file
    scenario: PathBuf,

    /// TOML file overriding the default style
    #[arg(long)]
    style: Option<PathBuf>,

    /// Draw box-model outlines on top of the button
    #[arg(long)]
    debug: bool,
}

/// Outcome of a replay
#[derive(Debug)]
struct Replay {
    frames: Vec<Vec<PaintCommand>>,
    final_state: ButtonState,
    activations: usize,
    focused: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut style = match &args.style {
        Some(path) => {
            Style::load(path).with_context(|| format!("loading style {}", path.display()))?
        }
        None => Style::default(),
    };
    style.debug |= args.debug;

    let scenario = Scenario::from_path(&args.scenario)?;
    let replay = run(&scenario, style);

    for (i, frame) in replay.frames.iter().enumerate() {
        println!("frame {}:", i);
        for command in frame {
            println!("  {:?}", command);
        }
    }
    println!(
        "final state: {:?}, activations: {}, focused: {}",
        replay.final_state, replay.activations, replay.focused
    );

    Ok(())
}

fn run(scenario: &Scenario, style: Style) -> Replay {
    let focus = PointerFocus::shared();
    let env = ButtonEnv::new(style, EstimatingMeasurer::shared(), focus.clone());

    let activations = Arc::new(AtomicUsize::new(0));
    let mut builder = button(scenario.label.clone()).margin(scenario.margin);
    if let Some(width) = scenario.width {
        builder = builder.width(width);
    }
    if let Some(height) = scenario.height {
        builder = builder.height(height);
    }
    if scenario.listen {
        let counter = activations.clone();
        builder = builder.on_activate(move |event| {
            tracing::info!(source = %event.source, at = event.timestamp, "activated");
            counter.fetch_add(1, Ordering::Relaxed);
            true
        });
    }
    let mut widget = builder.build(&env);
    tracing::info!("built {:?}", widget);

    let mut frames = Vec::new();
    for step in &scenario.steps {
        match step {
            ScenarioStep::Pointer { .. } => {
                if let Some(event) = step.pointer_event() {
                    let consumed = widget.handle_pointer_event(&event);
                    tracing::debug!(kind = ?event.kind, consumed, state = ?widget.state(), "pointer");
                }
            }
            ScenarioStep::SetText { text } => widget.set_text(text.as_str()),
            ScenarioStep::SetFont { font } => widget.set_font(font.as_str()),
            ScenarioStep::Draw => {
                let mut ctx = PaintContext::new();
                widget.draw(&mut ctx);
                frames.push(ctx.take_commands());
            }
        }
    }

    Replay {
        frames,
        final_state: widget.state(),
        activations: activations.load(Ordering::Relaxed),
        focused: focus.focused() == Some(widget.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_scenario_replays() {
        let scenario =
            Scenario::from_json(include_str!("../scenarios/press_release.json")).unwrap();
        let replay = run(&scenario, Style::default());

        assert_eq!(replay.frames.len(), 4);
        assert_eq!(replay.final_state, ButtonState::Idle);
        assert_eq!(replay.activations, 1);
        assert!(replay.focused);
    }

    #[test]
    fn silent_button_counts_nothing() {
        let scenario = Scenario::from_json(
            r#"{
                "label": "Mute",
                "listen": false,
                "steps": [
                    { "type": "pointer", "kind": "down" },
                    { "type": "pointer", "kind": "up" }
                ]
            }"#,
        )
        .unwrap();
        let replay = run(&scenario, Style::default());

        assert_eq!(replay.activations, 0);
        assert_eq!(replay.final_state, ButtonState::Hover);
        assert!(replay.frames.is_empty());
    }

    #[test]
    fn bundled_style_loads() {
        let style = Style::from_toml_str(include_str!("../scenarios/style.toml")).unwrap();
        assert!(style.debug);
        assert_eq!(style.text_padding, 6.0);
    }
}
