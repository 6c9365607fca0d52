//! Scenario definition for headless button replays.

use anyhow::{Context, Result};
use serde::Deserialize;
use simplekit_core::{PointerEvent, PointerEventKind};
use std::path::Path;

/// A button plus the sequence of steps to run against it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub margin: f32,
    /// Whether an activate listener is registered
    #[serde(default = "default_true")]
    pub listen: bool,
    pub steps: Vec<ScenarioStep>,
}

fn default_true() -> bool {
    true
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing scenario {}", path.display()))
    }
}

/// One replay step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Pointer {
        kind: StepKind,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        at: u64,
    },
    SetText {
        text: String,
    },
    SetFont {
        font: String,
    },
    Draw,
}

/// Pointer event kinds as spelled in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Down,
    Up,
    Move,
    Enter,
    Exit,
    Click,
    DoubleClick,
    Drag,
    Wheel,
}

impl From<StepKind> for PointerEventKind {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Down => PointerEventKind::Down,
            StepKind::Up => PointerEventKind::Up,
            StepKind::Move => PointerEventKind::Move,
            StepKind::Enter => PointerEventKind::Enter,
            StepKind::Exit => PointerEventKind::Exit,
            StepKind::Click => PointerEventKind::Click,
            StepKind::DoubleClick => PointerEventKind::DoubleClick,
            StepKind::Drag => PointerEventKind::Drag,
            StepKind::Wheel => PointerEventKind::Wheel,
        }
    }
}

impl ScenarioStep {
    /// The pointer event this step delivers, if it is a pointer step.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            ScenarioStep::Pointer { kind, x, y, at } => {
                Some(PointerEvent::new(kind.into(), x, y, at))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        let scenario = Scenario::from_json(
            r#"{
                "label": "OK",
                "steps": [
                    { "type": "pointer", "kind": "double_click", "x": 1.5, "at": 3 },
                    { "type": "set_font", "font": "10px serif" },
                    { "type": "draw" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.label, "OK");
        assert!(scenario.listen);
        assert_eq!(scenario.steps.len(), 3);

        let event = scenario.steps[0].pointer_event().unwrap();
        assert_eq!(event.kind, PointerEventKind::DoubleClick);
        assert_eq!((event.x, event.y, event.timestamp), (1.5, 0.0, 3));
        assert!(scenario.steps[2].pointer_event().is_none());
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = Scenario::from_json(
            r#"{ "steps": [ { "type": "pointer", "kind": "hover" } ] }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn bundled_scenario_parses() {
        let scenario = Scenario::from_json(include_str!("../scenarios/press_release.json")).unwrap();
        assert_eq!(scenario.label, "Submit");
        assert!(!scenario.steps.is_empty());
    }
}
