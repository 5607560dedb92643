//! Declarative style-state mapping
//!
//! Colors are configuration injected into the presentation layer, not
//! constants scattered through it. Interactive elements resolve their
//! color from their current hover state; nothing mutates styles in place.

use serde::{Deserialize, Serialize};

/// Hover state of an interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Normal,
    Hovered,
}

/// Color pair resolved by hover state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateColors {
    pub normal: String,
    pub hover: String,
}

impl StateColors {
    pub fn new(normal: impl Into<String>, hover: impl Into<String>) -> Self {
        Self {
            normal: normal.into(),
            hover: hover.into(),
        }
    }

    pub fn for_state(&self, state: HoverState) -> &str {
        match state {
            HoverState::Normal => &self.normal,
            HoverState::Hovered => &self.hover,
        }
    }
}

/// Palette injected into the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_nav")]
    pub nav: StateColors,
    #[serde(default = "default_action")]
    pub action: StateColors,
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_logo() -> String {
    "#1D6F22".to_string()
}

fn default_nav() -> StateColors {
    StateColors::new("#875800", "#B8D9A2")
}

fn default_action() -> StateColors {
    StateColors::new("#875800", "#5c3a00")
}

fn default_background() -> String {
    "#F7FAF5".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            logo: default_logo(),
            nav: default_nav(),
            action: default_action(),
            background: default_background(),
        }
    }
}
