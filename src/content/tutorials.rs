// src/content/tutorials.rs
// Tutorials come in two variants: interactive walkthroughs with hotspot
// highlights over the live UI, and standard read-through guides. Step
// sequencing and completion are the dashboard's concern; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Screen region to highlight for a walkthrough step (CSS-unit strings).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub top: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    pub width: String,
    pub height: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

/// One step of an interactive walkthrough. `state` is an opaque marker the
/// dashboard uses to put the mocked screen into the right configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorialStep {
    pub ui: String,
    pub state: serde_json::Value,
    pub hotspot: Hotspot,
    pub text: String,
}

/// One block of a standard (read-through) tutorial.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "h3")]
    Heading { text: String },
    #[serde(rename = "h4")]
    Subheading { text: String },
    #[serde(rename = "p")]
    Paragraph { text: String },
    #[serde(rename = "ul")]
    List { items: Vec<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tutorial {
    Interactive {
        title: String,
        desc: String,
        steps: Vec<TutorialStep>,
    },
    Standard {
        title: String,
        desc: String,
        content: Vec<ContentBlock>,
    },
}

impl Tutorial {
    pub fn title(&self) -> &str {
        match self {
            Tutorial::Interactive { title, .. } => title,
            Tutorial::Standard { title, .. } => title,
        }
    }
}
