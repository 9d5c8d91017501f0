// src/assist/mode.rs
// The fixed AI-assist functions selectable from the dashboard overlay.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    Chat,
    Enricher,
    Stylizer,
    Planner,
    Quiz,
    Abp,
    Inclusion,
}

impl ToolMode {
    pub const ALL: [ToolMode; 7] = [
        ToolMode::Chat,
        ToolMode::Enricher,
        ToolMode::Stylizer,
        ToolMode::Planner,
        ToolMode::Quiz,
        ToolMode::Abp,
        ToolMode::Inclusion,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ToolMode::Chat => "chat",
            ToolMode::Enricher => "enricher",
            ToolMode::Stylizer => "stylizer",
            ToolMode::Planner => "planner",
            ToolMode::Quiz => "quiz",
            ToolMode::Abp => "abp",
            ToolMode::Inclusion => "inclusion",
        }
    }

    /// Overlay title shown in the dashboard header.
    pub fn title(&self) -> &'static str {
        match self {
            ToolMode::Chat => "Chatito",
            ToolMode::Enricher => "Enriquecedor de Contenido",
            ToolMode::Stylizer => "Estilizador de Comunicaciones",
            ToolMode::Planner => "Planificador de Clases",
            ToolMode::Quiz => "Generador de Exámenes",
            ToolMode::Abp => "Proyectos ABP",
            ToolMode::Inclusion => "Asistente de Inclusión",
        }
    }
}

/// Quiz output format. Wire labels are interpolated verbatim into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizFormat {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "Verdadero/Falso")]
    TrueFalse,
    #[serde(rename = "Desarrollo")]
    OpenResponse,
    #[serde(rename = "Tarjetas de Estudio")]
    Flashcards,
}

impl QuizFormat {
    pub fn label(&self) -> &'static str {
        match self {
            QuizFormat::MultipleChoice => "Multiple Choice",
            QuizFormat::TrueFalse => "Verdadero/Falso",
            QuizFormat::OpenResponse => "Desarrollo",
            QuizFormat::Flashcards => "Tarjetas de Estudio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizDifficulty {
    #[serde(rename = "Básica")]
    Basic,
    #[serde(rename = "Intermedio")]
    Intermediate,
    #[serde(rename = "Avanzada")]
    Advanced,
}

impl QuizDifficulty {
    pub fn label(&self) -> &'static str {
        match self {
            QuizDifficulty::Basic => "Básica",
            QuizDifficulty::Intermediate => "Intermedio",
            QuizDifficulty::Advanced => "Avanzada",
        }
    }
}

/// Mode-specific options of one generation request. Every field has the
/// overlay's initial value as default, so partial bodies deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    pub tone: String,
    pub format: QuizFormat,
    pub difficulty: QuizDifficulty,
    pub include_rubric: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            tone: "Formal Institucional".to_string(),
            format: QuizFormat::MultipleChoice,
            difficulty: QuizDifficulty::Intermediate,
            include_rubric: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_mode_serializes_to_overlay_ids() {
        for mode in ToolMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.id()));
        }
    }

    #[test]
    fn options_deserialize_from_partial_body() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{ "includeRubric": true }"#).unwrap();
        assert!(options.include_rubric);
        assert_eq!(options.format, QuizFormat::MultipleChoice);
        assert_eq!(options.difficulty, QuizDifficulty::Intermediate);
        assert_eq!(options.tone, "Formal Institucional");
    }

    #[test]
    fn quiz_labels_match_wire_names() {
        let format: QuizFormat = serde_json::from_str("\"Tarjetas de Estudio\"").unwrap();
        assert_eq!(format, QuizFormat::Flashcards);
        assert_eq!(format.label(), "Tarjetas de Estudio");
        let difficulty: QuizDifficulty = serde_json::from_str("\"Avanzada\"").unwrap();
        assert_eq!(difficulty.label(), "Avanzada");
    }
}
