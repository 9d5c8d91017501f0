// src/assist/prompt.rs
// Prompt construction: a deterministic template fill per tool mode. The same
// inputs always produce the same prompt string. User text is interpolated
// as-is (trusted single-tenant usage).

use crate::content::ContentStore;

use super::mode::{GenerationOptions, ToolMode};
use super::session::ChatMessage;

/// Opening assistant message of every chat session.
pub const CHAT_GREETING: &str = "¡Hola, colega! Soy Chatito. Como diría Paulo Freire: \"Enseñar no es transferir conocimiento, sino crear las posibilidades para su propia producción o construcción\". Estoy aquí para dialogar y construir juntos. ¿En qué puedo acompañarte hoy?";

/// The instruction prompt for a direct-generation mode. `None` for chat,
/// which is built from a session transcript via [`chat_prompt`].
pub fn generation_prompt(
    mode: ToolMode,
    input: &str,
    options: &GenerationOptions,
) -> Option<String> {
    let prompt = match mode {
        ToolMode::Chat => return None,
        ToolMode::Enricher => format!(
            "Actúa como un experto en pedagogía. ENRIQUECE el siguiente contenido educativo: \"{input}\".\n\
             Proporciona: 1. Explicación profunda. 2. Analogías prácticas. 3. Una actividad breve. Usa formato Markdown limpio."
        ),
        ToolMode::Stylizer => format!(
            "Reescribe el siguiente texto con un tono \"{tone}\". Texto: \"{input}\"",
            tone = options.tone
        ),
        ToolMode::Planner => format!(
            "Crea un PLAN DE CLASE detallado para el tema: \"{input}\".\n\
             Incluye:\n\
             - Objetivos de aprendizaje.\n\
             - Cronograma (Inicio, Desarrollo, Cierre).\n\
             - Estrategias didácticas.\n\
             - Materiales.\n\
             Usa formato Markdown."
        ),
        ToolMode::Quiz => {
            let rubric = if options.include_rubric {
                "IMPORTANTE: Genera también una RÚBRICA de evaluación detallada al final."
            } else {
                ""
            };
            format!(
                "Genera un EXAMEN sobre el tema: \"{input}\".\n\
                 \n\
                 Configuración:\n\
                 - Formato: {format}\n\
                 - Dificultad: {difficulty}\n\
                 \n\
                 {rubric}\n\
                 \n\
                 Si es Multiple Choice:\n\
                 **1. Pregunta**\n\
                 a) Opción\n\
                 b) Opción\n\
                 c) Opción\n\
                 *Respuesta Correcta:* X\n\
                 \n\
                 Si es Tarjetas (Flashcards):\n\
                 **Anverso:** Concepto\n\
                 **Reverso:** Definición/Respuesta\n\
                 \n\
                 Usa formato Markdown claro y estructurado.",
                format = options.format.label(),
                difficulty = options.difficulty.label(),
            )
        }
        ToolMode::Abp => format!(
            "Actúa como un experto en Aprendizaje Basado en Proyectos (ABP).\n\
             Diseña un PROYECTO EDUCATIVO completo para el tema: \"{input}\".\n\
             \n\
             La estructura debe incluir:\n\
             1. **Título Atractivo del Proyecto**\n\
             2. **Pregunta Impulsora (Driving Question)**: Que despierte curiosidad.\n\
             3. **Producto Final**: ¿Qué crearán los alumnos?\n\
             4. **Hitos/Etapas**: 3 etapas clave con sus actividades.\n\
             5. **Criterios de Evaluación**: 3 criterios clave.\n\
             \n\
             Usa formato Markdown claro con encabezados y listas."
        ),
        ToolMode::Inclusion => format!(
            "Actúa como un especialista en Educación Inclusiva.\n\
             Analiza la siguiente actividad o tema: \"{input}\".\n\
             \n\
             Propón ADAPTACIONES curriculares o de acceso para:\n\
             1. **Dislexia / Dificultades de Lectoescritura**: Sugerencias concretas.\n\
             2. **TDAH (Déficit de Atención)**: Estrategias de enfoque.\n\
             3. **Altas Capacidades**: Actividades de ampliación/reto.\n\
             \n\
             Sé práctico, empático y directo. Usa formato Markdown."
        ),
    };

    Some(prompt)
}

/// Campus data block interpolated into the chat persona preamble: the full
/// event list and tool directory, serialized line by line.
pub fn app_context(content: &ContentStore) -> String {
    let events: Vec<String> = content.events.iter().map(|e| e.context_line()).collect();
    let tools: Vec<String> = content.resources.iter().map(|c| c.context_line()).collect();
    format!(
        "DATOS DEL CAMPUS Y CALENDARIO:\n{}\n\nHERRAMIENTAS DISPONIBLES:\n{}",
        events.join("\n"),
        tools.join("\n"),
    )
}

/// Persona preamble for the chat assistant.
fn persona_preamble(content: &ContentStore) -> String {
    format!(
        "Eres \"Chatito\", un asistente pedagógico inspirado en la filosofía de Paulo Freire.\n\
         \n\
         INFORMACIÓN CONTEXTUAL IMPORTANTE:\n\
         {app_context}\n\
         \n\
         Tu rol es acompañar a los docentes de la UNPilar.\n\
         Adopta un tono cálido, dialógico, crítico y reflexivo. Usa frases pedagógicas inspiradoras.\n\
         Fomenta la curiosidad y la construcción colectiva del conocimiento.\n\
         No des solo respuestas cerradas, invita a la reflexión y al diálogo.\n\
         Sé amable, proactivo y didáctico.",
        app_context = app_context(content),
    )
}

/// Full chat prompt: persona preamble, prior transcript, then the new user
/// turn. Prompt length grows with the transcript; the caller bounds the
/// window before handing the history in.
pub fn chat_prompt(content: &ContentStore, history: &[ChatMessage], user_text: &str) -> String {
    let transcript: Vec<String> = history
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str(), m.text))
        .collect();
    format!(
        "{preamble}\n\nHistorial:\n{transcript}\nUser: {user_text}\nModel:",
        preamble = persona_preamble(content),
        transcript = transcript.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::mode::{QuizDifficulty, QuizFormat};

    fn options() -> GenerationOptions {
        GenerationOptions::default()
    }

    #[test]
    fn prompts_are_deterministic() {
        for mode in ToolMode::ALL {
            let a = generation_prompt(mode, "Revolución de Mayo", &options());
            let b = generation_prompt(mode, "Revolución de Mayo", &options());
            assert_eq!(a, b, "mode {:?} must be a pure template fill", mode);
        }
    }

    #[test]
    fn chat_has_no_generation_prompt() {
        assert!(generation_prompt(ToolMode::Chat, "hola", &options()).is_none());
    }

    #[test]
    fn user_text_is_interpolated_verbatim() {
        let prompt =
            generation_prompt(ToolMode::Enricher, "fotosíntesis \"avanzada\"", &options()).unwrap();
        assert!(prompt.contains("fotosíntesis \"avanzada\""));
    }

    #[test]
    fn stylizer_uses_selected_tone() {
        let custom = GenerationOptions { tone: "Motivador".to_string(), ..options() };
        let prompt = generation_prompt(ToolMode::Stylizer, "Se suspende la clase", &custom).unwrap();
        assert!(prompt.contains("con un tono \"Motivador\""));
    }

    #[test]
    fn quiz_rubric_clause_follows_flag() {
        let with = GenerationOptions { include_rubric: true, ..options() };
        let without = GenerationOptions { include_rubric: false, ..options() };
        let rubric_clause = "RÚBRICA de evaluación detallada";

        let prompt = generation_prompt(ToolMode::Quiz, "Revolución de Mayo", &with).unwrap();
        assert!(prompt.contains(rubric_clause));

        let prompt = generation_prompt(ToolMode::Quiz, "Revolución de Mayo", &without).unwrap();
        assert!(!prompt.contains(rubric_clause));
    }

    #[test]
    fn quiz_interpolates_format_and_difficulty() {
        let custom = GenerationOptions {
            format: QuizFormat::TrueFalse,
            difficulty: QuizDifficulty::Advanced,
            ..options()
        };
        let prompt = generation_prompt(ToolMode::Quiz, "La célula", &custom).unwrap();
        assert!(prompt.contains("- Formato: Verdadero/Falso"));
        assert!(prompt.contains("- Dificultad: Avanzada"));
    }

    #[test]
    fn chat_prompt_carries_context_transcript_and_turn() {
        let content = ContentStore::builtin();
        let history = vec![
            ChatMessage::model(CHAT_GREETING),
            ChatMessage::user("¿Cuándo empiezan los finales?"),
            ChatMessage::model("En febrero, colega."),
        ];
        let prompt = chat_prompt(&content, &history, "¿Y las parciales?");

        assert!(prompt.starts_with("Eres \"Chatito\""));
        assert!(prompt.contains("DATOS DEL CAMPUS Y CALENDARIO:"));
        assert!(prompt.contains("- Finales - Turno Febrero/Marzo: 17/02/2025 al 21/03/2025"));
        assert!(prompt.contains("Categoría Creación de Contenido: Canva, Genially, H5P"));
        assert!(prompt.contains("Historial:\nmodel: ¡Hola, colega!"));
        assert!(prompt.contains("user: ¿Cuándo empiezan los finales?"));
        assert!(prompt.ends_with("User: ¿Y las parciales?\nModel:"));
    }
}
