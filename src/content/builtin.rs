// src/content/builtin.rs
// The 2025 UNPilar tables served when no content file override is configured.
// Instants are midnight Buenos Aires, expressed in UTC.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use super::calendar::{AcademicEvent, EventCategory};
use super::resources::{ResourceCategory, Tool};
use super::tutorials::{ContentBlock, Hotspot, Tutorial, TutorialStep};

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 3, 0, 0).unwrap()
}

fn event(
    title: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    category: EventCategory,
) -> AcademicEvent {
    AcademicEvent { title: title.to_string(), start, end, category }
}

pub fn academic_events_2025() -> Vec<AcademicEvent> {
    vec![
        event(
            "Inicio del Primer Cuatrimestre",
            day(2025, 4, 7),
            day(2025, 7, 19),
            EventCategory::Term,
        ),
        event(
            "Inscripción a Cursadas (1er Cuat.)",
            day(2025, 3, 24),
            day(2025, 4, 4),
            EventCategory::Enrollment,
        ),
        event(
            "Finales - Turno Febrero/Marzo",
            day(2025, 2, 17),
            day(2025, 3, 21),
            EventCategory::Exam,
        ),
        event(
            "Finales - Turno Julio/Agosto",
            day(2025, 7, 28),
            day(2025, 8, 22),
            EventCategory::Exam,
        ),
        event(
            "Inicio del Segundo Cuatrimestre",
            day(2025, 8, 25),
            day(2025, 12, 6),
            EventCategory::Term,
        ),
        event(
            "Evaluaciones Parciales (1er Cuat.)",
            day(2025, 5, 19),
            day(2025, 6, 7),
            EventCategory::Assessment,
        ),
        event(
            "Evaluaciones Parciales (2do Cuat.)",
            day(2025, 10, 13),
            day(2025, 11, 1),
            EventCategory::Assessment,
        ),
    ]
}

fn tool(name: &str, desc: &str) -> Tool {
    Tool { name: name.to_string(), desc: desc.to_string() }
}

pub fn resource_categories() -> Vec<ResourceCategory> {
    vec![
        ResourceCategory {
            category: "Creación de Contenido".to_string(),
            icon: "pen-tool".to_string(),
            tools: vec![
                tool(
                    "Canva",
                    "Diseño gráfico para no diseñadores. Crea presentaciones, infografías y más.",
                ),
                tool("Genially", "Crea contenidos interactivos y animados de forma sencilla."),
                tool("H5P", "Crea, comparte y reutiliza contenido interactivo en tu navegador."),
            ],
        },
        ResourceCategory {
            category: "Video y Animación".to_string(),
            icon: "video".to_string(),
            tools: vec![
                tool("Loom", "Graba tu pantalla y cámara para crear videotutoriales rápidos."),
                tool("Powtoon", "Crea videos animados y presentaciones atractivas."),
                tool(
                    "Screencast-O-Matic",
                    "Grabador de pantalla y editor de video fácil de usar.",
                ),
            ],
        },
        ResourceCategory {
            category: "Evaluación y Feedback".to_string(),
            icon: "file-text".to_string(),
            tools: vec![
                tool(
                    "Kahoot!",
                    "Crea juegos de preguntas y encuestas para dinamizar tus clases.",
                ),
                tool(
                    "Mentimeter",
                    "Presentaciones interactivas con nubes de palabras, encuestas y Q&A.",
                ),
                tool(
                    "Socrative",
                    "Evalúa el conocimiento de los estudiantes con actividades en tiempo real.",
                ),
            ],
        },
    ]
}

fn step(
    ui: &str,
    state: serde_json::Value,
    hotspot: Hotspot,
    text: &str,
) -> TutorialStep {
    TutorialStep { ui: ui.to_string(), state, hotspot, text: text.to_string() }
}

fn hotspot(
    top: &str,
    left: Option<&str>,
    right: Option<&str>,
    width: &str,
    height: &str,
    transform: Option<&str>,
) -> Hotspot {
    Hotspot {
        top: top.to_string(),
        left: left.map(str::to_string),
        right: right.map(str::to_string),
        width: width.to_string(),
        height: height.to_string(),
        transform: transform.map(str::to_string),
    }
}

pub fn tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial::Interactive {
            title: "Actualizar tu foto de perfil".to_string(),
            desc: "Aprende a cambiar tu imagen de perfil en la plataforma con este tutorial interactivo.".to_string(),
            steps: vec![
                step(
                    "main_page",
                    json!({ "userMenuOpen": false }),
                    hotspot("18px", None, Some("20px"), "150px", "40px", None),
                    "Primero, haz clic en el menú de usuario para desplegar las opciones.",
                ),
                step(
                    "main_page",
                    json!({ "userMenuOpen": true }),
                    hotspot("65px", None, Some("10px"), "180px", "40px", None),
                    "Luego, selecciona la opción \"Perfil\" para ir a tu página de perfil.",
                ),
                step(
                    "profile_page",
                    json!({}),
                    hotspot("155px", Some("45px"), None, "250px", "40px", None),
                    "Ahora, haz clic en \"Editar perfil\" para acceder a la pantalla de edición.",
                ),
                step(
                    "edit_profile_page",
                    json!({ "showFilePicker": false }),
                    hotspot("250px", Some("40px"), None, "90%", "100px", None),
                    "Haz clic en el área de \"Imagen nueva\" para abrir el selector de archivos.",
                ),
                step(
                    "edit_profile_page",
                    json!({ "showFilePicker": true }),
                    hotspot("50%", Some("50%"), None, "80%", "70%", Some("translate(-50%, -50%)")),
                    "En el selector, sube tu nueva foto y finaliza el proceso.",
                ),
            ],
        },
        Tutorial::Standard {
            title: "Añadir un recurso a tu curso".to_string(),
            desc: "Guía paso a paso para agregar archivos, enlaces y otros recursos para tus estudiantes.".to_string(),
            content: vec![
                ContentBlock::Heading {
                    text: "Activando el modo de edición".to_string(),
                },
                ContentBlock::Paragraph {
                    text: "Para comenzar a añadir o modificar contenido en tu curso, lo primero que debes hacer es activar el \"Modo de edición\". Encontrarás el interruptor en la esquina superior derecha de la página de tu curso.".to_string(),
                },
                ContentBlock::Heading {
                    text: "Añadir una actividad o un recurso".to_string(),
                },
                ContentBlock::Paragraph {
                    text: "Una vez activado el modo de edición, verás que aparecen nuevas opciones en cada sección de tu curso. Busca y haz clic en el enlace \"+ Añadir una actividad o un recurso\".".to_string(),
                },
                ContentBlock::Subheading {
                    text: "Tipos de recursos comunes:".to_string(),
                },
                ContentBlock::List {
                    items: vec![
                        "Archivo: Para subir un documento PDF, Word, etc.".to_string(),
                        "URL: Para enlazar a una página web externa.".to_string(),
                        "Carpeta: Para organizar varios archivos en un solo lugar.".to_string(),
                    ],
                },
                ContentBlock::Paragraph {
                    text: "Selecciona el tipo de recurso que deseas añadir y sigue las instrucciones para configurarlo. ¡No olvides guardar los cambios!".to_string(),
                },
            ],
        },
    ]
}
