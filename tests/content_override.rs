// tests/content_override.rs
// The content tables are an injected configuration object: a JSON file
// replaces the built-ins wholesale at startup.

use std::io::Write;

use aula::content::ContentStore;

#[test]
fn json_file_replaces_builtin_tables() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = r#"{
        "events": [
            {
                "title": "Mesa de Finales Extraordinaria",
                "start": "2026-03-02T03:00:00Z",
                "end": "2026-03-06T03:00:00Z",
                "type": "examen"
            }
        ],
        "resources": [
            {
                "category": "Accesibilidad",
                "icon": "heart-handshake",
                "tools": [
                    { "name": "NVDA", "desc": "Lector de pantalla gratuito." }
                ]
            }
        ],
        "tutorials": []
    }"#;
    file.write_all(json.as_bytes()).unwrap();

    let store = ContentStore::from_file(file.path()).unwrap();
    assert_eq!(store.events.len(), 1);
    assert_eq!(store.events[0].title, "Mesa de Finales Extraordinaria");
    assert_eq!(store.resources[0].category, "Accesibilidad");
    assert!(store.tutorials.is_empty());
    assert!(store.resource_category("Accesibilidad").is_some());
}

#[test]
fn missing_file_and_bad_json_are_distinct_errors() {
    let missing = ContentStore::from_file("/nonexistent/aula-content.json");
    assert!(matches!(missing, Err(aula::content::ContentError::Read(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();
    let bad = ContentStore::from_file(file.path());
    assert!(matches!(bad, Err(aula::content::ContentError::Parse(_))));
}

#[test]
fn builtin_tables_match_the_campus_dataset() {
    let store = ContentStore::builtin();
    assert_eq!(store.events.len(), 7);
    assert_eq!(store.resources.len(), 3);
    assert_eq!(store.tutorials.len(), 2);

    let sorted = store.sorted_events();
    assert_eq!(sorted.first().unwrap().title, "Finales - Turno Febrero/Marzo");
    assert_eq!(sorted.last().unwrap().title, "Evaluaciones Parciales (2do Cuat.)");
}
