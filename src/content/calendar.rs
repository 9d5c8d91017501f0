// src/content/calendar.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag of a calendar entry. Wire labels match the campus data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "cuatrimestre")]
    Term,
    #[serde(rename = "inscripcion")]
    Enrollment,
    #[serde(rename = "examen")]
    Exam,
    #[serde(rename = "evaluacion")]
    Assessment,
}

/// One entry of the academic calendar. Immutable once loaded; no overlap or
/// ordering invariant is enforced beyond the display sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(rename = "type")]
    pub category: EventCategory,
}

impl AcademicEvent {
    /// `- {title}: {start} al {end}` line used in the assistant context block.
    pub fn context_line(&self) -> String {
        format!(
            "- {}: {} al {}",
            self.title,
            self.start.format("%d/%m/%Y"),
            self.end.format("%d/%m/%Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn category_uses_campus_wire_labels() {
        let json = serde_json::to_string(&EventCategory::Enrollment).unwrap();
        assert_eq!(json, "\"inscripcion\"");
        let parsed: EventCategory = serde_json::from_str("\"evaluacion\"").unwrap();
        assert_eq!(parsed, EventCategory::Assessment);
    }

    #[test]
    fn context_line_formats_day_month_year() {
        let event = AcademicEvent {
            title: "Finales - Turno Febrero/Marzo".to_string(),
            start: Utc.with_ymd_and_hms(2025, 2, 17, 3, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 21, 3, 0, 0).unwrap(),
            category: EventCategory::Exam,
        };
        assert_eq!(
            event.context_line(),
            "- Finales - Turno Febrero/Marzo: 17/02/2025 al 21/03/2025"
        );
    }
}
