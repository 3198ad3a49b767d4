/// Sample snapshot for `horas-tui dev`, shaped exactly like the companion
/// app's persisted output.
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "theme": "system",
  "showHours": true,
  "weekHours": 12.5,
  "monthHours": 43.0,
  "monthGoal": 80,
  "showNotes": true,
  "notes": "[\"Llamar a Sam\",\"Enviar informe\"]",
  "showEvents": true,
  "events": "[\"Dentista 16:00\",\"Reunion lunes\"]"
}
"#;
