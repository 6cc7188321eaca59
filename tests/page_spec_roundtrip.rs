//! CLI support library: page fixtures and settings resolution.

use std::io::Write as _;
use std::time::Duration;

use fill_engine::{FillConfig, FillEngine};
use instafill_cli::page_spec::PageSpec;
use instafill_cli::settings;
use instafill_core_types::Suggestion;
use page_model::{ControlKind, PagePort};

const PAGE: &str = r#"{
  "title": "Job Application",
  "controls": [
    {"kind": "text", "name": "email", "id": "email", "placeholder": "you@example.com"},
    {"kind": "select", "name": "experience", "options": [
      {"value": "opt_a", "text": "0-1 years"},
      {"value": "opt_b", "text": "2-5 years"}
    ]},
    {"kind": "checkbox", "name": "remote"}
  ],
  "labels": [
    {"text": "Email Address", "for": "email"},
    {"text": "Open to remote work", "encloses": 2}
  ]
}"#;

#[tokio::test]
async fn page_spec_builds_document_in_order() {
    let page = PageSpec::from_json(PAGE).unwrap().build();

    assert_eq!(page.title().await.unwrap(), "Job Application");

    let controls = page.controls().await.unwrap();
    assert_eq!(controls.len(), 3);
    assert_eq!(controls[0].kind, ControlKind::Text);
    assert_eq!(controls[0].dom_id.as_deref(), Some("email"));
    assert_eq!(controls[1].options.len(), 2);

    let labels = page.labels().await.unwrap();
    assert_eq!(labels[0].for_id.as_deref(), Some("email"));
    assert_eq!(labels[1].encloses.as_ref(), Some(&controls[2].id));
}

#[tokio::test]
async fn fill_runs_against_a_page_spec() {
    let page = PageSpec::from_json(PAGE).unwrap().build();
    let suggestions: Vec<Suggestion> = serde_json::from_str(
        r#"[
          {"fieldName": "email", "label": "Email Address", "suggestedValue": "alex@example.com"},
          {"fieldName": "experience", "suggestedValue": "2-5 years"},
          {"fieldName": "remote", "suggestedValue": "Yes"}
        ]"#,
    )
    .unwrap();

    let report = FillEngine::new(FillConfig::default().with_max_passes(1))
        .run(&page, &suggestions)
        .await;
    assert_eq!(report.filled, 3);

    let controls = page.controls().await.unwrap();
    assert_eq!(controls[0].value, "alex@example.com");
    assert_eq!(controls[1].value, "opt_b");
    assert!(controls[2].checked);
}

#[test]
fn settings_file_overrides_defaults_and_flags_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"passes": 5, "interval_ms": 250}}"#).unwrap();

    let config = settings::load_config(Some(file.path()), None, None).unwrap();
    assert_eq!(config.max_passes, 5);
    assert_eq!(config.pass_interval, Duration::from_millis(250));

    let config =
        settings::load_config(Some(file.path()), Some(2), Some(Duration::from_secs(3))).unwrap();
    assert_eq!(config.max_passes, 2);
    assert_eq!(config.pass_interval, Duration::from_secs(3));
}

#[test]
fn missing_settings_file_is_an_error_with_context() {
    let err = settings::load_config(Some(std::path::Path::new("/nonexistent/settings.json")), None, None)
        .unwrap_err();
    assert!(err.to_string().contains("settings"));
}
