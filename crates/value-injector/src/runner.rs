//! Type-dispatched injection

use page_model::{ControlKind, ControlOption, ControlSnapshot, PagePort};
use tracing::{debug, warn};

use crate::errors::InjectError;
use crate::model::{InjectAction, InjectOutcome};

/// Write `value` into `control`.
///
/// Never propagates an internal failure: anything that goes wrong is
/// logged and reported as not filled.
pub async fn inject(page: &dyn PagePort, control: &ControlSnapshot, value: &str) -> InjectOutcome {
    match execute(page, control, value).await {
        Ok(outcome) => {
            debug!(
                control = %control.id.0,
                kind = control.kind.name(),
                action = outcome.action.name(),
                filled = outcome.filled,
                "injection finished"
            );
            outcome
        }
        Err(err) => {
            warn!(control = %control.id.0, error = %err, "injection failed");
            InjectOutcome::skipped(InjectAction::Failed)
        }
    }
}

async fn execute(
    page: &dyn PagePort,
    control: &ControlSnapshot,
    value: &str,
) -> Result<InjectOutcome, InjectError> {
    match control.kind {
        ControlKind::Text | ControlKind::Textarea => fill_text(page, control, value).await,
        ControlKind::Checkbox => fill_checkbox(page, control, value).await,
        ControlKind::Radio => fill_radio(page, control, value).await,
        ControlKind::Select => fill_select(page, control, value).await,
    }
}

async fn fill_text(
    page: &dyn PagePort,
    control: &ControlSnapshot,
    value: &str,
) -> Result<InjectOutcome, InjectError> {
    if control.value == value {
        return Ok(InjectOutcome::skipped(InjectAction::AlreadySet));
    }
    page.write_value(&control.id, value).await?;
    Ok(InjectOutcome::filled(InjectAction::WroteValue))
}

async fn fill_checkbox(
    page: &dyn PagePort,
    control: &ControlSnapshot,
    value: &str,
) -> Result<InjectOutcome, InjectError> {
    let desired = truthy(value);
    if control.checked == desired {
        return Ok(InjectOutcome::skipped(InjectAction::AlreadySet));
    }
    page.click(&control.id).await?;
    Ok(InjectOutcome::filled(InjectAction::Clicked))
}

async fn fill_radio(
    page: &dyn PagePort,
    control: &ControlSnapshot,
    value: &str,
) -> Result<InjectOutcome, InjectError> {
    let members = radio_group(page, control).await?;

    let target = members.iter().find(|m| m.value == value).or_else(|| {
        // Fuzzy fallback on the associated label text.
        let needle = value.to_lowercase();
        members.iter().find(|m| {
            m.label
                .as_deref()
                .is_some_and(|l| l.to_lowercase().contains(&needle))
        })
    });

    let Some(target) = target else {
        return Ok(InjectOutcome::skipped(InjectAction::NoMatch));
    };
    if target.checked {
        return Ok(InjectOutcome::skipped(InjectAction::AlreadySet));
    }
    page.click(&target.id).await?;
    Ok(InjectOutcome::filled(InjectAction::Clicked))
}

/// All radios sharing the control's group name, document order.
async fn radio_group(
    page: &dyn PagePort,
    control: &ControlSnapshot,
) -> Result<Vec<ControlSnapshot>, InjectError> {
    let Some(group) = control.name.as_deref() else {
        // An unnamed radio is a group of one.
        return Ok(vec![control.clone()]);
    };
    let controls = page.controls().await?;
    Ok(controls
        .into_iter()
        .filter(|c| c.kind == ControlKind::Radio && c.name.as_deref() == Some(group))
        .collect())
}

async fn fill_select(
    page: &dyn PagePort,
    control: &ControlSnapshot,
    value: &str,
) -> Result<InjectOutcome, InjectError> {
    let resolved = resolve_option(&control.options, value).unwrap_or(value);
    if control.value == resolved {
        return Ok(InjectOutcome::skipped(InjectAction::AlreadySet));
    }
    page.write_value(&control.id, resolved).await?;
    Ok(InjectOutcome::filled(InjectAction::WroteValue))
}

/// Exact option-value match first, then display-text containment, adopting
/// that option's underlying value. `None` means the raw target stands.
///
/// Plain substring matching only: a target like "2 years" is not evaluated
/// against ranged option texts such as "2-5 years".
fn resolve_option<'a>(options: &'a [ControlOption], target: &'a str) -> Option<&'a str> {
    if options.iter().any(|o| o.value == target) {
        return Some(target);
    }
    let needle = target.to_lowercase();
    options
        .iter()
        .find(|o| o.text.to_lowercase().contains(&needle))
        .map(|o| o.value.as_str())
}

/// Checkbox truthiness: the suggested value drives checked state.
pub fn truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::{ControlSeed, InMemoryPage};

    #[test]
    fn truthy_membership_is_case_insensitive() {
        for value in ["true", "Yes", "ON", "yEs"] {
            assert!(truthy(value), "{value} should be truthy");
        }
        for value in ["false", "no", "", "1", "checked"] {
            assert!(!truthy(value), "{value} should be falsy");
        }
    }

    #[test]
    fn option_resolution_prefers_exact_value() {
        let options = vec![
            ControlOption::new("opt_a", "0-1 years"),
            ControlOption::new("opt_b", "2-5 years"),
        ];
        assert_eq!(resolve_option(&options, "opt_a"), Some("opt_a"));
        assert_eq!(resolve_option(&options, "2-5 Years"), Some("opt_b"));
        assert_eq!(resolve_option(&options, "10+ years"), None);
    }

    #[tokio::test]
    async fn text_overwrite_and_noop() {
        let page = InMemoryPage::new();
        let id = page.insert(ControlSeed::new(ControlKind::Text).with_name("email"));
        let control = page.control(&id).await.unwrap();

        let outcome = inject(&page, &control, "a@b.c").await;
        assert!(outcome.filled);
        assert_eq!(outcome.action, InjectAction::WroteValue);

        // Same value against the refreshed control is a no-op.
        let control = page.control(&id).await.unwrap();
        let outcome = inject(&page, &control, "a@b.c").await;
        assert!(!outcome.filled);
        assert_eq!(outcome.action, InjectAction::AlreadySet);
    }

    #[tokio::test]
    async fn checkbox_click_only_on_state_change() {
        let page = InMemoryPage::new();
        let id = page.insert(ControlSeed::new(ControlKind::Checkbox).checked(true));

        let control = page.control(&id).await.unwrap();
        assert!(!inject(&page, &control, "TRUE").await.filled);

        let control = page.control(&id).await.unwrap();
        let outcome = inject(&page, &control, "no").await;
        assert!(outcome.filled);
        assert_eq!(outcome.action, InjectAction::Clicked);
        assert!(!page.control(&id).await.unwrap().checked);
    }

    #[tokio::test]
    async fn radio_exact_value_then_label_fallback() {
        let page = InMemoryPage::new();
        let junior = page.insert(
            ControlSeed::new(ControlKind::Radio)
                .with_name("level")
                .with_value("jr")
                .with_label("Junior (0-2 years)"),
        );
        let senior = page.insert(
            ControlSeed::new(ControlKind::Radio)
                .with_name("level")
                .with_value("sr")
                .with_label("Senior (5+ years)"),
        );

        // Exact value match.
        let control = page.control(&junior).await.unwrap();
        assert!(inject(&page, &control, "sr").await.filled);
        assert!(page.control(&senior).await.unwrap().checked);

        // Label containment fallback, scanning the whole group.
        let control = page.control(&senior).await.unwrap();
        assert!(inject(&page, &control, "junior").await.filled);
        assert!(page.control(&junior).await.unwrap().checked);
        assert!(!page.control(&senior).await.unwrap().checked);
    }

    #[tokio::test]
    async fn radio_without_match_is_noop() {
        let page = InMemoryPage::new();
        let id = page.insert(
            ControlSeed::new(ControlKind::Radio)
                .with_name("level")
                .with_value("jr")
                .with_label("Junior"),
        );
        let control = page.control(&id).await.unwrap();
        let outcome = inject(&page, &control, "principal").await;
        assert!(!outcome.filled);
        assert_eq!(outcome.action, InjectAction::NoMatch);
        assert!(!page.control(&id).await.unwrap().checked);
    }

    #[tokio::test]
    async fn select_fuzzy_match_adopts_option_value() {
        let page = InMemoryPage::new();
        let id = page.insert(
            ControlSeed::new(ControlKind::Select)
                .with_name("years")
                .with_option("opt_a", "0-1 years")
                .with_option("opt_b", "2-5 years"),
        );

        let control = page.control(&id).await.unwrap();
        let outcome = inject(&page, &control, "2-5 years").await;
        assert!(outcome.filled);
        assert_eq!(page.control(&id).await.unwrap().value, "opt_b");

        // Already selected: no-op.
        let control = page.control(&id).await.unwrap();
        assert!(!inject(&page, &control, "2-5 years").await.filled);
    }

    #[tokio::test]
    async fn vanished_control_is_absorbed_as_failed() {
        let page = InMemoryPage::new();
        let id = page.insert(ControlSeed::new(ControlKind::Text).with_name("email"));
        let control = page.control(&id).await.unwrap();
        page.remove(&id);

        let outcome = inject(&page, &control, "a@b.c").await;
        assert!(!outcome.filled);
        assert_eq!(outcome.action, InjectAction::Failed);
    }
}
