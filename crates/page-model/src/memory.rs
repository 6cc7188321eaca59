//! In-memory reference page.
//!
//! Backs tests and CLI fixtures. Mutations go through the same two entry
//! points a real adapter would offer (`write_value`, `click`) and dispatch
//! the same event sequences; registered listeners run synchronously after
//! each event and may mutate the document, the way framework handlers can
//! reveal or reshape parts of a page in response to user input.

use async_trait::async_trait;
use instafill_core_types::ControlId;
use parking_lot::Mutex;
use tracing::debug;

use crate::control::{
    ControlKind, ControlOption, ControlSnapshot, LabelView, PageEvent, PageEventKind,
};
use crate::errors::PageError;
use crate::ports::PagePort;

/// Callback invoked after the page dispatches an event.
pub type PageListener = Box<dyn FnMut(&PageEvent, &mut PageDoc) + Send>;

/// Blueprint for one control inserted into an in-memory page.
#[derive(Debug, Clone)]
pub struct ControlSeed {
    pub kind: ControlKind,
    pub name: Option<String>,
    pub dom_id: Option<String>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub value: String,
    pub checked: bool,
    pub options: Vec<ControlOption>,
}

impl ControlSeed {
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            name: None,
            dom_id: None,
            label: None,
            placeholder: None,
            value: String::new(),
            checked: false,
            options: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_dom_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = Some(dom_id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_option(mut self, value: impl Into<String>, text: impl Into<String>) -> Self {
        self.options.push(ControlOption::new(value, text));
        self
    }
}

/// Mutable page document: controls and labels in document order.
#[derive(Default)]
pub struct PageDoc {
    title: String,
    controls: Vec<ControlSnapshot>,
    labels: Vec<LabelView>,
    next_id: u64,
}

impl PageDoc {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn insert_control(&mut self, seed: ControlSeed) -> ControlId {
        let id = ControlId(format!("ctl-{}", self.next_id));
        self.next_id += 1;
        self.controls.push(ControlSnapshot {
            id: id.clone(),
            kind: seed.kind,
            name: seed.name,
            dom_id: seed.dom_id,
            label: seed.label,
            placeholder: seed.placeholder,
            value: seed.value,
            checked: seed.checked,
            options: seed.options,
        });
        id
    }

    pub fn insert_label(
        &mut self,
        text: impl Into<String>,
        for_id: Option<String>,
        encloses: Option<ControlId>,
    ) {
        self.labels.push(LabelView {
            text: text.into(),
            for_id,
            encloses,
        });
    }

    /// Remove a control, as a re-rendering page would. Returns whether it existed.
    pub fn remove_control(&mut self, id: &ControlId) -> bool {
        let before = self.controls.len();
        self.controls.retain(|c| &c.id != id);
        self.controls.len() != before
    }

    pub fn snapshot(&self, id: &ControlId) -> Option<ControlSnapshot> {
        self.controls.iter().find(|c| &c.id == id).cloned()
    }

    pub fn snapshots(&self) -> Vec<ControlSnapshot> {
        self.controls.clone()
    }

    pub fn labels(&self) -> Vec<LabelView> {
        self.labels.clone()
    }

    fn write(&mut self, id: &ControlId, value: &str) -> Result<(), PageError> {
        let Some(ctl) = self.controls.iter_mut().find(|c| &c.id == id) else {
            return Err(PageError::ControlGone(id.0.clone()));
        };
        match ctl.kind {
            ControlKind::Checkbox | ControlKind::Radio => Err(PageError::Unsupported {
                kind: ctl.kind.name().to_string(),
                reason: "checked state is driven by activation, not value writes".to_string(),
            }),
            ControlKind::Select => {
                // A value with no backing option clears the selection.
                ctl.value = if ctl.options.iter().any(|o| o.value == value) {
                    value.to_string()
                } else {
                    String::new()
                };
                Ok(())
            }
            ControlKind::Text | ControlKind::Textarea => {
                ctl.value = value.to_string();
                Ok(())
            }
        }
    }

    fn activate(&mut self, id: &ControlId) -> Result<ControlKind, PageError> {
        let Some(pos) = self.controls.iter().position(|c| &c.id == id) else {
            return Err(PageError::ControlGone(id.0.clone()));
        };
        let kind = self.controls[pos].kind;
        match kind {
            ControlKind::Checkbox => {
                let ctl = &mut self.controls[pos];
                ctl.checked = !ctl.checked;
            }
            ControlKind::Radio => {
                let group = self.controls[pos].name.clone();
                self.controls[pos].checked = true;
                if let Some(group) = group {
                    for ctl in &mut self.controls {
                        if ctl.kind == ControlKind::Radio
                            && ctl.name.as_deref() == Some(group.as_str())
                            && &ctl.id != id
                        {
                            ctl.checked = false;
                        }
                    }
                }
            }
            _ => {}
        }
        Ok(kind)
    }
}

struct Inner {
    doc: PageDoc,
    listeners: Vec<PageListener>,
    events: Vec<PageEvent>,
}

/// In-memory page behind a lock, shareable with the engine via [`PagePort`].
pub struct InMemoryPage {
    inner: Mutex<Inner>,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                doc: PageDoc::default(),
                listeners: Vec::new(),
                events: Vec::new(),
            }),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        let page = Self::new();
        page.inner.lock().doc.title = title.into();
        page
    }

    pub fn insert(&self, seed: ControlSeed) -> ControlId {
        self.inner.lock().doc.insert_control(seed)
    }

    pub fn insert_label(&self, text: &str, for_id: Option<&str>, encloses: Option<ControlId>) {
        self.inner
            .lock()
            .doc
            .insert_label(text, for_id.map(str::to_string), encloses);
    }

    pub fn remove(&self, id: &ControlId) -> bool {
        self.inner.lock().doc.remove_control(id)
    }

    /// Register a listener, invoked synchronously after every dispatched event.
    pub fn listen(&self, listener: impl FnMut(&PageEvent, &mut PageDoc) + Send + 'static) {
        self.inner.lock().listeners.push(Box::new(listener));
    }

    /// Every event dispatched so far, in order.
    pub fn events(&self) -> Vec<PageEvent> {
        self.inner.lock().events.clone()
    }

    pub fn clear_events(&self) {
        self.inner.lock().events.clear();
    }

    fn dispatch(inner: &mut Inner, control: &ControlId, kinds: &[PageEventKind]) {
        for kind in kinds {
            let event = PageEvent {
                control: control.clone(),
                kind: *kind,
                bubbles: true,
            };
            let Inner {
                doc,
                listeners,
                events,
            } = &mut *inner;
            events.push(event.clone());
            for listener in listeners.iter_mut() {
                listener(&event, doc);
            }
        }
    }
}

impl Default for InMemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PagePort for InMemoryPage {
    async fn title(&self) -> Result<String, PageError> {
        Ok(self.inner.lock().doc.title.clone())
    }

    async fn controls(&self) -> Result<Vec<ControlSnapshot>, PageError> {
        Ok(self.inner.lock().doc.snapshots())
    }

    async fn labels(&self) -> Result<Vec<LabelView>, PageError> {
        Ok(self.inner.lock().doc.labels())
    }

    async fn control(&self, id: &ControlId) -> Result<ControlSnapshot, PageError> {
        self.inner
            .lock()
            .doc
            .snapshot(id)
            .ok_or_else(|| PageError::ControlGone(id.0.clone()))
    }

    async fn write_value(&self, id: &ControlId, value: &str) -> Result<(), PageError> {
        let mut inner = self.inner.lock();
        inner.doc.write(id, value)?;
        debug!(control = %id.0, "value written");
        Self::dispatch(
            &mut inner,
            id,
            &[PageEventKind::Input, PageEventKind::Change, PageEventKind::Blur],
        );
        Ok(())
    }

    async fn click(&self, id: &ControlId) -> Result<(), PageError> {
        let mut inner = self.inner.lock();
        let kind = inner.doc.activate(id)?;
        debug!(control = %id.0, kind = kind.name(), "control activated");
        let sequence: &[PageEventKind] = match kind {
            ControlKind::Checkbox | ControlKind::Radio => &[
                PageEventKind::Click,
                PageEventKind::Input,
                PageEventKind::Change,
            ],
            _ => &[PageEventKind::Click],
        };
        Self::dispatch(&mut inner, id, sequence);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_control(name: &str) -> ControlSeed {
        ControlSeed::new(ControlKind::Text).with_name(name)
    }

    #[tokio::test]
    async fn write_fires_input_change_blur_in_order() {
        let page = InMemoryPage::new();
        let id = page.insert(text_control("email"));

        page.write_value(&id, "a@b.c").await.unwrap();

        assert_eq!(page.control(&id).await.unwrap().value, "a@b.c");
        let kinds: Vec<_> = page.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![PageEventKind::Input, PageEventKind::Change, PageEventKind::Blur]
        );
        assert!(page.events().iter().all(|e| e.bubbles));
    }

    #[tokio::test]
    async fn select_write_without_matching_option_clears_selection() {
        let page = InMemoryPage::new();
        let id = page.insert(
            ControlSeed::new(ControlKind::Select)
                .with_name("years")
                .with_option("opt_a", "0-1 years")
                .with_value("opt_a"),
        );

        page.write_value(&id, "nope").await.unwrap();
        assert_eq!(page.control(&id).await.unwrap().value, "");

        page.write_value(&id, "opt_a").await.unwrap();
        assert_eq!(page.control(&id).await.unwrap().value, "opt_a");
    }

    #[tokio::test]
    async fn checkbox_click_toggles_and_fires_activation_events() {
        let page = InMemoryPage::new();
        let id = page.insert(ControlSeed::new(ControlKind::Checkbox).with_name("remote"));

        page.click(&id).await.unwrap();
        assert!(page.control(&id).await.unwrap().checked);

        let kinds: Vec<_> = page.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![PageEventKind::Click, PageEventKind::Input, PageEventKind::Change]
        );

        page.click(&id).await.unwrap();
        assert!(!page.control(&id).await.unwrap().checked);
    }

    #[tokio::test]
    async fn radio_click_unchecks_rest_of_group() {
        let page = InMemoryPage::new();
        let a = page.insert(
            ControlSeed::new(ControlKind::Radio)
                .with_name("size")
                .with_value("s")
                .checked(true),
        );
        let b = page.insert(
            ControlSeed::new(ControlKind::Radio)
                .with_name("size")
                .with_value("m"),
        );
        let other = page.insert(
            ControlSeed::new(ControlKind::Radio)
                .with_name("color")
                .with_value("red")
                .checked(true),
        );

        page.click(&b).await.unwrap();

        assert!(!page.control(&a).await.unwrap().checked);
        assert!(page.control(&b).await.unwrap().checked);
        // other group untouched
        assert!(page.control(&other).await.unwrap().checked);
    }

    #[tokio::test]
    async fn value_write_rejected_for_checked_controls() {
        let page = InMemoryPage::new();
        let id = page.insert(ControlSeed::new(ControlKind::Checkbox));
        let err = page.write_value(&id, "true").await.unwrap_err();
        assert!(matches!(err, PageError::Unsupported { .. }));
    }

    #[tokio::test]
    async fn listener_observes_written_value() {
        use std::sync::{Arc, Mutex as StdMutex};

        let page = InMemoryPage::new();
        let id = page.insert(text_control("email"));

        // A framework mirror: copies the control value into shadow state on input.
        let shadow = Arc::new(StdMutex::new(String::new()));
        let sink = shadow.clone();
        let watched = id.clone();
        page.listen(move |event, doc| {
            if event.kind == PageEventKind::Input && event.control == watched {
                if let Some(snap) = doc.snapshot(&watched) {
                    *sink.lock().unwrap() = snap.value;
                }
            }
        });

        page.write_value(&id, "a@b.c").await.unwrap();
        assert_eq!(shadow.lock().unwrap().as_str(), "a@b.c");
    }

    #[tokio::test]
    async fn listener_may_grow_the_document() {
        let page = InMemoryPage::new();
        let id = page.insert(text_control("country"));

        page.listen(move |event, doc| {
            if event.kind == PageEventKind::Change {
                doc.insert_control(ControlSeed::new(ControlKind::Text).with_name("state"));
            }
        });

        page.write_value(&id, "US").await.unwrap();
        let names: Vec<_> = page
            .controls()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["country", "state"]);
    }

    #[tokio::test]
    async fn missing_control_reports_gone() {
        let page = InMemoryPage::new();
        let id = page.insert(text_control("email"));
        assert!(page.remove(&id));
        let err = page.write_value(&id, "x").await.unwrap_err();
        assert!(matches!(err, PageError::ControlGone(_)));
    }
}
