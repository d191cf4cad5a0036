// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters for every page port.
//!
//! They record what the controllers do instead of touching a real page,
//! which makes them the hosts of choice for the command-line driver and for
//! tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use crate::application::port::{
    ControlKind, ErrorPanel, FormControl, GalleryGrid, LightboxView, Navigator, OrderFormView,
    OrderTransport, Scheduler, ShowcasePage, Slide, SlideTrack, StatusLabel, SubmitButton,
    ThumbnailPlaceholder, TimerId, TransportError, TransportResponse, ViewportObserver,
};
use crate::domain::order::{FieldValue, FormField, OrderItemLine, OrderPayload};
use crate::domain::ui::RootMargin;

// =============================================================================
// Scheduler
// =============================================================================

/// Scheduler whose timers only fire when the host says so.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: BTreeMap<u64, Duration>,
    started: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Running timers, oldest first.
    #[must_use]
    pub fn active_timers(&self) -> Vec<TimerId> {
        self.active.keys().copied().map(TimerId).collect()
    }

    #[must_use]
    pub fn period_of(&self, id: TimerId) -> Option<Duration> {
        self.active.get(&id.0).copied()
    }

    /// Total number of timers ever started.
    #[must_use]
    pub fn started_count(&self) -> usize {
        self.started
    }
}

impl Scheduler for ManualScheduler {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.started += 1;
        self.active.insert(id, period);
        TimerId(id)
    }

    fn cancel_interval(&mut self, id: TimerId) {
        self.active.remove(&id.0);
    }
}

// =============================================================================
// Viewport observer
// =============================================================================

/// Observer that records which placeholders are watched.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    margin: Option<RootMargin>,
    observed: BTreeSet<usize>,
    unobserve_calls: HashMap<usize, usize>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently observed placeholder indices, ascending.
    #[must_use]
    pub fn observed(&self) -> Vec<usize> {
        self.observed.iter().copied().collect()
    }

    #[must_use]
    pub fn root_margin(&self) -> Option<RootMargin> {
        self.margin
    }

    /// How many times `index` was unobserved.
    #[must_use]
    pub fn unobserve_calls(&self, index: usize) -> usize {
        self.unobserve_calls.get(&index).copied().unwrap_or(0)
    }
}

impl ViewportObserver for RecordingObserver {
    fn set_root_margin(&mut self, margin: RootMargin) {
        self.margin = Some(margin);
    }

    fn observe(&mut self, index: usize) {
        self.observed.insert(index);
    }

    fn unobserve(&mut self, index: usize) {
        self.observed.remove(&index);
        *self.unobserve_calls.entry(index).or_default() += 1;
    }
}

// =============================================================================
// Showcase page
// =============================================================================

#[derive(Debug, Default)]
pub struct MemorySlideTrack {
    slide: Option<Slide>,
    renders: usize,
}

impl MemorySlideTrack {
    #[must_use]
    pub fn slide(&self) -> Option<&Slide> {
        self.slide.as_ref()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl SlideTrack for MemorySlideTrack {
    fn replace_slide(&mut self, slide: &Slide) {
        self.slide = Some(slide.clone());
        self.renders += 1;
    }
}

#[derive(Debug, Default)]
pub struct MemoryStatusLabel {
    text: String,
}

impl MemoryStatusLabel {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusLabel for MemoryStatusLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// A placeholder as the page would hold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryThumbnail {
    pub placeholder: ThumbnailPlaceholder,
    /// Source in the loading attribute; `None` until promoted.
    pub loaded_src: Option<String>,
    pub promotions: usize,
}

#[derive(Debug, Default)]
pub struct MemoryGallery {
    thumbnails: Vec<MemoryThumbnail>,
}

impl MemoryGallery {
    #[must_use]
    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    #[must_use]
    pub fn thumbnail(&self, index: usize) -> Option<&MemoryThumbnail> {
        self.thumbnails
            .iter()
            .find(|thumb| thumb.placeholder.index == index)
    }
}

impl GalleryGrid for MemoryGallery {
    fn clear(&mut self) {
        self.thumbnails.clear();
    }

    fn append_placeholder(&mut self, placeholder: &ThumbnailPlaceholder) {
        self.thumbnails.push(MemoryThumbnail {
            placeholder: placeholder.clone(),
            loaded_src: None,
            promotions: 0,
        });
    }

    fn promote_source(&mut self, index: usize, src: &str) {
        if let Some(thumb) = self
            .thumbnails
            .iter_mut()
            .find(|thumb| thumb.placeholder.index == index)
        {
            thumb.loaded_src = Some(src.to_string());
            thumb.promotions += 1;
        }
    }
}

/// Lightbox overlay state. Starts hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLightbox {
    pub image: Option<String>,
    pub caption: String,
    pub visible: bool,
    pub aria_hidden: bool,
}

impl Default for MemoryLightbox {
    fn default() -> Self {
        Self {
            image: None,
            caption: String::new(),
            visible: false,
            aria_hidden: true,
        }
    }
}

impl LightboxView for MemoryLightbox {
    fn set_image(&mut self, src: Option<&str>) {
        self.image = src.map(str::to_string);
    }

    fn set_caption(&mut self, caption: &str) {
        self.caption = caption.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.aria_hidden = !visible;
    }
}

/// Showcase page whose elements may individually be absent.
///
/// `Default` is a page with no showcase elements at all.
#[derive(Debug, Default)]
pub struct MemoryShowcasePage {
    pub track: Option<MemorySlideTrack>,
    pub status: Option<MemoryStatusLabel>,
    pub gallery: Option<MemoryGallery>,
    pub lightbox: Option<MemoryLightbox>,
}

impl MemoryShowcasePage {
    /// A page carrying every showcase element.
    #[must_use]
    pub fn complete() -> Self {
        Self {
            track: Some(MemorySlideTrack::default()),
            status: Some(MemoryStatusLabel::default()),
            gallery: Some(MemoryGallery::default()),
            lightbox: Some(MemoryLightbox::default()),
        }
    }

    #[must_use]
    pub fn track(&self) -> Option<&MemorySlideTrack> {
        self.track.as_ref()
    }

    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(MemoryStatusLabel::text)
    }

    #[must_use]
    pub fn gallery_grid(&self) -> Option<&MemoryGallery> {
        self.gallery.as_ref()
    }

    #[must_use]
    pub fn lightbox_view(&self) -> Option<&MemoryLightbox> {
        self.lightbox.as_ref()
    }
}

impl ShowcasePage for MemoryShowcasePage {
    fn slide_track(&mut self) -> Option<&mut dyn SlideTrack> {
        self.track.as_mut().map(|track| track as &mut dyn SlideTrack)
    }

    fn status_label(&mut self) -> Option<&mut dyn StatusLabel> {
        self.status.as_mut().map(|status| status as &mut dyn StatusLabel)
    }

    fn gallery(&mut self) -> Option<&mut dyn GalleryGrid> {
        self.gallery.as_mut().map(|grid| grid as &mut dyn GalleryGrid)
    }

    fn lightbox(&mut self) -> Option<&mut dyn LightboxView> {
        self.lightbox.as_mut().map(|view| view as &mut dyn LightboxView)
    }
}

// =============================================================================
// Order form
// =============================================================================

/// Error panel state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryErrorPanel {
    pub header: String,
    pub messages: Vec<String>,
    pub visible: bool,
    pub scroll_requests: usize,
}

impl ErrorPanel for MemoryErrorPanel {
    fn show(&mut self, header: &str, messages: &[String]) {
        self.header = header.to_string();
        self.messages = messages.to_vec();
        self.visible = true;
    }

    fn hide(&mut self) {
        self.header.clear();
        self.messages.clear();
        self.visible = false;
    }

    fn scroll_into_view(&mut self) {
        self.scroll_requests += 1;
    }
}

/// Submit button state, with a log of every label it showed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySubmitButton {
    pub label: String,
    pub disabled: bool,
    pub label_history: Vec<String>,
    pub disable_count: usize,
}

impl MemorySubmitButton {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }
}

impl SubmitButton for MemorySubmitButton {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
        self.label_history.push(label.to_string());
    }

    fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.disable_count += 1;
        }
        self.disabled = disabled;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormContent {
    required: Vec<FormControl>,
    rows: Vec<OrderItemLine>,
    fields: Vec<FormField>,
}

/// Order form held entirely in memory.
///
/// [`reset`](OrderFormView::reset) restores the content the form was built
/// with, as a browser restores initial control values.
#[derive(Debug, Clone)]
pub struct MemoryOrderForm {
    initial: FormContent,
    content: FormContent,
    labels: HashMap<String, String>,
    invalid: BTreeSet<usize>,
    pub error_panel: Option<MemoryErrorPanel>,
    pub submit_button: Option<MemorySubmitButton>,
    resets: usize,
}

impl MemoryOrderForm {
    /// An empty form with an error panel and a "Submit order" button.
    #[must_use]
    pub fn new() -> Self {
        let content = FormContent {
            required: Vec::new(),
            rows: Vec::new(),
            fields: Vec::new(),
        };
        Self {
            initial: content.clone(),
            content,
            labels: HashMap::new(),
            invalid: BTreeSet::new(),
            error_panel: Some(MemoryErrorPanel::default()),
            submit_button: Some(MemorySubmitButton::new("Submit order")),
            resets: 0,
        }
    }

    /// Adds a required control. Its value is also encoded as a field when it
    /// has a name and is filled.
    #[must_use]
    pub fn with_required(mut self, control: FormControl) -> Self {
        if let Some(name) = control.name.as_deref() {
            let encoded = match control.kind {
                ControlKind::Checkbox if control.checked => Some("on".to_string()),
                ControlKind::Checkbox => None,
                ControlKind::Text => Some(control.value.clone()),
            };
            if let Some(value) = encoded {
                self.content.fields.push(FormField::text(name, value));
            }
        }
        self.content.required.push(control);
        self.initial = self.content.clone();
        self
    }

    /// Adds an optional named entry.
    #[must_use]
    pub fn with_field(mut self, field: FormField) -> Self {
        self.content.fields.push(field);
        self.initial = self.content.clone();
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: OrderItemLine) -> Self {
        self.content.rows.push(row);
        self.initial = self.content.clone();
        self
    }

    /// Registers `label[for=control_id]` text.
    #[must_use]
    pub fn with_label(mut self, control_id: &str, text: &str) -> Self {
        self.labels.insert(control_id.to_string(), text.to_string());
        self
    }

    #[must_use]
    pub fn without_error_panel(mut self) -> Self {
        self.error_panel = None;
        self
    }

    #[must_use]
    pub fn without_submit_button(mut self) -> Self {
        self.submit_button = None;
        self
    }

    /// Replaces the current values, leaving the reset snapshot untouched.
    pub fn set_value(&mut self, name: &str, value: &str) {
        for control in &mut self.content.required {
            if control.name.as_deref() == Some(name) {
                control.value = value.to_string();
            }
        }
        for field in &mut self.content.fields {
            if field.name == name {
                field.value = FieldValue::Text(value.to_string());
            }
        }
    }

    /// Indices of required controls currently marked invalid.
    #[must_use]
    pub fn invalid_controls(&self) -> Vec<usize> {
        self.invalid.iter().copied().collect()
    }

    #[must_use]
    pub fn reset_count(&self) -> usize {
        self.resets
    }

    #[must_use]
    pub fn panel(&self) -> Option<&MemoryErrorPanel> {
        self.error_panel.as_ref()
    }

    #[must_use]
    pub fn button(&self) -> Option<&MemorySubmitButton> {
        self.submit_button.as_ref()
    }
}

impl Default for MemoryOrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFormView for MemoryOrderForm {
    fn required_controls(&self) -> Vec<FormControl> {
        self.content.required.clone()
    }

    fn label_for(&self, control_id: &str) -> Option<String> {
        self.labels.get(control_id).cloned()
    }

    fn set_invalid(&mut self, index: usize, invalid: bool) {
        if invalid {
            self.invalid.insert(index);
        } else {
            self.invalid.remove(&index);
        }
    }

    fn item_rows(&self) -> Vec<OrderItemLine> {
        self.content.rows.clone()
    }

    fn fields(&self) -> Vec<FormField> {
        self.content.fields.clone()
    }

    fn reset(&mut self) {
        self.content = self.initial.clone();
        self.resets += 1;
    }

    fn error_panel(&mut self) -> Option<&mut dyn ErrorPanel> {
        self.error_panel
            .as_mut()
            .map(|panel| panel as &mut dyn ErrorPanel)
    }

    fn submit_button(&mut self) -> Option<&mut dyn SubmitButton> {
        self.submit_button
            .as_mut()
            .map(|button| button as &mut dyn SubmitButton)
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Navigator that records every redirect.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    locations: Vec<String>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.locations.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&mut self, location: &str) {
        self.locations.push(location.to_string());
    }
}

// =============================================================================
// Transport
// =============================================================================

/// Transport answering every request with a fixed result and recording the
/// payloads it was given.
#[derive(Debug)]
pub struct ScriptedTransport {
    reply: Result<TransportResponse, TransportError>,
    requests: RefCell<Vec<(String, OrderPayload)>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(TransportResponse::new(status, body)),
            requests: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        Self {
            reply: Err(error),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Endpoint and payload of every request, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, OrderPayload)> {
        self.requests.borrow().clone()
    }
}

impl OrderTransport for ScriptedTransport {
    async fn post_order(
        &self,
        endpoint: &str,
        payload: &OrderPayload,
    ) -> Result<TransportResponse, TransportError> {
        self.requests
            .borrow_mut()
            .push((endpoint.to_string(), payload.clone()));
        self.reply.clone()
    }
}
