//! The image explorer component.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use scopedom::{
    Element, Event, LayoutResult, MouseButton, ShadowRoot, TextEditResult, TextInputData,
    hit_test,
};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::config::ExplorerConfig;
use crate::descriptor::ImageDescriptor;
use crate::error::{ExplorerError, FetchError};
use crate::registry::{Component, ComponentRegistration};
use crate::source::{HttpImageSource, ImageSource, UnavailableSource};
use crate::view::{self, Action, LIST_ID, MANUAL_INPUT_ID};
use crate::wakeup::WakeupSender;

/// Tag the explorer is registered under.
pub const TAG: &str = "image-explorer";

inventory::submit! {
    ComponentRegistration::new(TAG, || Box::new(ImageExplorer::new()))
}

/// Callback receiving the user's selection. Called at most once per open cycle.
pub type SelectCallback = Box<dyn FnOnce(ImageDescriptor) + Send>;

type FetchResult = Result<Vec<ImageDescriptor>, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerState {
    #[default]
    Idle,
    Open,
}

/// Whether the widget used an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

/// A floating image picker living in its own shadow root.
///
/// Lifecycle: [`initialize`](Self::initialize) once, then any number of
/// [`show`](Self::show) → selection or [`close`](Self::close) cycles.
#[derive(Default)]
pub struct ImageExplorer {
    root: Option<ShadowRoot>,
    source: Option<Arc<dyn ImageSource>>,
    state: ExplorerState,
    callback: Option<SelectCallback>,
    /// Result channel of the current cycle's fetch. Dropping it discards
    /// whatever the task delivers later.
    pending: Option<oneshot::Receiver<FetchResult>>,
    bindings: HashMap<String, Action>,
    manual: TextInputData,
    wakeup: Option<WakeupSender>,
}

impl ImageExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ping `sender` whenever a fetch finishes.
    pub fn set_wakeup(&mut self, sender: WakeupSender) {
        self.wakeup = Some(sender);
    }

    /// Attach to `host`, reading the endpoint from its `data-images-url`
    /// attribute and fetching over HTTP.
    pub fn initialize(&mut self, host: &Element) -> Result<(), ExplorerError> {
        self.initialize_with_config(host, ExplorerConfig::from_host(host))
    }

    /// Attach with an explicit configuration.
    pub fn initialize_with_config(&mut self, host: &Element, config: ExplorerConfig) -> Result<(), ExplorerError> {
        let source: Arc<dyn ImageSource> = match HttpImageSource::from_config(&config) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                warn!("Image explorer '{}' has no usable endpoint: {e}", host.id);
                Arc::new(UnavailableSource::new(e.to_string()))
            }
        };
        self.attach(host, &config, source)
    }

    /// Attach with a custom image source.
    pub fn initialize_with_source(
        &mut self,
        host: &Element,
        source: Arc<dyn ImageSource>,
    ) -> Result<(), ExplorerError> {
        self.attach(host, &ExplorerConfig::from_host(host), source)
    }

    fn attach(
        &mut self,
        host: &Element,
        config: &ExplorerConfig,
        source: Arc<dyn ImageSource>,
    ) -> Result<(), ExplorerError> {
        if let Some(root) = &self.root {
            return Err(ExplorerError::AlreadyInitialized(root.host_id().to_string()));
        }

        let mut root = ShadowRoot::new(host.id.clone());
        root.adopt_style_sheet(config.style_sheet());
        self.root = Some(root);
        self.source = Some(source);

        debug!("Image explorer attached to '{}' ({})", host.id, config.images_url);
        Ok(())
    }

    pub fn state(&self) -> ExplorerState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.root.is_some()
    }

    /// The private tree. `None` until initialized.
    pub fn shadow_root(&self) -> Option<&ShadowRoot> {
        self.root.as_ref()
    }

    /// Whether the list is currently attached to the shadow root.
    pub fn is_list_rendered(&self) -> bool {
        self.root.as_ref().is_some_and(|r| r.find(LIST_ID).is_some())
    }

    /// Open the explorer and start loading the image list.
    ///
    /// Must run inside a tokio runtime. Calling this while open starts a new
    /// cycle: the old list is removed, a late result of the old fetch is
    /// discarded, and the old callback is dropped without being called.
    pub fn show<F>(&mut self, on_select: F) -> Result<(), ExplorerError>
    where
        F: FnOnce(ImageDescriptor) + Send + 'static,
    {
        let source = self.source.clone().ok_or(ExplorerError::NotInitialized)?;
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| ExplorerError::NoRuntime)?;

        if self.state == ExplorerState::Open {
            debug!("Image explorer re-opened; discarding previous cycle");
        }
        self.reset();

        let (tx, rx) = oneshot::channel();
        let wakeup = self.wakeup.clone();
        runtime.spawn(async move {
            let result = source.fetch_images().await;
            // The receiver is gone if the cycle was closed or superseded.
            if tx.send(result).is_ok()
                && let Some(wakeup) = wakeup
            {
                wakeup.send();
            }
        });

        self.callback = Some(Box::new(on_select));
        self.pending = Some(rx);
        self.state = ExplorerState::Open;
        info!("Image explorer opened");
        Ok(())
    }

    /// Render the fetched list if it has arrived. Returns true if the tree
    /// changed.
    pub fn poll_fetch(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(FetchError::Interrupted),
        };
        self.pending = None;
        self.apply_listing(result);
        true
    }

    /// Wait for the current fetch and render its result. Returns immediately
    /// when nothing is pending.
    pub async fn settle(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };
        let result = rx.await.unwrap_or(Err(FetchError::Interrupted));
        self.apply_listing(result);
    }

    fn apply_listing(&mut self, listing: FetchResult) {
        match &listing {
            Ok(images) => debug!("Fetched {} images", images.len()),
            Err(e) => warn!("Failed to load image list: {e}"),
        }

        let view = view::build_list(&listing, &self.manual);
        let Some(root) = self.root.as_mut() else {
            return;
        };
        root.remove_child(LIST_ID);
        root.append_child(view.element);
        self.bindings = view.bindings;
    }

    /// Hand `image` to the callback, then close.
    pub fn select_image(&mut self, image: ImageDescriptor) {
        if let Some(callback) = self.callback.take() {
            info!("Image selected: {}", image.link);
            callback(image);
        }
        self.close();
    }

    /// Remove the list and forget the callback and any pending fetch.
    pub fn close(&mut self) {
        if self.state == ExplorerState::Open {
            info!("Image explorer closed");
        }
        self.reset();
    }

    fn reset(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.remove_child(LIST_ID);
        }
        self.callback = None;
        self.pending = None;
        self.bindings.clear();
        self.manual.clear();
        self.state = ExplorerState::Idle;
    }

    /// Compose the shadow tree into `host` for the page to render.
    pub fn element(&self, host: Element) -> Element {
        match &self.root {
            Some(root) => root.compose(host),
            None => host,
        }
    }

    /// Route an input event while the list is showing.
    ///
    /// Clicks select thumbnails or the Insert button; keys edit the manual
    /// link and Enter submits it. Everything else is left to the host.
    pub fn handle_event(&mut self, event: &Event, layout: &LayoutResult) -> EventOutcome {
        if self.state != ExplorerState::Open || !self.is_list_rendered() {
            return EventOutcome::Ignored;
        }

        match event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(*x, *y, layout),
            Event::Key { key, modifiers } => match self.manual.handle_key(*key, *modifiers) {
                TextEditResult::Submitted => {
                    self.insert_manual();
                    EventOutcome::Consumed
                }
                TextEditResult::Changed | TextEditResult::Handled => {
                    self.refresh_manual_input();
                    EventOutcome::Consumed
                }
                TextEditResult::Ignored => EventOutcome::Ignored,
            },
            _ => EventOutcome::Ignored,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16, layout: &LayoutResult) -> EventOutcome {
        let Some(root) = &self.root else {
            return EventOutcome::Ignored;
        };
        let tree = root.compose(Element::new(TAG));
        let Some(target) = hit_test(layout, &tree, x, y) else {
            let inside = layout.get(LIST_ID).is_some_and(|r| r.contains(x, y));
            return if inside { EventOutcome::Consumed } else { EventOutcome::Ignored };
        };

        match self.bindings.get(&target).cloned() {
            Some(Action::Pick(image)) => self.select_image(image),
            Some(Action::InsertManual) => self.insert_manual(),
            Some(Action::ManualInput) | None => {}
        }
        EventOutcome::Consumed
    }

    fn insert_manual(&mut self) {
        let link = self.manual.text.clone();
        self.select_image(ImageDescriptor::external(link));
    }

    fn refresh_manual_input(&mut self) {
        let input = view::manual_input(&self.manual);
        if let Some(element) = self.root.as_mut().and_then(|r| r.find_mut(MANUAL_INPUT_ID)) {
            *element = input;
        }
    }

    /// Current text of the manual link input.
    pub fn manual_link(&self) -> &str {
        &self.manual.text
    }
}

impl Component for ImageExplorer {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn initialize(&mut self, host: &Element) -> Result<(), ExplorerError> {
        ImageExplorer::initialize(self, host)
    }

    fn element(&self, host: Element) -> Element {
        ImageExplorer::element(self, host)
    }

    fn handle_event(&mut self, event: &Event, layout: &LayoutResult) -> EventOutcome {
        ImageExplorer::handle_event(self, event, layout)
    }

    fn poll(&mut self) -> bool {
        self.poll_fetch()
    }

    fn close(&mut self) {
        ImageExplorer::close(self)
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
