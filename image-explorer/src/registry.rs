//! Process-wide component registry.
//!
//! Components announce themselves with `inventory::submit!` and are picked up
//! on first access. Hosts may [`define`] more at startup. A tag maps to exactly
//! one factory for the life of the process.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use log::{debug, warn};
use scopedom::{Element, Event, LayoutResult};

use crate::error::{ExplorerError, RegistryError};
use crate::widget::EventOutcome;

/// Lifecycle hooks every registered component provides.
pub trait Component: Send {
    /// The tag this component is registered under.
    fn tag(&self) -> &'static str;

    /// Attach to a host element. Called once.
    fn initialize(&mut self, host: &Element) -> Result<(), ExplorerError>;

    /// Compose the component's private tree into `host` for rendering.
    fn element(&self, host: Element) -> Element;

    /// Route an input event. `layout` is the host page's last layout.
    fn handle_event(&mut self, event: &Event, layout: &LayoutResult) -> EventOutcome;

    /// Apply any finished background work. Returns true if a render is due.
    fn poll(&mut self) -> bool;

    /// Tear down rendered content.
    fn close(&mut self);

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Factory building a fresh, unattached component.
pub type Factory = fn() -> Box<dyn Component>;

/// Registration entry for inventory.
pub struct ComponentRegistration {
    /// Tag name.
    pub tag: &'static str,
    /// Factory function to create the component.
    pub factory: Factory,
}

impl ComponentRegistration {
    /// Create a new component registration.
    pub const fn new(tag: &'static str, factory: Factory) -> Self {
        Self { tag, factory }
    }
}

inventory::collect!(ComponentRegistration);

fn definitions() -> &'static Mutex<HashMap<&'static str, Factory>> {
    static DEFINITIONS: OnceLock<Mutex<HashMap<&'static str, Factory>>> = OnceLock::new();
    DEFINITIONS.get_or_init(|| {
        Mutex::new(collect_registrations(inventory::iter::<ComponentRegistration>()))
    })
}

/// Build the tag map from static registrations. The first registration of a
/// tag wins; later ones are reported and skipped, matching [`define`].
fn collect_registrations<'a>(
    registrations: impl IntoIterator<Item = &'a ComponentRegistration>,
) -> HashMap<&'static str, Factory> {
    let mut map = HashMap::new();
    for registration in registrations {
        if map.contains_key(registration.tag) {
            warn!("Component <{}> registered more than once; keeping the first", registration.tag);
            continue;
        }
        debug!("Discovered component <{}>", registration.tag);
        map.insert(registration.tag, registration.factory);
    }
    map
}

/// Register a factory under `tag`. Fails if the tag is taken.
pub fn define(tag: &'static str, factory: Factory) -> Result<(), RegistryError> {
    let mut map = definitions().lock().unwrap_or_else(PoisonError::into_inner);
    if map.contains_key(tag) {
        return Err(RegistryError::AlreadyDefined(tag.to_string()));
    }
    debug!("Defined component <{tag}>");
    map.insert(tag, factory);
    Ok(())
}

pub fn is_defined(tag: &str) -> bool {
    definitions()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(tag)
}

/// Build a new instance of the component registered under `tag`.
pub fn create(tag: &str) -> Result<Box<dyn Component>, RegistryError> {
    let factory = definitions()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(tag)
        .copied()
        .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))?;
    Ok(factory())
}

/// Like [`create`], downcast to the concrete component type.
pub fn create_as<T: Component + 'static>(tag: &str) -> Result<Box<T>, RegistryError> {
    create(tag)?
        .into_any()
        .downcast::<T>()
        .map_err(|_| RegistryError::TypeMismatch(tag.to_string()))
}
