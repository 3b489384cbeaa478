//! The page: an element registry plus event listener dispatch.
//!
//! A [`Page`] owns the element tree of one document and routes user events to
//! registered listeners. It is the whole lifecycle story of this crate: build
//! the tree once, adopt it, register listeners once, then feed user events in
//! the order they occur. Handlers run to completion on the calling thread;
//! there are no timers and no queues.
//!
//! Routing rules:
//! - Focus, blur and input events run the listeners of their exact target.
//! - Click events bubble: the target's listeners run first, then each
//!   ancestor's, up to the root.
//! - Document-level listeners run last for every event of their kind,
//!   whatever the target. This is where outside-click dismissal lives.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{trace, warn};

use crate::element::Element;
use crate::error::PageError;
use crate::event::{Event, EventKind};

type Listener = Arc<dyn Fn(&Event) + Send + Sync>;

#[derive(Default)]
struct PageInner {
    elements: HashMap<String, Element>,
    /// Ids in adoption order, for whole-page scans.
    order: Vec<String>,
    /// Child id -> parent id, for click bubbling and containment.
    parents: HashMap<String, String>,
    listeners: HashMap<(EventKind, String), Vec<Listener>>,
    document_listeners: HashMap<EventKind, Vec<Listener>>,
    focused: Option<String>,
}

/// One document's element registry and event dispatcher.
///
/// `Clone` shares the page rather than copying it.
#[derive(Clone, Default)]
pub struct Page {
    inner: Arc<RwLock<PageInner>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Adopt an element and its whole subtree into the page.
    ///
    /// Every node becomes addressable by id. Adopting an id twice is a wiring
    /// error.
    pub fn adopt(&self, element: Element) -> Result<(), PageError> {
        let mut guard = self.inner.write().map_err(|_| PageError::Poisoned)?;
        adopt_subtree(&mut guard, element, None)
    }

    /// Look up an element by id.
    pub fn get(&self, id: &str) -> Option<Element> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.elements.get(id).cloned())
    }

    /// All elements in adoption order.
    pub fn elements(&self) -> Vec<Element> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .order
                    .iter()
                    .filter_map(|id| guard.elements.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Listener registration
    // -------------------------------------------------------------------------

    /// Register a listener on an element. Registration is permanent for the
    /// page's lifetime.
    pub fn add_listener(
        &self,
        target: &str,
        kind: EventKind,
        listener: impl Fn(&Event) + Send + Sync + 'static,
    ) -> Result<(), PageError> {
        let mut guard = self.inner.write().map_err(|_| PageError::Poisoned)?;
        if !guard.elements.contains_key(target) {
            return Err(PageError::UnknownTarget(target.to_string()));
        }
        guard
            .listeners
            .entry((kind, target.to_string()))
            .or_default()
            .push(Arc::new(listener));
        Ok(())
    }

    /// Register a document-level listener, fired for every event of `kind`
    /// regardless of target.
    pub fn add_document_listener(
        &self,
        kind: EventKind,
        listener: impl Fn(&Event) + Send + Sync + 'static,
    ) {
        if let Ok(mut guard) = self.inner.write() {
            guard
                .document_listeners
                .entry(kind)
                .or_default()
                .push(Arc::new(listener));
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Route an event to its listeners.
    ///
    /// The listener set is snapshotted before any handler runs, so a handler
    /// mutating elements never observes a half-dispatched event.
    pub fn dispatch(&self, event: &Event) {
        trace!("dispatching {event:?}");
        let to_run = {
            let Ok(guard) = self.inner.read() else {
                warn!("page lock poisoned, dropping {event:?}");
                return;
            };
            let mut to_run: Vec<Listener> = Vec::new();
            let kind = event.kind();
            match event {
                Event::Click { target } => {
                    // Bubble from the target up through its ancestors.
                    let mut current = target.clone();
                    while let Some(id) = current {
                        if let Some(listeners) = guard.listeners.get(&(kind, id.clone())) {
                            to_run.extend(listeners.iter().cloned());
                        }
                        current = guard.parents.get(&id).cloned();
                    }
                }
                _ => {
                    if let Some(target) = event.target()
                        && let Some(listeners) = guard.listeners.get(&(kind, target.to_string()))
                    {
                        to_run.extend(listeners.iter().cloned());
                    }
                }
            }
            if let Some(listeners) = guard.document_listeners.get(&kind) {
                to_run.extend(listeners.iter().cloned());
            }
            to_run
        };
        for listener in to_run {
            listener(event);
        }
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    /// Move focus to an element, blurring whichever element held it.
    pub fn focus(&self, id: &str) {
        let previous = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.focused.as_deref() == Some(id) {
                return;
            }
            guard.focused.replace(id.to_string())
        };
        if let Some(previous) = previous {
            self.dispatch(&Event::Blur { target: previous });
        }
        self.dispatch(&Event::Focus {
            target: id.to_string(),
        });
    }

    /// Remove focus from an element, if it currently holds it.
    pub fn blur(&self, id: &str) {
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.focused.as_deref() != Some(id) {
                return;
            }
            guard.focused = None;
        }
        self.dispatch(&Event::Blur {
            target: id.to_string(),
        });
    }

    /// The id of the currently focused element.
    pub fn focused(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.focused.clone())
    }

    /// Type into an input: set its value, then dispatch an input event.
    pub fn input(&self, id: &str, value: impl Into<String>) {
        let Some(element) = self.get(id) else {
            warn!("input on unknown element `{id}`");
            return;
        };
        element.set_value(value);
        self.dispatch(&Event::Input {
            target: id.to_string(),
        });
    }

    /// Click on an element.
    pub fn click(&self, id: &str) {
        self.dispatch(&Event::Click {
            target: Some(id.to_string()),
        });
    }

    /// Click on bare document background, outside every element.
    pub fn click_outside(&self) {
        self.dispatch(&Event::Click { target: None });
    }
}

fn adopt_subtree(
    guard: &mut PageInner,
    element: Element,
    parent: Option<&str>,
) -> Result<(), PageError> {
    let id = element.id();
    if guard.elements.contains_key(&id) {
        return Err(PageError::DuplicateId(id));
    }
    if let Some(parent) = parent {
        guard.parents.insert(id.clone(), parent.to_string());
    }
    let children = element.child_elements();
    guard.elements.insert(id.clone(), element);
    guard.order.push(id.clone());
    for child in children {
        adopt_subtree(guard, child, Some(&id))?;
    }
    Ok(())
}
