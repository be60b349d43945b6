//! Viewport observer trait and host-independent adapters.

use std::{cell::RefCell, fmt, rc::Rc};

use layout_contract::{Viewport, FALLBACK_VIEWPORT};

/// Callback invoked with the new viewport after every size change.
pub type ViewportListener = Rc<dyn Fn(Viewport)>;

/// Host service reporting the viewport size and its changes.
pub trait ViewportObserver {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Registers `listener` for size changes until the returned handle is dropped.
    ///
    /// Hosts that can fail to register return a detached handle here; use
    /// [`ViewportObserver::try_subscribe`] to see the failure.
    fn subscribe(&self, listener: ViewportListener) -> ViewportSubscription;

    /// Registers `listener`, reporting host registration failures.
    ///
    /// # Errors
    ///
    /// Returns a host-specific message when the listener could not be registered.
    fn try_subscribe(&self, listener: ViewportListener) -> Result<ViewportSubscription, String> {
        Ok(self.subscribe(listener))
    }
}

impl<T: ViewportObserver + ?Sized> ViewportObserver for Rc<T> {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn subscribe(&self, listener: ViewportListener) -> ViewportSubscription {
        (**self).subscribe(listener)
    }

    fn try_subscribe(&self, listener: ViewportListener) -> Result<ViewportSubscription, String> {
        (**self).try_subscribe(listener)
    }
}

#[must_use = "dropping the subscription unregisters the listener"]
/// Registration handle returned by [`ViewportObserver::subscribe`].
///
/// The listener stays registered while the handle is alive.
pub struct ViewportSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ViewportSubscription {
    /// Creates a handle that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Creates a handle with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Unregisters the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ViewportSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy)]
/// Observer reporting a fixed viewport, for non-browser targets and baseline tests.
pub struct NoopViewportObserver {
    viewport: Viewport,
}

impl Default for NoopViewportObserver {
    fn default() -> Self {
        Self {
            viewport: FALLBACK_VIEWPORT,
        }
    }
}

impl NoopViewportObserver {
    /// Observer that always reports `viewport`.
    pub fn fixed(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

impl ViewportObserver for NoopViewportObserver {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn subscribe(&self, _listener: ViewportListener) -> ViewportSubscription {
        ViewportSubscription::detached()
    }
}

struct MemoryViewportState {
    viewport: Viewport,
    next_listener_id: u64,
    listeners: Vec<(u64, ViewportListener)>,
}

#[derive(Clone)]
/// In-memory observer whose size is changed with [`MemoryViewportObserver::resize`].
pub struct MemoryViewportObserver {
    inner: Rc<RefCell<MemoryViewportState>>,
}

impl Default for MemoryViewportObserver {
    fn default() -> Self {
        Self::new(FALLBACK_VIEWPORT)
    }
}

impl fmt::Debug for MemoryViewportObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("MemoryViewportObserver")
            .field("viewport", &state.viewport)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl MemoryViewportObserver {
    /// Observer starting at `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryViewportState {
                viewport,
                next_listener_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Updates the viewport and notifies listeners when the size changed.
    pub fn resize(&self, viewport: Viewport) {
        let listeners: Vec<ViewportListener> = {
            let mut state = self.inner.borrow_mut();
            if state.viewport == viewport {
                return;
            }
            state.viewport = viewport;
            state
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        };
        for listener in listeners {
            listener(viewport);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ViewportObserver for MemoryViewportObserver {
    fn viewport(&self) -> Viewport {
        self.inner.borrow().viewport
    }

    fn subscribe(&self, listener: ViewportListener) -> ViewportSubscription {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.listeners.push((id, listener));
            id
        };
        let inner = Rc::downgrade(&self.inner);
        ViewportSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}
