//! Layout context: immutable options, the live viewport, and the active breakpoint.
//!
//! Reactive queries are methods on [`LayoutContext`] so they can be driven without a
//! component tree; the `use_*` hooks in [`crate::hooks`] read the context from Leptos
//! context and forward here.

use std::rc::Rc;

use layout_contract::{
    ConfigurationError, CssDeclarations, LayoutOptions, LayoutProps, MediaQueryParams,
    Responsive, ResponsiveQuery, Viewport,
};
use leptos::*;
use viewport_host::{ViewportObserver, ViewportSubscription};

#[derive(Clone, Copy)]
/// Leptos context shared by every layout component below a [`crate::LayoutProvider`].
pub struct LayoutContext {
    /// Breakpoint table, default unit, and cascade defaults.
    pub options: StoredValue<LayoutOptions>,
    /// Current viewport size, updated by the observer.
    pub viewport: RwSignal<Viewport>,
    /// Index of the active breakpoint in the options table.
    pub breakpoint_index: Memo<usize>,
    subscription: StoredValue<ViewportSubscription>,
}

impl LayoutContext {
    /// Seeds the viewport from `observer` and follows its updates until the owning scope is
    /// disposed.
    pub fn new(options: LayoutOptions, observer: &dyn ViewportObserver) -> Self {
        let options = store_value(options);
        let viewport = create_rw_signal(observer.viewport());
        let breakpoint_index = create_memo(move |_| {
            let width = viewport.with(|viewport| viewport.width);
            options.with_value(|options| {
                options
                    .breakpoint_index_for_width(width)
                    .unwrap_or_else(|| {
                        logging::warn!(
                            "viewport width {width}px matches no breakpoint; using `{}`",
                            options.default_breakpoint_name()
                        );
                        options.default_breakpoint_index()
                    })
            })
        });
        let subscription = observer
            .try_subscribe(Rc::new(move |next: Viewport| viewport.set(next)))
            .unwrap_or_else(|err| {
                logging::warn!("viewport listener unavailable; keeping the initial size: {err}");
                ViewportSubscription::detached()
            });
        let subscription = store_value(subscription);

        Self {
            options,
            viewport,
            breakpoint_index,
            subscription,
        }
    }

    /// Stops following the observer. The last viewport stays in place.
    pub fn detach(&self) {
        self.subscription
            .update_value(|subscription| *subscription = ViewportSubscription::detached());
    }

    /// Name of the breakpoint at `index`, or an empty string outside the table.
    pub fn breakpoint_name(&self, index: usize) -> String {
        self.options.with_value(|options| {
            options
                .breakpoints()
                .get(index)
                .map(|breakpoint| breakpoint.name.clone())
                .unwrap_or_default()
        })
    }

    /// Reactive name of the active breakpoint.
    pub fn current_breakpoint(&self) -> Signal<String> {
        let context = *self;
        Signal::derive(move || context.breakpoint_name(context.breakpoint_index.get()))
    }

    /// Calls `callback` with every viewport change after the current one.
    pub fn on_viewport_change(&self, callback: impl Fn(Viewport) + 'static) {
        let viewport = self.viewport;
        create_effect(move |seen: Option<()>| {
            let next = viewport.get();
            if seen.is_some() {
                callback(next);
            }
        });
    }

    /// Calls `callback` with the new breakpoint name whenever the active breakpoint changes.
    pub fn on_breakpoint_change(&self, callback: impl Fn(String) + 'static) {
        let context = *self;
        create_effect(move |seen: Option<()>| {
            let index = context.breakpoint_index.get();
            if seen.is_some() {
                callback(context.breakpoint_name(index));
            }
        });
    }

    /// Reactive match state of `query` against the viewport width.
    ///
    /// # Errors
    ///
    /// Returns the query's [`ConfigurationError`] when it names unknown breakpoints or mixes
    /// `for` with `from`/`to`.
    pub fn query(&self, query: &ResponsiveQuery) -> Result<Signal<bool>, ConfigurationError> {
        let resolved = self
            .options
            .with_value(|options| query.resolve(options.breakpoints()))?;
        let viewport = self.viewport;
        Ok(Signal::derive(move || {
            viewport.with(|viewport| resolved.matches(viewport.width))
        }))
    }

    /// Reactive value of `value` at the active breakpoint. `None` only for an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBreakpoint`] when the mapping names a breakpoint
    /// missing from the table.
    pub fn responsive_value<T: Clone + 'static>(
        &self,
        value: &Responsive<T>,
    ) -> Result<Signal<Option<T>>, ConfigurationError> {
        let bound = self
            .options
            .with_value(|options| value.bind(options.breakpoints(), options.default_behavior()))?;
        let index = self.breakpoint_index;
        Ok(Signal::derive(move || bound.at(index.get()).cloned()))
    }

    /// Reactive CSS declarations of `props` at the active breakpoint.
    ///
    /// # Errors
    ///
    /// See [`LayoutContext::responsive_value`].
    pub fn responsive_props(
        &self,
        props: &LayoutProps,
    ) -> Result<Signal<CssDeclarations>, ConfigurationError> {
        let bound = self.options.with_value(|options| props.bind(options))?;
        let index = self.breakpoint_index;
        Ok(Signal::derive(move || bound.declarations_at(index.get())))
    }

    /// Reactive match state of free-form media features.
    pub fn media_query(&self, params: MediaQueryParams) -> Signal<bool> {
        let viewport = self.viewport;
        Signal::derive(move || params.matches(viewport.get()))
    }
}

/// Reads the [`LayoutContext`] provided by an enclosing [`crate::LayoutProvider`].
///
/// # Panics
///
/// Panics when no provider is mounted above the caller.
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not provided")
}
