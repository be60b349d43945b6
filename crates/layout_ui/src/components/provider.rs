use std::rc::Rc;

use layout_contract::LayoutOptions;
use leptos::*;
use viewport_host::ViewportObserver;
use viewport_host_web::viewport_observer;

use crate::context::LayoutContext;

#[component]
/// Provides [`LayoutContext`] to descendant layout components and hooks.
pub fn LayoutProvider(
    /// Breakpoint table and defaults. Uses [`LayoutOptions::default`] when omitted.
    #[prop(optional)]
    options: Option<LayoutOptions>,
    /// Viewport source. Uses the observer selected for the active build when omitted.
    #[prop(optional)]
    observer: Option<Rc<dyn ViewportObserver>>,
    children: Children,
) -> impl IntoView {
    let options = options.unwrap_or_default();
    let context = match observer {
        Some(observer) => LayoutContext::new(options, observer.as_ref()),
        None => LayoutContext::new(options, &viewport_observer()),
    };
    provide_context(context);
    children()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use layout_contract::{Breakpoint, BreakpointTable, Viewport};
    use pretty_assertions::assert_eq;
    use viewport_host::MemoryViewportObserver;

    use super::*;
    use crate::hooks::use_current_breakpoint;

    type Captured = Rc<RefCell<Option<Signal<String>>>>;

    #[component]
    fn CurrentBreakpoint(captured: Captured) -> impl IntoView {
        let current = use_current_breakpoint();
        *captured.borrow_mut() = Some(current);
        move || current.get()
    }

    fn captured_breakpoint(captured: &Captured) -> String {
        captured
            .borrow()
            .map(|current| current.get())
            .expect("breakpoint captured")
    }

    #[test]
    fn injected_observer_drives_descendants() {
        let runtime = leptos::create_runtime();
        leptos::run_as_child(|| {
            let observer = MemoryViewportObserver::new(Viewport::new(400.0, 800.0));
            let injected: Rc<dyn ViewportObserver> = Rc::new(observer.clone());
            let captured = Captured::default();
            let child_captured = Rc::clone(&captured);
            let html = view! {
                <LayoutProvider observer=injected>
                    <CurrentBreakpoint captured=child_captured/>
                </LayoutProvider>
            }
            .into_view()
            .render_to_string()
            .to_string();
            assert!(html.contains("xs"), "{html}");
            assert_eq!(observer.listener_count(), 1);

            observer.resize(Viewport::new(800.0, 600.0));
            assert_eq!(captured_breakpoint(&captured), "md");
        });
        runtime.dispose();
    }

    #[test]
    fn options_replace_the_default_table() {
        let runtime = leptos::create_runtime();
        leptos::run_as_child(|| {
            let observer = MemoryViewportObserver::new(Viewport::new(700.0, 800.0));
            let injected: Rc<dyn ViewportObserver> = Rc::new(observer.clone());
            let options = LayoutOptions::with_breakpoints(
                BreakpointTable::new(vec![
                    Breakpoint::new("phone", 0.0),
                    Breakpoint::new("tablet", 600.0),
                ])
                .expect("valid table"),
            );
            let captured = Captured::default();
            let child_captured = Rc::clone(&captured);
            let _ = view! {
                <LayoutProvider options=options observer=injected>
                    <CurrentBreakpoint captured=child_captured/>
                </LayoutProvider>
            }
            .into_view();
            assert_eq!(captured_breakpoint(&captured), "tablet");
        });
        runtime.dispose();
    }

    #[test]
    fn omitted_observer_uses_the_build_default() {
        let runtime = leptos::create_runtime();
        leptos::run_as_child(|| {
            let captured = Captured::default();
            let child_captured = Rc::clone(&captured);
            let _ = view! {
                <LayoutProvider>
                    <CurrentBreakpoint captured=child_captured/>
                </LayoutProvider>
            }
            .into_view();
            assert_eq!(captured_breakpoint(&captured), "lg");
        });
        runtime.dispose();
    }
}
