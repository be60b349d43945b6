use layout_contract::{CssDeclarations, LayoutProps, ResponsiveQuery};
use leptos::*;

use super::boxed::box_props;
use super::{configuration_error, merge_layout_class};
use crate::hooks::{use_responsive_props, use_responsive_query};

#[component]
/// Renders children in a layout box only while the responsive query matches.
///
/// With no query props, children always render.
pub fn Only(
    /// Exact breakpoint.
    #[prop(optional, into)]
    breakpoint: Option<String>,
    /// Lower breakpoint of a span.
    #[prop(optional, into)]
    from: Option<String>,
    /// Upper breakpoint of a span.
    #[prop(optional, into)]
    to: Option<String>,
    /// Breakpoint excluded from the match.
    #[prop(optional, into)]
    except: Option<String>,
    /// Renders the wrapper as a flex container.
    #[prop(optional)]
    flex: bool,
    /// With `flex`, renders the wrapper as an inline flex container.
    #[prop(optional)]
    inline: bool,
    #[prop(optional)] props: LayoutProps,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let query = ResponsiveQuery {
        for_breakpoint: breakpoint,
        from,
        to,
        except,
    };
    let props = box_props(props, flex, inline);
    match use_responsive_query(&query)
        .and_then(|matches| use_responsive_props(&props).map(|style| (matches, style)))
    {
        Ok((matches, style)) => view! {
            <Show when=move || matches.get()>
                <div
                    class=merge_layout_class("ui-only", layout_class)
                    data-ui-primitive="true"
                    data-ui-kind="only"
                    style=move || style.get().to_inline_style()
                >
                    {children()}
                </div>
            </Show>
        }
        .into_view(),
        Err(err) => configuration_error("Only", err),
    }
}

#[component]
/// Always renders children in a layout box, hiding them visually and from assistive technology
/// while the responsive query does not match. Layout space is kept.
pub fn Visible(
    /// Exact breakpoint.
    #[prop(optional, into)]
    breakpoint: Option<String>,
    /// Lower breakpoint of a span.
    #[prop(optional, into)]
    from: Option<String>,
    /// Upper breakpoint of a span.
    #[prop(optional, into)]
    to: Option<String>,
    /// Breakpoint excluded from the match.
    #[prop(optional, into)]
    except: Option<String>,
    /// Renders the wrapper as a flex container.
    #[prop(optional)]
    flex: bool,
    /// With `flex`, renders the wrapper as an inline flex container.
    #[prop(optional)]
    inline: bool,
    #[prop(optional)] props: LayoutProps,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let query = ResponsiveQuery {
        for_breakpoint: breakpoint,
        from,
        to,
        except,
    };
    let props = box_props(props, flex, inline);
    match use_responsive_query(&query)
        .and_then(|matches| use_responsive_props(&props).map(|style| (matches, style)))
    {
        Ok((matches, style)) => view! {
            <div
                class=merge_layout_class("ui-visible", layout_class)
                data-ui-primitive="true"
                data-ui-kind="visible"
                style=move || visible_style(style.get(), matches.get()).to_inline_style()
                aria-hidden=move || (!matches.get()).then_some("true")
            >
                {children()}
            </div>
        }
        .into_view(),
        Err(err) => configuration_error("Visible", err),
    }
}

fn visible_style(declarations: CssDeclarations, visible: bool) -> CssDeclarations {
    if visible {
        declarations
    } else {
        declarations.with("visibility", "hidden")
    }
}

#[cfg(test)]
mod tests {
    use layout_contract::{LayoutOptions, Viewport};
    use pretty_assertions::assert_eq;
    use viewport_host::MemoryViewportObserver;

    use super::*;
    use crate::context::LayoutContext;

    fn with_layout(width: f64, test: impl FnOnce(RwSignal<Errors>) + 'static) {
        let runtime = leptos::create_runtime();
        leptos::run_as_child(move || {
            let observer = MemoryViewportObserver::new(Viewport::new(width, 800.0));
            provide_context(LayoutContext::new(LayoutOptions::default(), &observer));
            let errors = create_rw_signal(Errors::default());
            provide_context(errors);
            test(errors);
        });
        runtime.dispose();
    }

    fn recorded(errors: RwSignal<Errors>) -> Vec<String> {
        errors.with(|errors| errors.iter().map(|(_, err)| err.to_string()).collect())
    }

    #[test]
    fn hidden_content_keeps_its_box() {
        let style = CssDeclarations::new().with("display", "flex");
        assert_eq!(
            visible_style(style.clone(), true).to_inline_style(),
            "display: flex;"
        );
        assert_eq!(
            visible_style(style, false).to_inline_style(),
            "display: flex; visibility: hidden;"
        );
    }

    #[test]
    fn visible_applies_layout_props_and_hides_outside_the_query() {
        with_layout(400.0, |_| {
            let html = view! {
                <Visible from="md" flex=true props=LayoutProps::default().padding(8)>
                    "Filters"
                </Visible>
            }
            .into_view()
            .render_to_string()
            .to_string();
            assert!(html.contains("display: flex;"), "{html}");
            assert!(html.contains("padding: 8px;"), "{html}");
            assert!(html.contains("visibility: hidden;"), "{html}");
            assert!(html.contains(r#"aria-hidden="true""#), "{html}");
            assert!(html.contains("Filters"), "{html}");
        });
    }

    #[test]
    fn visible_content_is_not_hidden_inside_the_query() {
        with_layout(1024.0, |_| {
            let html = view! { <Visible from="md">"Filters"</Visible> }
                .into_view()
                .render_to_string()
                .to_string();
            assert!(!html.contains("visibility"), "{html}");
            assert!(!html.contains("aria-hidden"), "{html}");
        });
    }

    #[test]
    fn only_wraps_matching_children_in_a_layout_box() {
        with_layout(400.0, |_| {
            let html = view! {
                <Only breakpoint="xs" flex=true inline=true layout_class="toolbar">
                    "Compact"
                </Only>
                <Only from="md">"Wide"</Only>
            }
            .into_view()
            .render_to_string()
            .to_string();
            assert!(html.contains(r#"class="ui-only toolbar""#), "{html}");
            assert!(html.contains("display: inline-flex;"), "{html}");
            assert!(html.contains("Compact"), "{html}");
            assert!(!html.contains("Wide"), "{html}");
        });
    }

    #[test]
    fn unknown_breakpoints_reach_the_error_boundary() {
        with_layout(400.0, |errors| {
            let _ = view! { <Only breakpoint="nope">"Never"</Only> }.into_view();
            assert_eq!(recorded(errors), vec!["unknown breakpoint `nope`".to_string()]);
        });
    }

    #[test]
    fn conflicting_queries_reach_the_error_boundary() {
        with_layout(400.0, |errors| {
            let _ = view! { <Only breakpoint="sm" from="xs">"Never"</Only> }.into_view();
            assert_eq!(
                recorded(errors),
                vec!["`for` cannot be combined with `from` or `to` in a responsive query".to_string()]
            );
        });
    }

    #[test]
    fn visible_reports_invalid_queries_too() {
        with_layout(400.0, |errors| {
            let _ = view! { <Visible to="huge">"Never"</Visible> }.into_view();
            assert_eq!(recorded(errors), vec!["unknown breakpoint `huge`".to_string()]);
        });
    }
}
