use layout_contract::MediaQueryParams;
use leptos::*;

use crate::hooks::use_media_query;

#[component]
/// Renders `children(matches)`, re-rendering when the media features start or stop matching.
pub fn MediaQuery<F, IV>(
    /// Width, height, and orientation features. Unset features always match.
    #[prop(optional)]
    params: MediaQueryParams,
    children: F,
) -> impl IntoView
where
    F: Fn(bool) -> IV + 'static,
    IV: IntoView,
{
    let matches = use_media_query(params);
    move || children(matches.get())
}
