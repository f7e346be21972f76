use leptos::prelude::*;

use crate::controller::use_navigator;

/// `<section>` tagged with its registry id. Gains `in-view` while the
/// observer reports it intersecting the viewport.
#[component]
pub fn PageSection(
    id: String,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let nav = use_navigator();
    let tracked = id.clone();
    let class = move || {
        if nav.is_visible(&tracked) {
            format!("{class} reveal in-view")
        } else {
            format!("{class} reveal")
        }
    };

    view! {
        <section id=id class=class>
            {children()}
        </section>
    }
}
