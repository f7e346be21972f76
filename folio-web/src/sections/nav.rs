use leptos::prelude::*;

use super::icons::{ICON_DOWNLOAD, Icon};
use crate::controller::use_navigator;

#[component]
pub fn Nav(brand: String, cv_url: Option<String>) -> impl IntoView {
    let nav = use_navigator();

    let links = nav
        .sections()
        .into_iter()
        .map(|section| {
            let target = section.id.clone();
            let id = section.id;
            view! {
                <button
                    class=move || nav.link_class(&id)
                    on:click=move |_| {
                        nav.navigate(&target);
                    }
                >
                    {section.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="nav-brand gradient-text">{brand}</div>
                <div class="nav-links">
                    {links}
                    {cv_url.map(|href| view! {
                        <a class="nav-cv" href=href download="">
                            <Icon path=ICON_DOWNLOAD size="16" />
                            " CV"
                        </a>
                    })}
                </div>
            </div>
        </nav>
    }
}
