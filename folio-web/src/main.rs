// folio — single-page portfolio, Leptos 0.8 CSR

mod controller;
mod dom;
mod logging;
mod sections;

use folio_core::{SectionRegistry, SectionRole, Theme};
use folio_core::content::Portfolio;
use leptos::prelude::*;
use sections::*;
use tracing::{error, info};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    match Portfolio::builtin() {
        Ok(portfolio) => view! { <Page portfolio=portfolio /> }.into_any(),
        Err(err) => {
            error!(%err, "portfolio content failed to load");
            view! { <div class="load-error">"Content unavailable: " {err.to_string()}</div> }
                .into_any()
        }
    }
}

/// Theme from `?theme=`, falling back to the configured default.
fn requested_theme(fallback: Theme) -> Theme {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    Theme::from_query(&query, fallback)
}

#[component]
fn Page(portfolio: Portfolio) -> impl IntoView {
    let Portfolio {
        site,
        profile,
        projects,
        skills,
    } = portfolio;

    // Already validated by Portfolio::builtin.
    let sections = SectionRegistry::new(site.sections.clone()).unwrap_or_default();
    let theme = requested_theme(site.default_theme);
    info!(%theme, sections = sections.len(), projects = projects.len(), "portfolio mounted");
    // Section components read the navigator from context, so provide it first.
    controller::provide_navigator(sections.clone(), site.observer.clone(), theme);

    // One block per registered section, in registry order, under its registry id.
    let blocks = sections
        .iter()
        .map(|section| {
            let id = section.id.clone();
            match section.role {
                SectionRole::Home => view! { <Hero id=id profile=profile.clone() /> }.into_any(),
                SectionRole::About => view! { <About id=id profile=profile.clone() /> }.into_any(),
                SectionRole::Projects => {
                    view! { <Projects id=id projects=projects.clone() /> }.into_any()
                }
                SectionRole::Skills => view! { <Skills id=id skills=skills.clone() /> }.into_any(),
                SectionRole::Contact => {
                    view! { <Contact id=id profile=profile.clone() /> }.into_any()
                }
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=theme.root_class()>
            <Nav brand=profile.brand.clone() cv_url=profile.cv_url.clone() />
            <main>{blocks}</main>
            <Footer text=site.footer />
        </div>
    }
}
