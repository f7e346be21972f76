use folio_core::content::Profile;
use leptos::prelude::*;

use super::page_section::PageSection;

#[component]
pub fn About(id: String, profile: Profile) -> impl IntoView {
    let paragraphs = profile
        .about
        .into_iter()
        .map(|text| view! { <p>{text}</p> })
        .collect_view();
    let chips = profile
        .interests
        .into_iter()
        .map(|interest| view! { <span class="chip">{interest}</span> })
        .collect_view();
    let quote = profile.quote.map(|quote| {
        view! {
            <div class="quote-card">
                <p class="quote-text">"\u{201c}" {quote.text} "\u{201d}"</p>
                <p class="quote-author">"\u{2014} " {quote.author}</p>
            </div>
        }
    });

    view! {
        <PageSection id=id class="section">
            <div class="container narrow">
                <h2 class="section-title gradient-text">"About Me"</h2>
                <div class="about-grid">
                    <div class="about-text">
                        {paragraphs}
                        <div class="chips">{chips}</div>
                    </div>
                    <div>{quote}</div>
                </div>
            </div>
        </PageSection>
    }
}
