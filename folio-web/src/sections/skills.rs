use folio_core::content::SkillGroup;
use leptos::prelude::*;

use super::page_section::PageSection;

#[component]
pub fn Skills(id: String, skills: Vec<SkillGroup>) -> impl IntoView {
    let groups = skills
        .into_iter()
        .map(|group| {
            let items = group
                .items
                .into_iter()
                .map(|skill| view! { <span class="skill">{skill}</span> })
                .collect_view();
            view! {
                <div class="skill-card">
                    <h3>{group.category}</h3>
                    <div class="tags">{items}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageSection id=id class="section">
            <div class="container narrow">
                <h2 class="section-title gradient-text">"Technical Skills"</h2>
                <div class="skills">{groups}</div>
            </div>
        </PageSection>
    }
}
