use folio_core::content::Profile;
use leptos::prelude::*;

use super::icons::{ICON_GITHUB, ICON_LINKEDIN, ICON_MAIL, Icon};
use super::page_section::PageSection;

#[component]
pub fn Contact(id: String, profile: Profile) -> impl IntoView {
    let mailto = profile.mailto();

    view! {
        <PageSection id=id class="section band contact">
            <div class="container narrow">
                <h2 class="section-title gradient-text">"Let's Connect"</h2>
                <p class="contact-lead">
                    "I'm always excited to discuss new opportunities, innovative projects, "
                    "or collaborate on cutting-edge research."
                </p>

                <div class="contact-links">
                    <a href=profile.github target="_blank" rel="noopener noreferrer" class="contact-link social-github">
                        <Icon path=ICON_GITHUB />
                        <span>"GitHub"</span>
                    </a>
                    <a href=profile.linkedin target="_blank" rel="noopener noreferrer" class="contact-link social-linkedin">
                        <Icon path=ICON_LINKEDIN />
                        <span>"LinkedIn"</span>
                    </a>
                    <a href=mailto class="contact-link social-mail">
                        <Icon path=ICON_MAIL />
                        <span>"Email"</span>
                    </a>
                </div>

                <div class="contact-card">
                    <p>{profile.location}</p>
                    <p>{profile.availability}</p>
                </div>
            </div>
        </PageSection>
    }
}
