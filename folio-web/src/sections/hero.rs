use folio_core::SectionRole;
use folio_core::content::Profile;
use leptos::prelude::*;

use super::icons::{ICON_GITHUB, ICON_LINKEDIN, ICON_MAIL, Icon};
use super::page_section::PageSection;
use crate::controller::use_navigator;

const PARTICLE_COUNT: usize = 20;

/// One floating dot behind the hero text.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    delay: f64,
    duration: f64,
}

impl Particle {
    /// Map four unit samples to a placement: anywhere on screen, up to 2s
    /// delay, 2-5s pulse.
    fn from_unit(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            left: a * 100.0,
            top: b * 100.0,
            delay: c * 2.0,
            duration: 2.0 + d * 3.0,
        }
    }

    fn random() -> Self {
        let r = js_sys::Math::random;
        Self::from_unit(r(), r(), r(), r())
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

#[component]
pub fn Hero(id: String, profile: Profile) -> impl IntoView {
    let nav = use_navigator();
    let work = nav.id_for(SectionRole::Projects).map(|target| {
        view! {
            <button class="btn-primary" on:click=move |_| {
                nav.navigate(&target);
            }>
                "View My Work"
            </button>
        }
    });
    let particles = (0..PARTICLE_COUNT)
        .map(|_| Particle::random())
        .map(|p| view! { <div class="particle" style=p.style()></div> })
        .collect_view();
    let mailto = profile.mailto();

    view! {
        <PageSection id=id class="hero">
            <div class="container">
                <h1 class="hero-title gradient-text">{profile.name}</h1>
                <p class="hero-headline">{profile.headline}</p>
                <p class="hero-summary">{profile.summary}</p>

                <div class="hero-social">
                    <a href=profile.github target="_blank" rel="noopener noreferrer" class="social-round social-github">
                        <Icon path=ICON_GITHUB />
                    </a>
                    <a href=profile.linkedin target="_blank" rel="noopener noreferrer" class="social-round social-linkedin">
                        <Icon path=ICON_LINKEDIN />
                    </a>
                    <a href=mailto class="social-round social-mail">
                        <Icon path=ICON_MAIL />
                    </a>
                </div>

                {work}
            </div>

            <div class="particles">{particles}</div>
        </PageSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_samples_map_to_ranges() {
        let low = Particle::from_unit(0.0, 0.0, 0.0, 0.0);
        let high = Particle::from_unit(1.0, 1.0, 1.0, 1.0);
        assert_eq!(low.duration, 2.0);
        assert_eq!(high.left, 100.0);
        assert_eq!(high.delay, 2.0);
        assert_eq!(high.duration, 5.0);
    }

    #[test]
    fn style_string() {
        let p = Particle::from_unit(0.5, 0.25, 0.5, 0.5);
        assert_eq!(
            p.style(),
            "left: 50.00%; top: 25.00%; animation-delay: 1.00s; animation-duration: 3.50s;"
        );
    }
}
