use folio_core::content::Project;
use leptos::prelude::*;

use super::icons::{ICON_EXTERNAL, Icon, project_icon};
use super::page_section::PageSection;

#[component]
pub fn Projects(id: String, projects: Vec<Project>) -> impl IntoView {
    let cards = projects
        .into_iter()
        .map(|project| view! { <ProjectCard project=project /> })
        .collect_view();

    view! {
        <PageSection id=id class="section band">
            <div class="container">
                <h2 class="section-title gradient-text">"Featured Projects"</h2>
                <p class="section-lead">
                    "A showcase of my recent work spanning machine learning research, "
                    "full-stack development, and innovative solutions."
                </p>
                <div class="projects">{cards}</div>
            </div>
        </PageSection>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let accent = project.accent_class();
    let card_class = if project.featured {
        format!("project featured {accent}")
    } else {
        format!("project {accent}")
    };
    let icon_class = format!("project-icon {accent}");
    let tags = project
        .tech
        .into_iter()
        .map(|tech| view! { <span class="tag">{tech}</span> })
        .collect_view();

    view! {
        <div class=card_class>
            <div class="project-body">
                <div class="project-head">
                    <div class="project-title">
                        <div class=icon_class>
                            <Icon path=project_icon(project.icon) />
                        </div>
                        <div>
                            <h3>{project.title}</h3>
                            {project.featured.then(|| view! {
                                <span class="badge-featured">"Featured"</span>
                            })}
                        </div>
                    </div>
                    <a href=project.link target="_blank" rel="noopener noreferrer" class="project-link">
                        <Icon path=ICON_EXTERNAL size="20" />
                    </a>
                </div>
                <p class="project-desc">{project.description}</p>
                <div class="tags">{tags}</div>
            </div>
        </div>
    }
}
