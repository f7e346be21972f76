//! Inline SVG icons (24px grid, stroked).

use folio_core::content::ProjectIcon;
use leptos::prelude::*;

/// Renders an inline stroked SVG icon from path data.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2";

pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z";

pub const ICON_MAIL: &str = "M2 4h20v16H2zM22 7l-10 6L2 7";

pub const ICON_EXTERNAL: &str = "M15 3h6v6M10 14 21 3M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6";

pub const ICON_DOWNLOAD: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3";

pub const ICON_TELESCOPE: &str = "m10.07 12.49-6.18 1.32a.93.93 0 0 1-1.11-.7l-.54-2.15a1.07 1.07 0 0 1 .69-1.27l13.5-4.44M13.56 11.75l4.33-.92M16 21l-3.1-6.21M16.49 5.94a2 2 0 0 1 1.45-2.43l1.09-.27a1 1 0 0 1 1.21.73l1.52 6.06a1 1 0 0 1-.73 1.21l-1.09.27a2 2 0 0 1-2.43-1.45zM6.16 8.63l1.11 4.46M8 21l3.1-6.21M12 13a2 2 0 1 0 0 4 2 2 0 1 0 0-4z";

pub const ICON_AWARD: &str = "M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12zM15.48 12.89 17 22l-5-3-5 3 1.52-9.11";

pub const ICON_DATABASE: &str = "M3 5c0-1.66 4-3 9-3s9 1.34 9 3-4 3-9 3-9-1.34-9-3zM3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5M3 12c0 1.66 4 3 9 3s9-1.34 9-3";

pub const ICON_CPU: &str = "M4 4h16v16H4zM9 9h6v6H9zM15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2";

pub const ICON_BRAIN: &str = "M12 5a3 3 0 1 0-6 .13 4 4 0 0 0-2.53 5.77 4 4 0 0 0 .56 6.59A4 4 0 1 0 12 18zM12 5a3 3 0 1 1 6 .13 4 4 0 0 1 2.53 5.77 4 4 0 0 1-.56 6.59A4 4 0 1 1 12 18zM12 5v13";

pub fn project_icon(icon: ProjectIcon) -> &'static str {
    match icon {
        ProjectIcon::Telescope => ICON_TELESCOPE,
        ProjectIcon::Award => ICON_AWARD,
        ProjectIcon::Database => ICON_DATABASE,
        ProjectIcon::Cpu => ICON_CPU,
        ProjectIcon::Brain => ICON_BRAIN,
    }
}
