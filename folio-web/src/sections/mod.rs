// Portfolio page sections

mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod nav;
mod page_section;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
