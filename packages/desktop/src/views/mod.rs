mod shell;
pub use shell::Shell;

mod auth;
pub use auth::{Login, Signup};

pub use ui::views::AdminView as Admin;
pub use ui::views::ChecklistView as Checklist;
pub use ui::views::FaqView as Faq;
pub use ui::views::GuideView as Guide;
pub use ui::views::LandingView as Landing;
