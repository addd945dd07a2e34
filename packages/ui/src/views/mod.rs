mod landing;
pub use landing::LandingView;

mod guide;
pub use guide::GuideView;

mod checklist;
pub use checklist::ChecklistView;

mod faq;
pub use faq::FaqView;

mod admin;
pub use admin::AdminView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;
