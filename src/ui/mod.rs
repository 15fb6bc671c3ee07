pub mod app;
pub mod chat;
pub mod steps;
pub mod widgets;

pub use app::OnboardingApp;
