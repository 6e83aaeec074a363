pub mod app;
pub mod components;
pub mod context;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, CallToAction, LandingApp, StaticLanding, build_app_context};
