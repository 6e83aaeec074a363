mod landing;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use landing::{LandingState, LandingView, use_landing_state};
