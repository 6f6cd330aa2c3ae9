pub mod diag;
pub mod pacing;
pub mod pixels;
pub mod system;
