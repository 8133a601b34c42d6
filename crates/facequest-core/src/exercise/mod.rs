pub mod scoring;
pub mod session;
