pub mod capability;
pub mod consts;
pub mod course;
pub mod error;
pub mod exercise;
pub mod geometry;
pub mod progress;
