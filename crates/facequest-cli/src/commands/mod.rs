pub mod export;
pub mod info;
pub mod score;
pub mod validate;
