use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacequestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid course file: {0}")]
    InvalidCourse(String),

    #[error("Course parse error: {0}")]
    CourseParse(#[from] toml::de::Error),

    #[error("Course serialize error: {0}")]
    CourseSerialize(#[from] toml::ser::Error),

    #[error("Step index {index} out of range (total: {total})")]
    StepIndexOutOfRange { index: usize, total: usize },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FacequestError>;
