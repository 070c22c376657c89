pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod messages;
pub mod processing;
pub mod size;
pub mod validation;

pub use batch::{resize_all, BatchResult};
pub use config::{Defaults, Settings};
pub use error::{ResizeError, Result};
pub use logger::{LogLevel, ResizeLog};
pub use messages::Messages;
pub use processing::{
    largest_dimension, load_oriented_image, save_with_source_format, shrink_to_fit,
};
pub use size::{prompt_until_valid, ResizeTarget};
pub use validation::{validate, validate_directory, ArgKind};
