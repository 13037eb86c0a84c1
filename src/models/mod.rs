pub mod enums;
pub mod records;
pub mod results;

pub use enums::*;
pub use records::*;
pub use results::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
