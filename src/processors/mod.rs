// pixie-params/src/processors/mod.rs
mod batch;
mod canonical;
mod naming;
mod parser;
mod validators;

pub use batch::{BatchProcessor, BatchStats, Request};
pub use canonical::{create_file_path, parse_canonical};
pub use naming::parse_transformation_name;
pub use parser::parse_parameters;
pub use validators::{is_valid_cropping_mode, is_valid_filter, is_valid_gravity};

pub mod prelude {
    pub use super::{
        create_file_path, parse_canonical, parse_parameters, parse_transformation_name,
    };
}
