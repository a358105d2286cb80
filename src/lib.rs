mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Cli, Commands, Field};
pub use crate::core::{
    CroppingMode, Filter, Gravity, ParamCode, ParamError, ParameterSet, ProcessConfig,
    RequestProcessor, Resolved, Result, DEFAULT_SCALE, PARAM_CROPPING, PARAM_FILTER,
    PARAM_GRAVITY, PARAM_HEIGHT, PARAM_SCALE, PARAM_WIDTH,
};
pub use crate::processors::{
    create_file_path, is_valid_cropping_mode, is_valid_filter, is_valid_gravity,
    parse_canonical, parse_parameters, parse_transformation_name, BatchProcessor, BatchStats,
    Request,
};
pub use utils::split_extension;

pub mod prelude {
    pub use crate::processors::prelude::*;
    pub use crate::{
        CroppingMode, Filter, Gravity, ParamError, ParameterSet, ProcessConfig,
        RequestProcessor, Resolved,
    };
}
