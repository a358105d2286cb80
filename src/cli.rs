// pixie-params/src/cli.rs
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pixie-params")]
#[command(version, about = "Parse image transformation parameters and derive cache paths")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a parameter string such as `w_400,h_300,c_p`
    Parse {
        /// Comma-separated key_value parameters
        params: String,
    },

    /// Print the cache path of an image transformed with the given parameters
    Path {
        /// Path of the source image, including its extension
        image: String,

        /// Comma-separated key_value parameters or `t_<name>`
        params: String,

        /// Override the scale of the request
        #[arg(short, long)]
        scale: Option<u32>,
    },

    /// Print the transformation name of a `t_<name>` parameter string
    Name {
        params: String,
    },

    /// Check a single lower-case code against one of the value sets
    Check {
        #[arg(value_enum)]
        field: Field,

        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Cropping,
    Gravity,
    Filter,
}

impl Field {
    pub fn is_valid(self, code: &str) -> bool {
        match self {
            Field::Cropping => crate::is_valid_cropping_mode(code),
            Field::Gravity => crate::is_valid_gravity(code),
            Field::Filter => crate::is_valid_filter(code),
        }
    }
}
