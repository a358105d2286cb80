// pixie-params/src/processors/validators.rs
//! Membership checks for single, already lower-cased codes.
use crate::core::{CroppingMode, Filter, Gravity, ParamCode};

pub fn is_valid_cropping_mode(code: &str) -> bool {
    CroppingMode::from_code(code).is_some()
}

pub fn is_valid_gravity(code: &str) -> bool {
    Gravity::from_code(code).is_some()
}

pub fn is_valid_filter(code: &str) -> bool {
    Filter::from_code(code).is_some()
}
