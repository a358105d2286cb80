// pixie-params/src/core/processor.rs
use super::{ParamError, ParameterSet, Result, PARAM_SCALE};
use crate::processors::{create_file_path, parse_parameters, parse_transformation_name};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Scale forced onto every explicit request, e.g. 2 for high-density
    /// displays. `None` keeps the parsed scale.
    pub scale: Option<u32>,
}

impl ProcessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scale == Some(0) {
            return Err(ParamError::OutOfRange {
                key: PARAM_SCALE,
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

/// Outcome of resolving one raw parameter string against an image path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// `t_<name>` form; the caller looks the preset up by name.
    Named { name: String },
    /// Explicit `key_value` form with its cache-key path.
    Explicit {
        params: ParameterSet,
        cache_path: String,
    },
}

impl Resolved {
    pub fn cache_path(&self) -> Option<&str> {
        match self {
            Self::Explicit { cache_path, .. } => Some(cache_path),
            Self::Named { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestProcessor {
    config: ProcessConfig,
}

impl RequestProcessor {
    pub fn new(config: ProcessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    pub fn resolve(&self, raw: &str, image_path: &str) -> Result<Resolved> {
        if let Some(name) = parse_transformation_name(raw) {
            log::debug!("Request {:?} names transformation {:?}", raw, name);
            return Ok(Resolved::Named {
                name: name.to_string(),
            });
        }

        let params = self.parameters(raw)?;
        let cache_path = create_file_path(image_path, &params)?;

        Ok(Resolved::Explicit { params, cache_path })
    }

    /// Cache-key path for an explicit request. Named requests are not
    /// special-cased here and parse like any other string.
    pub fn cache_path(&self, raw: &str, image_path: &str) -> Result<String> {
        let params = self.parameters(raw)?;
        create_file_path(image_path, &params)
    }

    fn parameters(&self, raw: &str) -> Result<ParameterSet> {
        let params = parse_parameters(raw)?;
        Ok(match self.config.scale {
            Some(scale) => params.with_scale(scale),
            None => params,
        })
    }
}
