// pixie-params/src/processors/canonical.rs
use super::parser::{parse_code, parse_number, split_token};
use crate::core::{
    CroppingMode, Filter, Gravity, ParamError, ParameterSet, Result, PARAM_CROPPING,
    PARAM_FILTER, PARAM_GRAVITY, PARAM_HEIGHT, PARAM_SCALE, PARAM_WIDTH,
};
use crate::utils::split_extension;

/// Combines an image path and parameters into the cache-key path of the
/// transformed image, e.g. `photo.jpg` becomes
/// `photo--c_e,g_nw,h_300,w_400,f_none,s_1--.jpg`.
///
/// The extension starts at the last `.` of the path. Nothing on disk is
/// touched.
pub fn create_file_path(image_path: &str, params: &ParameterSet) -> Result<String> {
    let (stem, extension) =
        split_extension(image_path).ok_or_else(|| ParamError::MissingExtension {
            path: image_path.to_string(),
        })?;

    let path = format!("{}--{}--{}", stem, params, extension);
    log::debug!("Cache path for {}: {}", image_path, path);

    Ok(path)
}

/// Reads back the parameter part of a cache path, e.g.
/// `c_e,g_nw,h_0,w_400,f_none,s_2`.
///
/// Unlike [`parse_parameters`](super::parse_parameters) a dimension of 0
/// means unset and `s` is honoured, so every encoded set decodes to itself.
pub fn parse_canonical(encoding: &str) -> Result<ParameterSet> {
    let mut params = ParameterSet::default();

    for token in encoding.split(',') {
        let (key, value) = split_token(token)?;

        match key {
            PARAM_WIDTH => params.width = parse_number(PARAM_WIDTH, value, 0)?,
            PARAM_HEIGHT => params.height = parse_number(PARAM_HEIGHT, value, 0)?,
            PARAM_SCALE => {
                params.scale = u32::try_from(parse_number(PARAM_SCALE, value, 0)?).map_err(
                    |_| ParamError::OutOfRange {
                        key: PARAM_SCALE,
                        value: value.to_string(),
                    },
                )?
            }
            PARAM_CROPPING => params.cropping = parse_code::<CroppingMode>(value)?,
            PARAM_GRAVITY => params.gravity = parse_code::<Gravity>(value)?,
            PARAM_FILTER => params.filter = parse_code::<Filter>(value)?,
            _ => log::trace!("Ignoring unknown parameter {:?}", key),
        }
    }

    Ok(params)
}
