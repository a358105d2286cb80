// pixie-params/src/processors/parser.rs
use crate::core::{
    CroppingMode, Filter, Gravity, ParamCode, ParamError, ParameterSet, Result, PARAM_CROPPING,
    PARAM_FILTER, PARAM_GRAVITY, PARAM_HEIGHT, PARAM_WIDTH,
};

/// Turns a string like `w_400,h_300,c_p` into a validated [`ParameterSet`].
///
/// Fields not mentioned keep their defaults, a repeated key overwrites the
/// earlier value and unknown keys are skipped. The first invalid token aborts
/// the parse.
pub fn parse_parameters(raw: &str) -> Result<ParameterSet> {
    let mut params = ParameterSet::default();

    for token in raw.split(',') {
        let (key, value) = split_token(token)?;

        match key {
            PARAM_WIDTH => params.width = parse_dimension(PARAM_WIDTH, value)?,
            PARAM_HEIGHT => params.height = parse_dimension(PARAM_HEIGHT, value)?,
            PARAM_CROPPING => params.cropping = parse_code::<CroppingMode>(value)?,
            PARAM_GRAVITY => params.gravity = parse_code::<Gravity>(value)?,
            PARAM_FILTER => params.filter = parse_code::<Filter>(value)?,
            _ => log::trace!("Ignoring unknown parameter {:?}", key),
        }
    }

    log::debug!("Parsed parameters {:?} into {}", raw, params);

    Ok(params)
}

/// Splits on the first `_`; both halves must be non-empty.
pub(crate) fn split_token(token: &str) -> Result<(&str, &str)> {
    match token.split_once('_') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => Ok((key, value)),
        _ => Err(ParamError::MalformedToken {
            token: token.to_string(),
        }),
    }
}

fn parse_dimension(key: &'static str, value: &str) -> Result<u64> {
    parse_number(key, value, 1)
}

/// Base-10 integer of at least `min`; anything below is out of range.
pub(crate) fn parse_number(key: &'static str, value: &str, min: i64) -> Result<u64> {
    let parsed: i64 = value.parse().map_err(|_| ParamError::InvalidNumber {
        key,
        value: value.to_string(),
    })?;

    if parsed < min {
        return Err(ParamError::OutOfRange {
            key,
            value: value.to_string(),
        });
    }

    u64::try_from(parsed).map_err(|_| ParamError::OutOfRange {
        key,
        value: value.to_string(),
    })
}

pub(crate) fn parse_code<T: ParamCode>(value: &str) -> Result<T> {
    let value = value.to_lowercase();

    if let Some(max) = T::MAX_LEN {
        if value.len() > max {
            return Err(ParamError::InvalidLength {
                key: T::KEY,
                value,
                max,
            });
        }
    }

    T::from_code(&value).ok_or(ParamError::InvalidEnum { key: T::KEY, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(token: &str) -> ParamError {
        ParamError::MalformedToken {
            token: token.to_string(),
        }
    }

    #[test]
    fn parses_width_and_height() {
        let params = parse_parameters("w_400,h_300").unwrap();
        assert_eq!(params.width(), 400);
        assert_eq!(params.height(), 300);
        assert_eq!(params.scale(), 1);
        assert_eq!(params.cropping(), CroppingMode::Exact);
        assert_eq!(params.gravity(), Gravity::NorthWest);
        assert_eq!(params.filter(), Filter::None);
    }

    #[test]
    fn parses_every_key() {
        let params = parse_parameters("c_k,g_se,f_grayscale,w_10,h_20").unwrap();
        assert_eq!(params.cropping(), CroppingMode::KeepScale);
        assert_eq!(params.gravity(), Gravity::SouthEast);
        assert_eq!(params.filter(), Filter::Grayscale);
        assert_eq!(params.width(), 10);
        assert_eq!(params.height(), 20);
    }

    #[test]
    fn enum_values_are_case_insensitive() {
        let params = parse_parameters("c_P,g_NE,f_GrayScale").unwrap();
        assert_eq!(params.cropping(), CroppingMode::Part);
        assert_eq!(params.gravity(), Gravity::NorthEast);
        assert_eq!(params.filter(), Filter::Grayscale);
    }

    #[test]
    fn explicit_none_filter_is_accepted() {
        let params = parse_parameters("f_grayscale,f_none").unwrap();
        assert_eq!(params.filter(), Filter::None);
    }

    #[test]
    fn non_positive_dimensions_are_out_of_range() {
        assert_eq!(
            parse_parameters("w_-5"),
            Err(ParamError::OutOfRange {
                key: "w",
                value: "-5".to_string()
            })
        );
        assert!(matches!(
            parse_parameters("h_0"),
            Err(ParamError::OutOfRange { key: "h", .. })
        ));
    }

    #[test]
    fn dimensions_beyond_32_bits_are_accepted() {
        let params = parse_parameters("w_5000000000,h_4294967296").unwrap();
        assert_eq!(params.width(), 5_000_000_000);
        assert_eq!(params.height(), 4_294_967_296);
    }

    #[test]
    fn non_numeric_dimensions_are_invalid_numbers() {
        assert_eq!(
            parse_parameters("w_abc"),
            Err(ParamError::InvalidNumber {
                key: "w",
                value: "abc".to_string()
            })
        );
        assert!(matches!(
            parse_parameters("h_1.5"),
            Err(ParamError::InvalidNumber { key: "h", .. })
        ));
        assert!(matches!(
            parse_parameters("w_99999999999999999999"),
            Err(ParamError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn leading_plus_sign_is_accepted() {
        assert_eq!(parse_parameters("w_+12").unwrap().width(), 12);
    }

    #[test]
    fn unknown_cropping_mode_is_invalid_enum() {
        assert!(matches!(
            parse_parameters("c_x"),
            Err(ParamError::InvalidEnum { key: "c", .. })
        ));
    }

    #[test]
    fn long_codes_fail_on_length_first() {
        assert_eq!(
            parse_parameters("c_xyz"),
            Err(ParamError::InvalidLength {
                key: "c",
                value: "xyz".to_string(),
                max: 1
            })
        );
        assert!(matches!(
            parse_parameters("g_center"),
            Err(ParamError::InvalidLength { key: "g", max: 2, .. })
        ));
        assert!(matches!(
            parse_parameters("g_xx"),
            Err(ParamError::InvalidEnum { key: "g", .. })
        ));
    }

    #[test]
    fn unknown_filter_is_invalid_enum() {
        assert_eq!(
            parse_parameters("f_Sepia"),
            Err(ParamError::InvalidEnum {
                key: "f",
                value: "sepia".to_string()
            })
        );
    }

    #[test]
    fn last_occurrence_wins() {
        assert_eq!(parse_parameters("w_100,w_200").unwrap().width(), 200);
        assert_eq!(
            parse_parameters("g_n,g_s").unwrap().gravity(),
            Gravity::South
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = parse_parameters("x_1,w_400,q_high").unwrap();
        assert_eq!(params.width(), 400);
        assert_eq!(params, parse_parameters("w_400").unwrap());
    }

    #[test]
    fn scale_is_not_taken_from_the_string() {
        assert_eq!(parse_parameters("s_3,w_1").unwrap().scale(), 1);
    }

    #[test]
    fn value_may_contain_underscores() {
        // only the first '_' separates key and value
        assert!(matches!(
            parse_parameters("w_1_0"),
            Err(ParamError::InvalidNumber { value, .. }) if value == "1_0"
        ));
        assert!(parse_parameters("x_a_b,w_5").is_ok());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(parse_parameters("w400"), Err(malformed("w400")));
        assert_eq!(parse_parameters(""), Err(malformed("")));
        assert_eq!(parse_parameters("w_400,"), Err(malformed("")));
        assert_eq!(parse_parameters("_5"), Err(malformed("_5")));
        assert_eq!(parse_parameters("w_"), Err(malformed("w_")));
    }

    #[test]
    fn first_failure_stops_parsing() {
        assert!(matches!(
            parse_parameters("w_10,w_abc,c_zz"),
            Err(ParamError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_parameters("c_zz,w_abc"),
            Err(ParamError::InvalidLength { .. })
        ));
    }

    #[test]
    fn from_str_delegates_to_parser() {
        let params: ParameterSet = "w_400,c_a".parse().unwrap();
        assert_eq!(params.width(), 400);
        assert_eq!(params.cropping(), CroppingMode::All);
    }
}
