//! Type token resolution: raw token text to [`TypeTag`].

use matwrap_ir::TypeTag;

use crate::ParseError;
use crate::grammar::match_range_bounds;

/// Resolves a raw type token using an ordered first-match dispatch.
///
/// Every arm is an exact comparison except `Range`, which matches any token
/// that merely *contains* `Range` (so `IntRange(0,5)` resolves too). The
/// bounds must then be found by a nested `Range(<min>,<max>)` sub-parse;
/// failure there is fatal rather than falling through to the next arm.
pub fn resolve_type(key: &str, token: &str) -> Result<TypeTag, ParseError> {
    match token {
        "Color" => Ok(TypeTag::Color),
        "Float" => Ok(TypeTag::Float),
        t if t.contains("Range") => {
            let (min, max) =
                match_range_bounds(t).ok_or_else(|| ParseError::MalformedRangeBounds {
                    key: key.to_string(),
                    token: t.to_string(),
                })?;
            Ok(TypeTag::Range {
                min: min.to_string(),
                max: max.to_string(),
            })
        }
        "Vector" => Ok(TypeTag::Vector),
        "2D" => Ok(TypeTag::Texture2D),
        "3D" => Ok(TypeTag::Texture3D),
        "CUBE" => Ok(TypeTag::Cubemap),
        _ => Err(ParseError::UnrecognizedType {
            key: key.to_string(),
            token: token.to_string(),
        }),
    }
}
