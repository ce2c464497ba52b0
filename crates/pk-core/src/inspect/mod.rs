//! Inspectors for the structured formats the detector routes to.

mod error;
mod json;
mod jwt;
mod regex;

pub use error::InspectError;
pub use json::{format_json, minify_json};
pub use jwt::{decode_jwt, DecodedJwt};
pub use self::regex::{test_regex, RegexFlags, RegexMatch, MAX_MATCHES};
