use crate::error::{Result, UrlBuildError};
use crate::value::QueryText;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::warn;

/// Characters escaped in query values.
///
/// Path-safe punctuation (`-._~!$'()*+,;:@/`) and alphanumerics pass through.
/// `&` and `=` are escaped so a value can never split its own pair.
pub const PATH_VALUE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'&')
    .add(b'=');

/// Percent-encode valid text against [`PATH_VALUE_SET`].
pub fn encode_path_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_VALUE_SET).to_string()
}

/// Percent-encode a converted value.
///
/// # Errors
/// Returns `UrlBuildError::Encoding` if the value is not valid Unicode.
pub fn percent_encode(text: QueryText<'_>) -> Result<String> {
    match text {
        QueryText::Text(text) => Ok(encode_path_value(&text)),
        QueryText::Literal(literal) => Ok(literal),
        QueryText::Malformed(lossy) => Err(UrlBuildError::Encoding(lossy)),
    }
}

/// Render a converted value the way it is stored in a builder.
///
/// Encoding failures never surface: the value degrades to an empty string.
pub fn render(text: QueryText<'_>, encode: bool) -> String {
    if !encode {
        return match text {
            QueryText::Text(text) => text.into_owned(),
            QueryText::Literal(literal) | QueryText::Malformed(literal) => literal,
        };
    }

    percent_encode(text).unwrap_or_else(|err| {
        warn!(error = %err, "Percent-encoding failed, using an empty value");
        String::new()
    })
}
