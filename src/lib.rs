#[path = "url_builder.rs"]
pub mod url_builder;

#[path = "value.rs"]
pub mod value;

#[path = "encoding.rs"]
pub mod encoding;

#[path = "config.rs"]
pub mod config;

#[path = "error.rs"]
pub mod error;

pub use url_builder::UrlStringBuilder;
pub use value::{QueryText, QueryValue, Utf16Text};
