use crate::encoding;
use crate::value::QueryValue;

use std::fmt;

/// Fluent builder for a URL string with query parameters.
///
/// The base URL is an opaque prefix: it is never parsed or validated.
/// Parameters keep their insertion order and duplicate keys are kept as
/// separate pairs. Values are converted (and optionally percent-encoded)
/// when appended, so `build` only concatenates.
///
/// A builder is not meant to be mutated from several threads at once;
/// share a clone instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlStringBuilder {
    base: String,
    query_params: Vec<(String, String)>,
}

impl UrlStringBuilder {
    /// Creates a builder over `base`, stored verbatim.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        UrlStringBuilder {
            base: base.into(),
            query_params: Vec::new(),
        }
    }

    /// Adds a key/value pair.
    ///
    /// # Arguments
    /// * `key` - The parameter name, appended as is.
    /// * `value` - Any `QueryValue`; converted to its textual form.
    /// * `encode` - Percent-encode the value. Text that cannot be encoded
    ///   becomes an empty value.
    #[must_use]
    pub fn append<V: QueryValue>(self, key: impl Into<String>, value: V, encode: bool) -> Self {
        self.append_if(true, key, value, encode)
    }

    /// Adds a key/value pair only when `condition` holds.
    #[must_use]
    pub fn append_if<V: QueryValue>(
        mut self,
        condition: bool,
        key: impl Into<String>,
        value: V,
        encode: bool,
    ) -> Self {
        if !condition {
            return self;
        }

        let value = encoding::render(value.to_query_text(), encode);
        self.query_params.push((key.into(), value));
        self
    }

    /// Adds one pair per element of `values`, all under `key`, in order.
    #[must_use]
    pub fn append_sequence<I>(self, key: &str, values: I, encode: bool) -> Self
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        values
            .into_iter()
            .fold(self, |builder, value| builder.append(key, value, encode))
    }

    /// Adds every `(key, value)` pair of `args`, in order.
    #[must_use]
    pub fn append_pairs<K, V, I>(self, args: I, encode: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: QueryValue,
    {
        args.into_iter()
            .fold(self, |builder, (key, value)| builder.append(key, value, encode))
    }

    /// Threads the builder through `content` once per element of `items`.
    ///
    /// Lets per-element logic stay inside a chained expression:
    ///
    /// ```
    /// use url_string_builder::UrlStringBuilder;
    ///
    /// let langs = [("source", "EN"), ("target", "JA")];
    /// let url = UrlStringBuilder::new("https://example.com")
    ///     .for_each(langs, |builder, (key, value)| builder.append(key, value, false))
    ///     .build();
    ///
    /// assert_eq!(url, "https://example.com?source=EN&target=JA");
    /// ```
    #[must_use]
    pub fn for_each<I, F>(self, items: I, content: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(Self, I::Item) -> Self,
    {
        items.into_iter().fold(self, content)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Stored pairs, values already encoded.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.query_params
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.query_params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_params.is_empty()
    }

    /// Builds the URL string: the base, then `?` before the first pair and
    /// `&` between the following ones. Without parameters the base is
    /// returned unchanged.
    #[must_use]
    pub fn build(&self) -> String {
        if self.query_params.is_empty() {
            return self.base.clone();
        }

        let query_string: Vec<String> = self
            .query_params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();

        format!("{}?{}", self.base, query_string.join("&"))
    }
}

impl fmt::Display for UrlStringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for (index, (key, value)) in self.query_params.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            write!(f, "{separator}{key}={value}")?;
        }
        Ok(())
    }
}

impl From<&url::Url> for UrlStringBuilder {
    fn from(url: &url::Url) -> Self {
        UrlStringBuilder::new(url.as_str())
    }
}

impl From<url::Url> for UrlStringBuilder {
    fn from(url: url::Url) -> Self {
        UrlStringBuilder::new(String::from(url))
    }
}
