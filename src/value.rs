use std::borrow::Cow;

/// Textual form of a query value, before any percent-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryText<'a> {
    /// Free text, escaped when encoding is requested
    Text(Cow<'a, str>),
    /// Canonical form of a primitive; contains nothing that needs escaping
    Literal(String),
    /// Input that is not valid Unicode, carried in its lossy rendering
    Malformed(String),
}

/// Values that can be appended to a query string.
///
/// Implemented for strings, `char`, `bool`, every integer kind and both float
/// kinds. Each converts through its natural textual form (`5` becomes `"5"`,
/// `true` becomes `"true"`).
pub trait QueryValue {
    fn to_query_text(&self) -> QueryText<'_>;
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_text(&self) -> QueryText<'_> {
        (**self).to_query_text()
    }
}

impl QueryValue for str {
    fn to_query_text(&self) -> QueryText<'_> {
        QueryText::Text(Cow::Borrowed(self))
    }
}

impl QueryValue for String {
    fn to_query_text(&self) -> QueryText<'_> {
        QueryText::Text(Cow::Borrowed(self.as_str()))
    }
}

impl QueryValue for Cow<'_, str> {
    fn to_query_text(&self) -> QueryText<'_> {
        QueryText::Text(Cow::Borrowed(self.as_ref()))
    }
}

impl QueryValue for char {
    fn to_query_text(&self) -> QueryText<'_> {
        QueryText::Text(Cow::Owned(self.to_string()))
    }
}

macro_rules! literal_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_text(&self) -> QueryText<'_> {
                    QueryText::Literal(self.to_string())
                }
            }
        )*
    };
}

literal_query_value!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// A string held as UTF-16 code units, as received from platforms that
/// speak UTF-16. May contain unpaired surrogates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16Text<'a>(pub &'a [u16]);

impl QueryValue for Utf16Text<'_> {
    fn to_query_text(&self) -> QueryText<'_> {
        match String::from_utf16(self.0) {
            Ok(text) => QueryText::Text(Cow::Owned(text)),
            Err(_) => QueryText::Malformed(String::from_utf16_lossy(self.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_are_text() {
        assert_eq!("a b".to_query_text(), QueryText::Text(Cow::Borrowed("a b")));
        assert_eq!(
            String::from("x").to_query_text(),
            QueryText::Text(Cow::Borrowed("x"))
        );
        assert_eq!('?'.to_query_text(), QueryText::Text(Cow::Borrowed("?")));
    }

    #[test]
    fn test_primitives_use_natural_form() {
        assert_eq!(5i32.to_query_text(), QueryText::Literal("5".to_string()));
        assert_eq!((-12i64).to_query_text(), QueryText::Literal("-12".to_string()));
        assert_eq!(true.to_query_text(), QueryText::Literal("true".to_string()));
        assert_eq!(2.5f64.to_query_text(), QueryText::Literal("2.5".to_string()));
        assert_eq!(
            u64::MAX.to_query_text(),
            QueryText::Literal("18446744073709551615".to_string())
        );
    }

    #[test]
    fn test_utf16_well_formed() {
        let units: Vec<u16> = "日本".encode_utf16().collect();

        assert_eq!(
            Utf16Text(&units).to_query_text(),
            QueryText::Text(Cow::Borrowed("日本"))
        );
    }

    #[test]
    fn test_utf16_lone_surrogate_is_malformed() {
        let text = Utf16Text(&[0xD840]);

        assert_eq!(
            text.to_query_text(),
            QueryText::Malformed("\u{FFFD}".to_string())
        );
    }
}
