use std::ops::Range;

use inventra_core::NULL;

/// A matched substring and its byte range in the searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtractedSpan<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
}

impl<'a> From<regex::Match<'a>> for ExtractedSpan<'a> {
    fn from(m: regex::Match<'a>) -> Self {
        Self {
            text: m.as_str(),
            range: m.range(),
        }
    }
}

/// Outcome of running one extractor over a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    span: Option<ExtractedSpan<'a>>,
    value: String,
}

impl<'a> Extraction<'a> {
    pub(crate) const fn found(span: ExtractedSpan<'a>, value: String) -> Self {
        Self {
            span: Some(span),
            value,
        }
    }

    pub(crate) fn absent() -> Self {
        Self {
            span: None,
            value: NULL.to_string(),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.span.is_some()
    }

    /// The text that was matched, or `""` when nothing matched.
    #[must_use]
    pub fn matched_span(&self) -> &'a str {
        self.span.as_ref().map_or("", |s| s.text)
    }

    /// Byte range of the match in the searched text.
    #[must_use]
    pub fn range(&self) -> Option<Range<usize>> {
        self.span.as_ref().map(|s| s.range.clone())
    }

    /// Extracted value, or the `"Null"` sentinel.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}
