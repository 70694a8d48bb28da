use crate::constants::DEFAULT_ZOOM;
use crate::error::{Result, ViewerError};
use std::str::FromStr;

/// Page position and zoom. Only meaningful while a document is loaded, when
/// `current_page < page_count` holds for any non-empty document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    pub current_page: usize,
    pub zoom: f32,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            current_page: 0,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-based page number as typed into the page field.
///
/// Any integer parses, including zero and negatives; range checking against a
/// document happens in [`PageNumber::to_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(i64);

impl PageNumber {
    pub fn parse(text: &str) -> Result<Self> {
        text.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ViewerError::InvalidPageNumber(text.to_string()))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Zero-based index if it falls inside `[0, page_count)`.
    pub fn to_index(self, page_count: usize) -> Option<usize> {
        let index = usize::try_from(self.0.checked_sub(1)?).ok()?;
        (index < page_count).then_some(index)
    }
}

impl FromStr for PageNumber {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_defaults() {
        let state = ViewerState::default();
        assert_eq!(state.current_page, 0);
        assert_eq!(state.zoom, 1.0);
    }

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(PageNumber::parse("7").map(PageNumber::get), Ok(7));
    }

    #[test]
    fn test_parse_trims_whitespace_and_sign() {
        assert_eq!(PageNumber::parse("  3 ").map(PageNumber::get), Ok(3));
        assert_eq!(PageNumber::parse("+2").map(PageNumber::get), Ok(2));
        assert_eq!(PageNumber::parse("-4").map(PageNumber::get), Ok(-4));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for text in ["abc", "", "   ", "1.5", "2a"] {
            assert_eq!(
                PageNumber::parse(text),
                Err(ViewerError::InvalidPageNumber(text.to_string())),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(PageNumber::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_to_index_bounds() {
        let page = |text: &str| PageNumber::parse(text).expect("numeric");
        assert_eq!(page("1").to_index(10), Some(0));
        assert_eq!(page("10").to_index(10), Some(9));
        assert_eq!(page("11").to_index(10), None);
        assert_eq!(page("0").to_index(10), None);
        assert_eq!(page("-3").to_index(10), None);
        assert_eq!(page("1").to_index(0), None);
    }

    #[test]
    fn test_to_index_handles_min_value() {
        assert_eq!(PageNumber(i64::MIN).to_index(5), None);
    }

    #[test]
    fn test_from_str() {
        let page: PageNumber = "12".parse().expect("numeric");
        assert_eq!(page.get(), 12);
    }
}
