//! Page arithmetic over an ordered rule sequence.
//!
//! Pages are 1-based. Every function here is total: out-of-range pages yield
//! empty slices rather than panicking.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{Quiz, Rule};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PageSizeError {
    #[error("page size must be > 0")]
    Zero,

    #[error("invalid page size: {raw}")]
    Invalid { raw: String },
}

/// Number of rules shown per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Five rules per page.
    pub const DEFAULT: Self = Self::from_const(5);

    /// Ten rules per page, for the long-form layout.
    pub const EXTENDED: Self = Self::from_const(10);

    const fn from_const(value: usize) -> Self {
        match NonZeroUsize::new(value) {
            Some(value) => Self(value),
            None => panic!("page size constant must be non-zero"),
        }
    }

    /// # Errors
    ///
    /// Returns `PageSizeError::Zero` for a zero page size.
    pub fn new(value: usize) -> Result<Self, PageSizeError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(PageSizeError::Zero)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| PageSizeError::Invalid {
            raw: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `ceil(len / page_size)`; zero for an empty sequence.
#[must_use]
pub fn page_count(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Absolute index range of `page`, clamped to `len`.
#[must_use]
pub fn page_range(len: usize, page: usize, page_size: PageSize) -> Range<usize> {
    let Some(offset) = page.checked_sub(1) else {
        return 0..0;
    };
    let start = offset.saturating_mul(page_size.get()).min(len);
    let end = start.saturating_add(page_size.get()).min(len);
    start..end
}

/// Absolute index of the last slot on `page`. The slot may lie past the end
/// of the sequence when the page is only partially filled.
#[must_use]
pub fn quiz_slot(page: usize, page_size: PageSize) -> Option<usize> {
    page.checked_mul(page_size.get())?.checked_sub(1)
}

/// The quiz shown on `page`: the one carried by the rule in the page's last
/// slot. Quizzes on earlier rules of the same page are never shown, and a
/// partially filled page has no quiz.
#[must_use]
pub fn quiz_for_page(rules: &[Rule], page: usize, page_size: PageSize) -> Option<&Quiz> {
    let slot = quiz_slot(page, page_size)?;
    rules.get(slot)?.quiz.as_ref()
}
