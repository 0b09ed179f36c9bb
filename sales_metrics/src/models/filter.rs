//! Category filter applied before the time-series aggregation.

/// Selects which records take part in a rendering pass.
///
/// `All` is the "all categories" choice from the dashboard dropdown;
/// `Only` keeps records whose category matches exactly, case-sensitive,
/// with no normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        }
    }
}
