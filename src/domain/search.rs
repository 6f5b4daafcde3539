/// A non-empty, user-supplied search string.
///
/// Screens treat an absent or empty query parameter as "show everything", so
/// construction goes through [`SearchTerm::parse`], which returns `None` for
/// both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(s) if !s.is_empty() => Some(Self(s.to_string())),
            _ => None,
        }
    }

    /// `ILIKE` pattern matching the term as a literal substring.
    ///
    /// `%`, `_` and the escape character itself are escaped so user input is
    /// never interpreted as a wildcard. The pattern is always bound as a query
    /// parameter.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// Case-insensitive substring test with the same semantics as
    /// [`like_pattern`](Self::like_pattern), for values already in memory.
    pub fn matches(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.0.to_lowercase())
    }
}
