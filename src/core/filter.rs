//! Line filters applied to external tool output.

/// A single line transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Drop lines containing the given text.
    DropMatching(String),
    /// Keep only lines starting with the given text.
    KeepPrefix(String),
    /// Remove the given text from the start of a line, if present.
    StripPrefix(String),
    /// Replace every occurrence of one character with another.
    ReplaceChar(char, char),
    /// Prefix every line with this many spaces.
    Indent(usize),
    /// Drop the first N lines that reach this filter.
    SkipLines(usize),
}

/// An ordered filter chain.
///
/// Each line passes through the filters in order; a filter that drops the
/// line stops it there. `SkipLines` counts only the lines that reach it.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<Filter>,
    seen: Vec<usize>,
}

impl FilterChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter to the end of the chain.
    #[must_use]
    pub fn then(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self.seen.push(0);
        self
    }

    /// Runs one line through the chain.
    pub fn apply(&mut self, line: &str) -> Option<String> {
        let mut line = line.to_string();
        for (filter, seen) in self.filters.iter().zip(self.seen.iter_mut()) {
            match filter {
                Filter::DropMatching(needle) => {
                    if line.contains(needle.as_str()) {
                        return None;
                    }
                }
                Filter::KeepPrefix(prefix) => {
                    if !line.starts_with(prefix.as_str()) {
                        return None;
                    }
                }
                Filter::StripPrefix(prefix) => {
                    if let Some(rest) = line.strip_prefix(prefix.as_str()) {
                        line = rest.to_string();
                    }
                }
                Filter::ReplaceChar(from, to) => {
                    if line.contains(*from) {
                        line = line.replace(*from, &to.to_string());
                    }
                }
                Filter::Indent(width) => {
                    line = format!("{}{line}", " ".repeat(*width));
                }
                Filter::SkipLines(count) => {
                    if *seen < *count {
                        *seen += 1;
                        return None;
                    }
                }
            }
        }
        Some(line)
    }

    /// Runs every line of `input` through the chain.
    pub fn apply_all<'a, I>(&mut self, input: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        input.into_iter().filter_map(|line| self.apply(line)).collect()
    }
}
