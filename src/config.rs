/// Compilation settings.
///
/// ```
/// use proptable::config::Config;
///
/// let config = Config::default().with_highlight_marker(None).with_max_depth(32);
/// assert_eq!(config.highlight_marker, None);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    /// Character that, written right before `(`, marks the group as a
    /// sub-expression to report in truth tables. `None` disables marking.
    pub highlight_marker: Option<char>,
    /// Maximum nesting of groups and negations accepted by the parser.
    pub max_depth: usize,
}

impl Config {
    pub const DEFAULT_MARKER: char = '*';
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn with_highlight_marker(mut self, marker: Option<char>) -> Self {
        self.highlight_marker = marker;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight_marker: Some(Self::DEFAULT_MARKER),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
