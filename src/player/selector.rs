use std::fmt;

/// Index-or-name addressing for playlists and songs.
///
/// One selector type resolved through one lookup path replaces a
/// combinatorial set of by-index/by-name operation variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Position in the collection (0-based)
    Index(usize),

    /// Exact, case-sensitive name
    Name(String),
}

impl Selector {
    /// Classify a user token: an all-digit token addresses by index,
    /// anything else by name. A playlist or song whose name is itself
    /// all digits can only be addressed by its position.
    pub fn parse(token: &str) -> Self {
        match token.parse::<usize>() {
            Ok(index) => Selector::Index(index),
            Err(_) => Selector::Name(token.to_string()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Index(index) => write!(f, "#{}", index),
            Selector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}
