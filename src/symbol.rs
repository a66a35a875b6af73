use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A terminal symbol or state name: text, integer, or float.
///
/// Equality, ordering, and hashing are total: floats compare via
/// `f64::total_cmp` and hash via their bit pattern, so symbols can live in
/// hash sets and be sorted without caveats. The epsilon symbol is the empty
/// text symbol, which is also the backend's empty-string label.
#[derive(Debug, Clone)]
pub enum Symbol {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Symbol {
    /// The designated epsilon value.
    pub fn epsilon() -> Self {
        Symbol::Text(String::new())
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Text(s) if s.is_empty())
    }

    /// Rendering used inside regex bare text: whitespace characters are
    /// replaced by visible glyphs so atoms like a space remain readable.
    pub fn bare(&self) -> String {
        match self {
            Symbol::Text(s) if s.chars().any(char::is_whitespace) => {
                s.chars().map(visible).collect()
            }
            Symbol::Text(s) => s.clone(),
            Symbol::Int(i) => i.to_string(),
            Symbol::Float(x) => x.to_string(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Symbol::Text(_) => 0,
            Symbol::Int(_) => 1,
            Symbol::Float(_) => 2,
        }
    }
}

fn visible(c: char) -> char {
    match c {
        ' ' => '\u{2423}',
        '\r' => '\u{240d}',
        '\t' => '\u{2409}',
        '\n' => '\u{2424}',
        _ => c,
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Symbol::Text(a), Symbol::Text(b)) => a.cmp(b),
            (Symbol::Int(a), Symbol::Int(b)) => a.cmp(b),
            (Symbol::Float(a), Symbol::Float(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Symbol::Text(s) => s.hash(state),
            Symbol::Int(i) => i.hash(state),
            Symbol::Float(x) => x.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Text(s) => write!(f, "{}", s),
            Symbol::Int(i) => write!(f, "{}", i),
            Symbol::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::Text(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::Text(s)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Text(c.to_string())
    }
}

impl From<i64> for Symbol {
    fn from(i: i64) -> Self {
        Symbol::Int(i)
    }
}

impl From<i32> for Symbol {
    fn from(i: i32) -> Self {
        Symbol::Int(i as i64)
    }
}

impl From<f64> for Symbol {
    fn from(x: f64) -> Self {
        Symbol::Float(x)
    }
}
