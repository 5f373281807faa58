//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::Error;

/// Identifies a page in a reference sequence.
///
/// Pages are opaque: the simulator only ever compares them for equality
/// and hashes them. There is deliberately no `Ord` impl, since no policy
/// may depend on the numeric value of a page.
///
/// Using `u64` keeps the id space effectively unbounded.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id, "42".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u64) -> Self {
        PageId(id)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PageId)
            .map_err(|_| Error::InvalidPage(s.to_string()))
    }
}

// Displays as the bare number: this is what the frame table prints.
impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment specifiers like `{:>5}` apply
        f.pad(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(42), pid);
    }

    #[test]
    fn test_page_id_equality() {
        assert_eq!(PageId::new(7), PageId::new(7));
        assert_ne!(PageId::new(7), PageId::new(8));
    }

    #[test]
    fn test_page_id_large_values() {
        let pid: PageId = "18446744073709551615".parse().unwrap();
        assert_eq!(pid.0, u64::MAX);
    }

    #[test]
    fn test_page_id_parse_rejects_garbage() {
        assert!(matches!("x1".parse::<PageId>(), Err(Error::InvalidPage(s)) if s == "x1"));
        assert!("-3".parse::<PageId>().is_err());
        assert!("".parse::<PageId>().is_err());
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
        assert_eq!(format!("{:>5}", PageId::new(3)), "    3");
    }
}
