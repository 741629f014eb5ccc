use serde::{Deserialize, Serialize};

/// Value object identifying a greenhouse.
///
/// The store allocates ids sequentially starting at 1; `new` exists so the
/// persistence layer can rebuild ids from stored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GreenhouseId(u32);

impl GreenhouseId {
    /// Create an id from its raw value
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for GreenhouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        let id = GreenhouseId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(GreenhouseId::new(1), GreenhouseId::new(1));
        assert_ne!(GreenhouseId::new(1), GreenhouseId::new(2));
    }
}
