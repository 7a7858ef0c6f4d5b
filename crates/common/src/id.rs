//! ID generation utilities.

use uuid::Uuid;

/// ID generator for message records.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new UUID v4-based ID.
    ///
    /// UUID v4 is a 128-bit random value; collisions are vanishingly
    /// unlikely, so ids are never reused within a process lifetime.
    #[must_use]
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uuid_v4() {
        let id_gen = IdGenerator::new();
        let id = id_gen.generate();

        assert_eq!(id.len(), 36); // UUID with hyphens
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generate_is_unique() {
        let id_gen = IdGenerator::new();
        let id1 = id_gen.generate();
        let id2 = id_gen.generate();

        assert_ne!(id1, id2);
    }
}
