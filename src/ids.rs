//! Opaque ID Generation
//!
//! Process-wide monotonic counter for entity ids.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identity token for subjects, slots and students.
pub type Id = u64;

static NEXT: AtomicU64 = AtomicU64::new(1);

/// Hand out the next unique id.
pub fn next() -> Id {
    NEXT.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = next();
        let b = next();
        assert!(b > a);
    }
}
