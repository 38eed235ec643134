//! Employee identifiers and the sequential id generator.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

/// Unique identifier for an employee.
///
/// Ids are handed out sequentially by an [`IdGenerator`], so comparing two
/// ids from the same generator also compares construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(u32);

impl EmployeeId {
    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Source of employee ids.
///
/// Every hire does one atomic checked increment, so ids stay unique and
/// increasing even when a generator is shared between threads or charts.
/// The counter never wraps: once it reaches `u32::MAX` no further ids are
/// issued.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU32,
}

impl IdGenerator {
    /// Generator whose first id is 1.
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Generator whose first id is `first`.
    pub const fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    /// Process-wide generator, for charts built with
    /// [`OrgChart::with_ids`](crate::OrgChart::with_ids).
    pub fn global() -> Arc<IdGenerator> {
        static GLOBAL: OnceLock<Arc<IdGenerator>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(IdGenerator::new())))
    }

    /// Take the next id, or `None` once the generator is exhausted.
    pub fn next_id(&self) -> Option<EmployeeId> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| next.checked_add(1))
            .ok()
            .map(EmployeeId)
    }

    /// The id the next call to [`next_id`](Self::next_id) would return.
    pub fn peek(&self) -> EmployeeId {
        EmployeeId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! role_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(EmployeeId);

        impl $name {
            pub(crate) fn new(id: EmployeeId) -> Self {
                Self(id)
            }

            /// Underlying employee id.
            pub fn employee_id(self) -> EmployeeId {
                self.0
            }
        }

        impl From<$name> for EmployeeId {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

role_handle!(
    /// Handle to a software engineer in an [`OrgChart`](crate::OrgChart).
    EngineerId
);
role_handle!(
    /// Handle to a technical lead in an [`OrgChart`](crate::OrgChart).
    TechLeadId
);
role_handle!(
    /// Handle to an accountant in an [`OrgChart`](crate::OrgChart).
    AccountantId
);
role_handle!(
    /// Handle to a business lead in an [`OrgChart`](crate::OrgChart).
    BusinessLeadId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_starts_at_one() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id().unwrap().get(), 1);
        assert_eq!(ids.next_id().unwrap().get(), 2);
        assert_eq!(ids.peek().get(), 3);
    }

    #[test]
    fn test_generator_starting_at() {
        let ids = IdGenerator::starting_at(100);
        assert_eq!(ids.next_id().unwrap().to_string(), "100");
    }

    #[test]
    fn test_generator_stops_instead_of_wrapping() {
        let ids = IdGenerator::starting_at(u32::MAX - 1);
        assert_eq!(ids.next_id().map(EmployeeId::get), Some(u32::MAX - 1));
        assert!(ids.next_id().is_none());
        assert!(ids.next_id().is_none());
        assert_eq!(ids.peek().get(), u32::MAX);
    }

    #[test]
    fn test_global_generator_is_shared() {
        let a = IdGenerator::global();
        let b = IdGenerator::global();
        assert!(Arc::ptr_eq(&a, &b));

        let first = a.next_id().unwrap();
        let second = b.next_id().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_parse_employee_id() {
        let id: EmployeeId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert!("forty-two".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn test_concurrent_ids_are_distinct() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || {
                    (0..250).map(|_| ids.next_id().unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<EmployeeId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();

        assert_eq!(all.len(), 2000);
        assert_eq!(all.first().map(|id| id.get()), Some(1));
        assert_eq!(all.last().map(|id| id.get()), Some(2000));
    }
}
