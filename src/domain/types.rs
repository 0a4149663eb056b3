//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-zero
//! page numbers and sizes) so that once a value reaches the console it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Page numbers start at one.
    #[error("page number must be at least 1")]
    ZeroPageNo,
    /// A page must hold at least one item.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Identifier of a user account on the remote backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i64` backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Macro to generate pagination newtypes over `usize` that reject zero.
macro_rules! nonzero_newtype {
    ($name:ident, $err:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "usize", into = "usize")]
        pub struct $name(usize);

        impl $name {
            /// Creates the value, rejecting zero.
            pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
                if value > 0 { Ok(Self(value)) } else { Err($err) }
            }

            /// Returns the raw `usize`.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

nonzero_newtype!(
    PageNo,
    TypeConstraintError::ZeroPageNo,
    "One-based page number."
);
nonzero_newtype!(
    PageSize,
    TypeConstraintError::ZeroPageSize,
    "Number of records shown on one page."
);

impl PageNo {
    /// The first page.
    pub const FIRST: PageNo = PageNo(1);
}

impl PageSize {
    /// Smallest valid page size.
    pub const MIN: PageSize = PageSize(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_rejects_non_positive_values() {
        assert_eq!(UserId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(UserId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(UserId::new(7).map(UserId::get), Ok(7));
    }

    #[test]
    fn page_values_reject_zero() {
        assert_eq!(PageNo::new(0), Err(TypeConstraintError::ZeroPageNo));
        assert_eq!(PageSize::new(0), Err(TypeConstraintError::ZeroPageSize));
        assert_eq!(PageNo::new(3).map(PageNo::get), Ok(3));
        assert_eq!(PageNo::FIRST.get(), 1);
    }

    #[test]
    fn user_id_deserialization_enforces_constraint() {
        let parsed: Result<UserId, _> = serde_json::from_str("0");
        assert!(parsed.is_err());

        let parsed: UserId = serde_json::from_str("12").expect("valid id");
        assert_eq!(parsed.get(), 12);
    }
}
