//! Strongly-typed ID newtypes for domain entities.
//!
//! Every table in the blog schema is keyed by a `BIGINT`. Wrapping each one in its
//! own newtype keeps a `PostId` from being passed where a `UserId` is expected,
//! which matters most in ownership checks.
//!
//! # Example
//!
//! ```ignore
//! use quillpost_models::ids::{PostId, UserId};
//!
//! fn author_of(post: PostId) -> UserId { /* ... */ }
//!
//! let user_id = UserId::new(7);
//! // author_of(user_id); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;

pub use quillpost_core::permissions::PermissionId;

/// Macro to define a strongly-typed ID newtype over `i64`.
///
/// Generates serde (transparent), display/parse, and SQLx Postgres impls so the
/// type can be bound and decoded directly.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <i64 as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <i64 as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i64 as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i64 as Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <i64 as PgHasArrayType>::array_type_info()
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for User entities. Also the principal identity.
    UserId
);

define_id!(
    /// Strongly-typed ID for Role entities.
    RoleId
);

define_id!(
    /// Strongly-typed ID for Post entities.
    PostId
);

define_id!(
    /// Strongly-typed ID for Comment entities.
    CommentId
);

define_id!(
    /// Strongly-typed ID for Like entities.
    LikeId
);

define_id!(
    /// Strongly-typed ID for Tag entities.
    TagId
);

define_id!(
    /// Strongly-typed ID for Category entities.
    CategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn test_id_from_str_invalid() {
        assert!("seven".parse::<UserId>().is_err());
        assert!("".parse::<RoleId>().is_err());
    }

    #[test]
    fn test_id_debug_and_display() {
        let id = PostId::new(12);
        assert_eq!(format!("{:?}", id), "PostId(12)");
        assert_eq!(format!("{}", id), "12");
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let json = serde_json::to_string(&CommentId::new(5)).unwrap();
        assert_eq!(json, "5");
        let id: LikeId = serde_json::from_str("8").unwrap();
        assert_eq!(id, LikeId::new(8));
    }

    #[test]
    fn test_id_conversion_roundtrip() {
        let id: TagId = 31.into();
        let raw: i64 = id.into();
        assert_eq!(raw, 31);
    }
}
