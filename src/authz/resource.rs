//! Resource capability classification.
//!
//! Authorization does not care what a post or a like *is*, only how to find out
//! who owns it. Every resource type routed through the evaluator is classified
//! once, here, into one of four shapes:
//!
//! | Capability          | Owner                   | Types                                  |
//! |---------------------|-------------------------|----------------------------------------|
//! | `NoOwner`           | none, only `All` grants | `Role`, `Tag`, `Category`              |
//! | `HasAuthorId`       | the author              | `Post`, `PostDto`, `Comment`, `CommentDto` |
//! | `HasUserId`         | the user who created it | `Like`, `LikeDto`                      |
//! | `IsPrincipalItself` | the record's own id     | `User`                                 |
//!
//! A type missing from the table does not implement [`Resource`] and cannot be
//! passed to the evaluator at all.

use quillpost_models::{
    Category, Comment, CommentDto, HasAuthor, HasUser, Like, LikeDto, Post, PostDto, Role, Tag,
    User, UserId,
};

/// How ownership is derived from a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCapability {
    NoOwner,
    HasAuthorId,
    HasUserId,
    IsPrincipalItself,
}

/// The classified ownership of one resource instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Collection-level or unowned resource.
    NoOwner,
    Author(UserId),
    User(UserId),
    /// The resource is the user record itself.
    Principal(UserId),
}

impl Ownership {
    pub const fn capability(&self) -> ResourceCapability {
        match self {
            Ownership::NoOwner => ResourceCapability::NoOwner,
            Ownership::Author(_) => ResourceCapability::HasAuthorId,
            Ownership::User(_) => ResourceCapability::HasUserId,
            Ownership::Principal(_) => ResourceCapability::IsPrincipalItself,
        }
    }

    pub const fn owner_id(&self) -> Option<UserId> {
        match self {
            Ownership::NoOwner => None,
            Ownership::Author(id) | Ownership::User(id) | Ownership::Principal(id) => Some(*id),
        }
    }
}

/// A resource type with a fixed ownership capability.
pub trait Resource {
    const CAPABILITY: ResourceCapability;

    fn ownership(&self) -> Ownership;
}

/// Implements [`Resource`] for each listed type according to its capability.
macro_rules! classify_resources {
    (
        NoOwner: $($none:ty),* ;
        HasAuthorId: $($authored:ty),* ;
        HasUserId: $($created:ty),* ;
        IsPrincipalItself: $($principal:ty),* $(;)?
    ) => {
        $(
            impl Resource for $none {
                const CAPABILITY: ResourceCapability = ResourceCapability::NoOwner;

                fn ownership(&self) -> Ownership {
                    Ownership::NoOwner
                }
            }
        )*
        $(
            impl Resource for $authored {
                const CAPABILITY: ResourceCapability = ResourceCapability::HasAuthorId;

                fn ownership(&self) -> Ownership {
                    Ownership::Author(self.author_id())
                }
            }
        )*
        $(
            impl Resource for $created {
                const CAPABILITY: ResourceCapability = ResourceCapability::HasUserId;

                fn ownership(&self) -> Ownership {
                    Ownership::User(self.user_id())
                }
            }
        )*
        $(
            impl Resource for $principal {
                const CAPABILITY: ResourceCapability = ResourceCapability::IsPrincipalItself;

                fn ownership(&self) -> Ownership {
                    Ownership::Principal(self.id)
                }
            }
        )*
    };
}

classify_resources! {
    NoOwner: Role, Tag, Category;
    HasAuthorId: Post, PostDto, Comment, CommentDto;
    HasUserId: Like, LikeDto;
    IsPrincipalItself: User;
}
