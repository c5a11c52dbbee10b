use quillpost::authz::{PolicyError, PolicyProvider, RangeSpec, Requirement, parse_policy};
use quillpost_core::permissions::{
    CatalogError, PermissionAction, PermissionRange, PermissionTarget,
};

#[test]
fn test_every_catalog_combination_parses() {
    for action in PermissionAction::ALL {
        for target in PermissionTarget::ALL {
            for range in PermissionRange::ALL {
                let name = format!("permission.{}.{}.{}", action, target, range);
                let requirement = parse_policy(&name).unwrap().unwrap();
                assert_eq!(requirement, Requirement::with_range(*action, *target, *range));
            }
        }
    }
}

#[test]
fn test_parsed_policy_has_fixed_range() {
    let requirement = parse_policy("permission.Read.Post.Own").unwrap().unwrap();
    assert_eq!(requirement.action, PermissionAction::Read);
    assert_eq!(requirement.target, PermissionTarget::Post);
    assert_eq!(requirement.range, RangeSpec::Fixed(PermissionRange::Own));
}

#[test]
fn test_non_matching_names_are_not_applicable() {
    for name in [
        "permission.Read.Post",
        "permission.Read.Post.Own.Now",
        "permissions.Read.Post.Own",
        "Read.Post.Own.permission",
        "permission",
        "",
    ] {
        assert_eq!(parse_policy(name), Ok(None), "{name}");
    }
}

#[test]
fn test_unknown_action_fails_closed() {
    let err = parse_policy("permission.Frobnicate.Post.Own").unwrap_err();
    assert_eq!(
        err,
        PolicyError::InvalidPolicy {
            name: "permission.Frobnicate.Post.Own".to_string(),
            source: CatalogError::InvalidArgument {
                kind: "permission action",
                value: "Frobnicate".to_string(),
            },
        }
    );
}

#[test]
fn test_unknown_target_fails_closed() {
    let err = parse_policy("permission.Read.Posts.All").unwrap_err();
    assert!(err.to_string().contains("Posts"));
}

#[test]
fn test_case_mismatch_fails_closed() {
    assert!(parse_policy("permission.read.post.all").is_err());
    assert!(parse_policy("permission.Read.Post.own").is_err());
}

#[test]
fn test_provider_caches_per_name() {
    let provider = PolicyProvider::new(true);
    for _ in 0..3 {
        provider.resolve("permission.Update.Comment.Own").unwrap();
    }
    provider.resolve("permission.Update.Comment.All").unwrap();
    assert_eq!(provider.cached_len(), 2);
}

#[test]
fn test_provider_does_not_cache_failures() {
    let provider = PolicyProvider::new(true);
    assert!(provider.resolve("permission.Update.Comment.Mine").is_err());
    assert!(provider.resolve("permission.Update.Comment.Mine").is_err());
    assert_eq!(provider.cached_len(), 0);
}

#[test]
fn test_registered_policy_keeps_unspecified_range() {
    let provider = PolicyProvider::new(false).register(
        "edit-comment",
        Requirement::new(PermissionAction::Update, PermissionTarget::Comment),
    );
    let requirement = provider.resolve("edit-comment").unwrap().unwrap();
    assert_eq!(requirement.range, RangeSpec::Unspecified);
    assert_eq!(provider.resolve("edit-post"), Ok(None));
}
