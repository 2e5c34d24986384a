use std::sync::Arc;

mod support;

use slugkeeper::domain::errors::DomainError;
use slugkeeper::domain::slug::{
    CheckFailurePolicy, EntityIdentity, EntityType, ScopeFilters, SlugError, SlugResolver,
};
use support::{InMemorySlugRepo, StoredRow};

const POST: EntityType = EntityType::new("post");

fn resolver(repo: &Arc<InMemorySlugRepo>) -> SlugResolver {
    SlugResolver::new(repo.clone())
}

#[tokio::test]
async fn free_base_is_returned_unchanged() {
    support::init_tracing();
    let repo = Arc::new(InMemorySlugRepo::new());

    let slug = resolver(&repo)
        .resolve(POST, "my-title", None, &ScopeFilters::new())
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "my-title");
    assert_eq!(repo.probes(), vec!["my-title"]);
}

#[tokio::test]
async fn collisions_advance_suffix_in_order() {
    let repo = Arc::new(
        InMemorySlugRepo::new()
            .with_row(StoredRow::new(POST, 1, "my-title"))
            .with_row(StoredRow::new(POST, 2, "my-title-2")),
    );

    let slug = resolver(&repo)
        .resolve(POST, "my-title", None, &ScopeFilters::new())
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "my-title-3");
    assert_eq!(repo.probes(), vec!["my-title", "my-title-2", "my-title-3"]);
}

#[tokio::test]
async fn comparison_ignores_case() {
    let repo = Arc::new(InMemorySlugRepo::new().with_row(StoredRow::new(POST, 1, "My-Title")));

    let slug = resolver(&repo)
        .resolve(POST, "my-title", None, &ScopeFilters::new())
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "my-title-2");
}

#[tokio::test]
async fn exhaustion_after_exactly_max_attempts() {
    let repo = Arc::new(InMemorySlugRepo::new().collide_all());

    let err = resolver(&repo)
        .resolve(POST, "taken", None, &ScopeFilters::new())
        .await
        .unwrap_err();

    match err {
        DomainError::Slug(SlugError::ExhaustedAttempts { base, attempts, .. }) => {
            assert_eq!(base, "taken");
            assert_eq!(attempts, 100);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(repo.probe_count(), 100);
    assert_eq!(repo.probes().last().map(String::as_str), Some("taken-100"));
}

#[tokio::test]
async fn custom_attempt_budget_is_honoured() {
    let repo = Arc::new(InMemorySlugRepo::new().collide_all());

    let err = resolver(&repo)
        .with_max_attempts(3)
        .resolve(POST, "taken", None, &ScopeFilters::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Slug(SlugError::ExhaustedAttempts { attempts: 3, .. })
    ));
    assert_eq!(repo.probes(), vec!["taken", "taken-2", "taken-3"]);
}

#[tokio::test]
async fn blank_candidate_is_rejected_without_probing() {
    let repo = Arc::new(InMemorySlugRepo::new());

    for blank in ["", "   ", "-"] {
        let err = resolver(&repo)
            .resolve(POST, blank, None, &ScopeFilters::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Slug(SlugError::BlankCandidate { entity_type }) if entity_type == POST
        ));
    }
    assert_eq!(repo.probe_count(), 0);
}

#[tokio::test]
async fn different_scope_groups_may_share_a_slug() {
    let repo = Arc::new(
        InMemorySlugRepo::new().with_row(
            StoredRow::new(POST, 1, "about-us").scope(ScopeFilters::new().with("locale", "en")),
        ),
    );

    let german = ScopeFilters::new().with("locale", "de");
    let slug = resolver(&repo)
        .resolve(POST, "about-us", None, &german)
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "about-us");

    let english = ScopeFilters::new().with("locale", "en");
    let slug = resolver(&repo)
        .resolve(POST, "about-us", None, &english)
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "about-us-2");
}

#[tokio::test]
async fn entity_types_do_not_collide() {
    let repo = Arc::new(
        InMemorySlugRepo::new().with_row(StoredRow::new(EntityType::new("tag"), 1, "rust")),
    );

    let slug = resolver(&repo)
        .resolve(POST, "rust", None, &ScopeFilters::new())
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "rust");
}

#[tokio::test]
async fn own_row_is_not_a_collision() {
    let repo = Arc::new(InMemorySlugRepo::new().with_row(StoredRow::new(POST, 12, "my-title")));
    let own = EntityIdentity::from(12_i64);

    let slug = resolver(&repo)
        .resolve(POST, "my-title", Some(&own), &ScopeFilters::new())
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "my-title");
}

#[tokio::test]
async fn other_rows_still_collide_during_update() {
    let repo = Arc::new(
        InMemorySlugRepo::new()
            .with_row(StoredRow::new(POST, 7, "hello-world-this-is-a-test"))
            .with_row(StoredRow::new(POST, 9, "hello-world-this-is-a-test")),
    );
    let current = EntityIdentity::from(12_i64);

    let slug = resolver(&repo)
        .resolve(
            POST,
            "hello-world-this-is-a-test",
            Some(&current),
            &ScopeFilters::new(),
        )
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "hello-world-this-is-a-test-2");
}

#[tokio::test]
async fn failed_checks_fail_open_by_default() {
    support::init_tracing();
    let repo = Arc::new(InMemorySlugRepo::new().failing_checks());

    let slug = resolver(&repo)
        .resolve(POST, "my-title", None, &ScopeFilters::new())
        .await
        .unwrap();

    // An unevaluable check counts as "no collision", so the base is accepted
    // even though a duplicate could exist.
    assert_eq!(slug.as_str(), "my-title");
    assert_eq!(repo.probe_count(), 1);
}

#[tokio::test]
async fn failed_checks_exhaust_when_failing_closed() {
    let repo = Arc::new(InMemorySlugRepo::new().failing_checks());

    let err = resolver(&repo)
        .with_check_failure_policy(CheckFailurePolicy::FailClosed)
        .with_max_attempts(4)
        .resolve(POST, "my-title", None, &ScopeFilters::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Slug(SlugError::ExhaustedAttempts { attempts: 4, .. })
    ));
    assert_eq!(repo.probe_count(), 4);
}

#[tokio::test]
async fn configuration_errors_are_not_swallowed() {
    let repo = Arc::new(InMemorySlugRepo::new().misconfigured());

    let err = resolver(&repo)
        .resolve(POST, "my-title", None, &ScopeFilters::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Slug(SlugError::MisconfiguredProvider(_))
    ));
}

#[tokio::test]
async fn zero_attempt_budget_is_clamped_to_one() {
    let repo = Arc::new(InMemorySlugRepo::new().collide_all());
    let resolver = resolver(&repo).with_max_attempts(0);
    assert_eq!(resolver.max_attempts(), 1);

    let err = resolver
        .resolve(POST, "x", None, &ScopeFilters::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Slug(SlugError::ExhaustedAttempts { attempts: 1, .. })
    ));
    assert_eq!(repo.probe_count(), 1);
}
