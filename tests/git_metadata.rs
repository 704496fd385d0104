mod common;

use std::error::Error;
use std::sync::Arc;

use byexample::errors::ByExampleError;
use byexample::git::{GitKey, GitMetadataCache, GitMetadataProvider};
use byexample_test_utils::fake_git::{CountingVcs, MapEnvironment};

use crate::common::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

const SHA: &str = "0123456789abcdef0123456789abcdef01234567";

fn provider(env: MapEnvironment, vcs: &CountingVcs) -> GitMetadataProvider {
    GitMetadataProvider::new(GitMetadataCache::new(), Arc::new(env), Arc::new(vcs.clone()))
}

#[tokio::test]
async fn commit_falls_back_to_vcs_once() -> TestResult {
    init_tracing();
    let vcs = CountingVcs::new(Some("main"), Some(SHA));
    let mut git = provider(MapEnvironment::new(), &vcs);

    for _ in 0..3 {
        assert_eq!(git.get(GitKey::Commit).await?, SHA);
    }
    assert_eq!(git.get(GitKey::Short).await?, "0123456");
    assert_eq!(vcs.revision_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn short_first_still_queries_once() -> TestResult {
    init_tracing();
    let vcs = CountingVcs::new(None, Some(SHA));
    let mut git = provider(MapEnvironment::new(), &vcs);

    assert_eq!(git.get(GitKey::Short).await?, "0123456");
    assert_eq!(git.get(GitKey::Commit).await?, SHA);
    assert_eq!(vcs.revision_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn environment_wins_over_vcs() -> TestResult {
    init_tracing();
    let vcs = CountingVcs::new(Some("main"), Some(SHA));
    let env = MapEnvironment::new()
        .with("GITHUB_RUN_ID", "4242")
        .with("GITHUB_REF", "refs/heads/release")
        .with("GITHUB_SHA", "fedcba9876543210");
    let mut git = provider(env, &vcs);

    assert_eq!(git.get(GitKey::RunId).await?, "4242");
    assert_eq!(git.get(GitKey::Ref).await?, "refs/heads/release");
    assert_eq!(git.get(GitKey::Commit).await?, "fedcba9876543210");
    assert_eq!(git.get(GitKey::Short).await?, "fedcba9");
    assert_eq!(vcs.branch_calls(), 0);
    assert_eq!(vcs.revision_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn run_id_defaults_to_dev() -> TestResult {
    init_tracing();
    let vcs = CountingVcs::new(None, None);
    let mut git = provider(MapEnvironment::new().with("GITHUB_RUN_ID", ""), &vcs);

    assert_eq!(git.get(GitKey::RunId).await?, "dev");
    Ok(())
}

#[tokio::test]
async fn ref_falls_back_to_branch_and_is_cached() -> TestResult {
    init_tracing();
    let vcs = CountingVcs::new(Some("main"), None);
    let mut git = provider(MapEnvironment::new(), &vcs);

    assert_eq!(git.get(GitKey::Ref).await?, "main");
    assert_eq!(git.get(GitKey::Ref).await?, "main");
    assert_eq!(vcs.branch_calls(), 1);
    assert_eq!(git.cache().get(GitKey::Ref), Some("main"));
    Ok(())
}

#[tokio::test]
async fn failed_lookup_is_not_cached() -> TestResult {
    init_tracing();
    let vcs = CountingVcs::new(None, None);
    let mut git = provider(MapEnvironment::new(), &vcs);

    assert!(matches!(git.get(GitKey::Commit).await, Err(ByExampleError::Git(_))));
    assert!(matches!(git.get(GitKey::Commit).await, Err(ByExampleError::Git(_))));
    assert_eq!(vcs.revision_calls(), 2);
    assert!(git.cache().is_empty());
    Ok(())
}

#[tokio::test]
async fn prefilled_cache_skips_all_lookups() -> TestResult {
    init_tracing();
    let vcs = CountingVcs::new(None, None);
    let mut cache = GitMetadataCache::new();
    cache.insert(GitKey::Commit, SHA.to_string());
    let mut git = GitMetadataProvider::new(cache, Arc::new(MapEnvironment::new()), Arc::new(vcs.clone()));

    assert_eq!(git.get(GitKey::Short).await?, "0123456");
    assert_eq!(vcs.revision_calls(), 0);
    Ok(())
}
