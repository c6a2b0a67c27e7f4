use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use server::access::resolve_church;
use server::store::memory::MemoryStore;

#[tokio::test]
async fn known_slug_resolves() {
    let store = MemoryStore::new();
    let id = store.add_church("grace-chapel", "Grace Chapel", None);

    let resolved = resolve_church(&store, "grace-chapel").await.unwrap();
    assert_eq!(resolved, id);
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let store = MemoryStore::new();
    store.add_church("grace-chapel", "Grace Chapel", None);

    let err = resolve_church(&store, "other-chapel").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn resolution_is_pure_per_snapshot() {
    let store = MemoryStore::new();
    let id = store.add_church("river-church", "River Church", None);

    for _ in 0..3 {
        assert_eq!(resolve_church(&store, "river-church").await.unwrap(), id);
    }
    for _ in 0..3 {
        let err = resolve_church(&store, "unknown").await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }
}

#[tokio::test]
async fn slugs_are_case_sensitive() {
    let store = MemoryStore::new();
    store.add_church("grace-chapel", "Grace Chapel", None);

    let err = resolve_church(&store, "GRACE-CHAPEL").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn store_failure_is_not_not_found() {
    let store = MemoryStore::new();
    store.add_church("grace-chapel", "Grace Chapel", None);
    store.set_failing(true);

    let err = resolve_church(&store, "grace-chapel").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::DatabaseError);
}
