use paper_pattern::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_store_append_and_remove() {
    let store = MemoryStore::new();
    let config = PaperConfig::default();

    let first = save_template(&store, &config, "  Morning pages ").await.unwrap();
    assert_eq!(first.name, "Morning pages");
    assert!(first.id.starts_with("saved-"));

    let list = store.list().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], first);

    assert!(store.remove(&first.id).await.unwrap());
    assert!(!store.remove(&first.id).await.unwrap());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let store = MemoryStore::new();
    let result = save_template(&store, &PaperConfig::default(), "   ").await;
    assert!(matches!(result, Err(PaperError::Store(_))));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_json_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    assert!(store.list().await.unwrap().is_empty());
    assert!(!store.remove("saved-1").await.unwrap());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_json_store_persists_in_order() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::in_dir(dir.path());

    let grid = PaperConfig::default().with_template("grid-math").unwrap();
    let dots = PaperConfig::default().with_template("dot-paper").unwrap();
    store
        .append(PaperConfig {
            id: "saved-1".to_string(),
            ..grid
        })
        .await
        .unwrap();
    store
        .append(PaperConfig {
            id: "saved-2".to_string(),
            ..dots
        })
        .await
        .unwrap();

    // a second handle sees the same data
    let reopened = JsonFileStore::in_dir(dir.path());
    let ids: Vec<String> = reopened
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec!["saved-1", "saved-2"]);

    assert!(reopened.remove("saved-1").await.unwrap());
    let remaining = store.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].pattern, PatternType::Dot);
}

#[tokio::test]
async fn test_json_store_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    tokio::fs::write(store.path(), b"{ not an array").await.unwrap();

    assert!(matches!(store.list().await, Err(PaperError::Store(_))));
    let result = save_template(&store, &PaperConfig::default(), "x").await;
    assert!(matches!(result, Err(PaperError::Store(_))));
    let contents = tokio::fs::read(store.path()).await.unwrap();
    assert_eq!(contents, b"{ not an array");
}
