use ideavault_core::storage::idea_storage::{decode_store, encode_store};
use ideavault_core::{
    Domain, Idea, IdeaStorage, IdeaStore, IdeaVault, KeyValueIdeaStorage, KeyValueStore,
    MemoryKeyValueStore, SqliteKeyValueStore, VaultConfig,
};

fn sample_store() -> IdeaStore {
    let mut store = IdeaStore::new();
    store.append(Domain::Startup, Idea::new("A").unwrap());
    store.append(Domain::Startup, Idea::new("B").unwrap());
    store.append(Domain::Art, Idea::new("Interactive light sculpture").unwrap());
    store.append(
        Domain::TechFeaturesImprovement,
        Idea::new("unicode ✓ \"quoted\"").unwrap(),
    );
    store
}

#[test]
fn encode_then_decode_reproduces_equal_mapping() {
    let store = sample_store();
    let decoded = decode_store(&encode_store(&store).unwrap()).unwrap();
    assert_eq!(decoded, store);
    assert_eq!(
        decoded
            .ideas(Domain::Startup)
            .iter()
            .map(Idea::as_str)
            .collect::<Vec<_>>(),
        vec!["A", "B"]
    );
}

#[test]
fn loading_twice_from_same_value_yields_same_store() {
    let raw = r#"{"Research":["r1","r2"],"Product":[]}"#;
    let storage = KeyValueIdeaStorage::with_default_key(
        MemoryKeyValueStore::new().with_entry("ideaVaultIdeas", raw),
    );

    let first = storage.load().unwrap();
    let second = storage.load().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.count(Domain::Research), 2);
}

#[test]
fn ideas_survive_reopening_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = VaultConfig::new(dir.path().join("vault.sqlite3"), "ideaVaultIdeas").unwrap();

    {
        let mut vault = IdeaVault::open(config.open_storage().unwrap());
        vault.submit(Some(Domain::Research), "Soil microbiome survey").unwrap();
        vault.submit(Some(Domain::Research), "Tidal energy model").unwrap();
    }

    let reopened = IdeaVault::open(config.open_storage().unwrap());
    let texts: Vec<&str> = reopened
        .state()
        .store
        .ideas(Domain::Research)
        .iter()
        .map(Idea::as_str)
        .collect();
    assert_eq!(texts, vec!["Soil microbiome survey", "Tidal energy model"]);
    assert_eq!(reopened.state().viewing_domain, None);
    assert!(!reopened.state().confirmation.visible);
}

#[test]
fn storage_keys_are_isolated_within_one_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.sqlite3");

    let mut first = KeyValueIdeaStorage::new(SqliteKeyValueStore::open(&path).unwrap(), "alpha");
    first.save(&sample_store()).unwrap();

    let second = KeyValueIdeaStorage::new(SqliteKeyValueStore::open(&path).unwrap(), "beta");
    assert!(second.load().unwrap().is_empty());
    assert_eq!(first.load().unwrap(), sample_store());
}

#[test]
fn parseable_but_odd_values_are_accepted_as_is() {
    let mut backend = SqliteKeyValueStore::open_in_memory().unwrap();
    backend
        .set("ideaVaultIdeas", r#"{"Art":["  untrimmed  ", ""]}"#)
        .unwrap();
    let storage = KeyValueIdeaStorage::with_default_key(backend);

    let store = storage.load().unwrap();
    let texts: Vec<&str> = store.ideas(Domain::Art).iter().map(Idea::as_str).collect();
    assert_eq!(texts, vec!["  untrimmed  ", ""]);
}

#[test]
fn untyped_stored_entries_survive_the_next_submit() {
    let backend = MemoryKeyValueStore::new().with_entry(
        "ideaVaultIdeas",
        r#"{"Product":["keep me"],"Art":[1],"Music":["jazz"]}"#,
    );
    let mut vault = IdeaVault::open(KeyValueIdeaStorage::with_default_key(backend));
    assert_eq!(
        texts_of(&vault.state().store, Domain::Product),
        vec!["keep me"]
    );

    vault.submit(Some(Domain::Startup), "new").unwrap();

    let persisted: serde_json::Value = serde_json::from_str(
        vault.storage().backend().raw("ideaVaultIdeas").unwrap(),
    )
    .unwrap();
    assert_eq!(
        persisted,
        serde_json::json!({
            "Product": ["keep me"],
            "Art": [1],
            "Music": ["jazz"],
            "Startup": ["new"]
        })
    );
}

#[test]
fn stored_keys_with_padding_are_not_merged_into_domains() {
    let backend = MemoryKeyValueStore::new()
        .with_entry("ideaVaultIdeas", r#"{" Art ":["padded"],"Art":["exact"]}"#);
    let mut vault = IdeaVault::open(KeyValueIdeaStorage::with_default_key(backend));
    assert_eq!(texts_of(&vault.state().store, Domain::Art), vec!["exact"]);

    vault.submit(Some(Domain::Art), "second").unwrap();

    let persisted: serde_json::Value = serde_json::from_str(
        vault.storage().backend().raw("ideaVaultIdeas").unwrap(),
    )
    .unwrap();
    assert_eq!(
        persisted,
        serde_json::json!({ " Art ": ["padded"], "Art": ["exact", "second"] })
    );
}

fn texts_of(store: &IdeaStore, domain: Domain) -> Vec<String> {
    store
        .texts(domain)
        .into_iter()
        .map(|text| text.into_owned())
        .collect()
}
