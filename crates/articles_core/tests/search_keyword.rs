use articles_core::ArticleStore;

fn seeded_store() -> ArticleStore {
    let store = ArticleStore::open_in_memory().unwrap();
    store.create("Vis Inox", 0.2, 0.05).unwrap();
    store.create("Ecrou M6", 0.08, 0.02).unwrap();
    store.create("vis à bois", 0.05, 0.03).unwrap();
    store.create("Écrou frein", 0.4, 0.02).unwrap();
    store
}

fn designations(store: &ArticleStore, keyword: &str) -> Vec<String> {
    store
        .search(keyword)
        .unwrap()
        .into_iter()
        .map(|article| article.designation)
        .collect()
}

#[test]
fn search_is_case_insensitive_substring() {
    let store = seeded_store();

    assert_eq!(designations(&store, "VIS"), vec!["Vis Inox", "vis à bois"]);
    assert_eq!(designations(&store, "inox"), vec!["Vis Inox"]);
    assert_eq!(designations(&store, "m6"), vec!["Ecrou M6"]);
}

#[test]
fn search_folds_accented_letters() {
    let store = seeded_store();

    assert_eq!(designations(&store, "écrou"), vec!["Écrou frein"]);
    assert_eq!(designations(&store, "À BOIS"), vec!["vis à bois"]);
}

#[test]
fn empty_keyword_returns_every_article() {
    let store = seeded_store();

    assert_eq!(store.search("").unwrap(), store.list_all().unwrap());
}

#[test]
fn unmatched_keyword_returns_empty() {
    let store = seeded_store();

    assert!(store.search("cheville").unwrap().is_empty());
}

#[test]
fn like_wildcards_are_matched_literally() {
    let store = seeded_store();
    store.create("Joint 50%", 1.0, 0.1).unwrap();

    assert_eq!(designations(&store, "%"), vec!["Joint 50%"]);
    assert!(store.search("_").unwrap().is_empty());
}

#[test]
fn search_on_empty_store_returns_empty() {
    let store = ArticleStore::open_in_memory().unwrap();

    assert!(store.search("").unwrap().is_empty());
}
