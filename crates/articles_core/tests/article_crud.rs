use articles_core::db::open_db_in_memory;
use articles_core::{
    ArticleDraft, ArticleField, ArticleRepository, ArticleService, ArticleValidationError,
    RepoError, SqliteArticleRepository,
};

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let draft = ArticleDraft::new("Vis M6")
        .with_purchase_price(0.12)
        .with_install_time(0.05);
    let id = repo.create_article(&draft).unwrap();

    let loaded = repo.get_article(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.designation, "Vis M6");
    assert_eq!(loaded.purchase_price, 0.12);
    assert_eq!(loaded.install_time, 0.05);
}

#[test]
fn get_unknown_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    assert!(repo.get_article(42).unwrap().is_none());
}

#[test]
fn ids_start_at_one_and_increase() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let first = repo.create_article(&ArticleDraft::new("Vis M6")).unwrap();
    let second = repo.create_article(&ArticleDraft::new("Ecrou M6")).unwrap();
    let third = repo.create_article(&ArticleDraft::new("Rondelle M6")).unwrap();

    assert_eq!(first, 1);
    assert!(second > first);
    assert!(third > second);
}

#[test]
fn update_existing_article_leaves_others_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let target = repo.create_article(&ArticleDraft::new("Vis M6")).unwrap();
    let other = repo
        .create_article(&ArticleDraft::new("Ecrou M6").with_purchase_price(0.08))
        .unwrap();
    let other_before = repo.get_article(other).unwrap().unwrap();

    let revised = ArticleDraft::new("Vis M6 Inox")
        .with_purchase_price(0.15)
        .with_install_time(0.05);
    repo.update_article(target, &revised).unwrap();

    let loaded = repo.get_article(target).unwrap().unwrap();
    assert_eq!(loaded.id, target);
    assert_eq!(loaded.to_draft(), revised);
    assert_eq!(repo.get_article(other).unwrap().unwrap(), other_before);
}

#[test]
fn update_not_found_returns_not_found_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);
    repo.create_article(&ArticleDraft::new("Vis M6")).unwrap();
    let before = repo.list_articles().unwrap();

    let err = repo
        .update_article(99, &ArticleDraft::new("Fantome"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(99)));
    assert_eq!(repo.list_articles().unwrap(), before);
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let create_err = repo.create_article(&ArticleDraft::new("")).unwrap_err();
    assert!(matches!(
        create_err,
        RepoError::Validation(ArticleValidationError::EmptyDesignation)
    ));
    assert_eq!(repo.count_articles().unwrap(), 0);

    let id = repo.create_article(&ArticleDraft::new("Vis M6")).unwrap();
    let update_err = repo
        .update_article(id, &ArticleDraft::new("Vis M6").with_purchase_price(-1.0))
        .unwrap_err();
    assert!(matches!(
        update_err,
        RepoError::Validation(ArticleValidationError::NegativeValue {
            field: ArticleField::PurchasePrice,
            ..
        })
    ));
    assert_eq!(repo.get_article(id).unwrap().unwrap().purchase_price, 0.0);
}

#[test]
fn list_returns_ascending_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteArticleRepository::new(&conn);
    assert!(repo.list_articles().unwrap().is_empty());

    for designation in ["Vis M6", "Ecrou M6", "Rondelle M6"] {
        repo.create_article(&ArticleDraft::new(designation)).unwrap();
    }

    let ids: Vec<i64> = repo
        .list_articles()
        .unwrap()
        .iter()
        .map(|article| article.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(repo.count_articles().unwrap(), 3);
}

#[test]
fn invalid_persisted_row_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO articles (designation, purchase_price, install_time) VALUES ('', 1.0, 1.0);",
        [],
    )
    .unwrap();
    let repo = SqliteArticleRepository::new(&conn);

    let err = repo.list_articles().unwrap_err();
    assert!(matches!(&err, RepoError::InvalidData(message) if message.contains("article 1")));
    assert!(matches!(
        repo.search_articles("").unwrap_err(),
        RepoError::InvalidData(_)
    ));
    assert!(matches!(repo.get_article(1).unwrap_err(), RepoError::InvalidData(_)));
}

#[test]
fn service_delegates_to_repository() {
    let conn = open_db_in_memory().unwrap();
    let service = ArticleService::new(SqliteArticleRepository::new(&conn));

    let id = service.create(&ArticleDraft::new("Cheville")).unwrap();
    let article = service.get(id).unwrap().unwrap();
    assert_eq!(article.purchase_price, 0.0);
    assert_eq!(article.install_time, 0.0);

    service
        .update(id, &ArticleDraft::new("Cheville 8mm").with_install_time(0.1))
        .unwrap();
    assert_eq!(service.search("8MM").unwrap().len(), 1);
    assert_eq!(service.list_all().unwrap().len(), 1);
    assert_eq!(service.count().unwrap(), 1);
}
