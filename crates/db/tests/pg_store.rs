//! `PgStore` against a live PostgreSQL database.
//!
//! Run with `DATABASE_URL` set and `cargo test -- --ignored`.

use assert_matches::assert_matches;
use harva_db::models::hero::{HeroCard, HeroDraft, HeroSection};
use harva_db::models::page_cta::PageCta;
use harva_db::models::statistics::Statistic;
use harva_db::repositories::{HeroRepo, PageCtaRepo, SectionRepo, StatisticsRepo};
use harva_db::store::{ContentStore, Filter, PgStore, Select, StoreError};
use serde_json::json;
use sqlx::PgPool;

fn record(value: serde_json::Value) -> harva_db::store::Record {
    serde_json::from_value(value).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_select_roundtrip_generates_ids(pool: PgPool) {
    let store = PgStore::new(pool);
    let inserted = store
        .insert(
            "statistics",
            vec![
                record(json!({"number": "65", "description": "A", "display_order": 1})),
                record(json!({"number": "10", "description": "B", "display_order": 0})),
            ],
        )
        .await
        .unwrap();
    assert_eq!(inserted.len(), 2);
    assert!(inserted.iter().all(|r| r["id"].is_string()));

    let rows = store
        .select(&Select::from("statistics").order_by("display_order"))
        .await
        .unwrap();
    assert_eq!(rows[0]["number"], "10");
    assert_eq!(rows[1]["display_order"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_and_delete_by_filter(pool: PgPool) {
    let store = PgStore::new(pool);
    store
        .insert("statistics", vec![record(json!({"number": "1", "description": "x"}))])
        .await
        .unwrap();

    let updated = store
        .update(
            "statistics",
            &[Filter::eq("number", "1")],
            record(json!({"description": "y"})),
        )
        .await
        .unwrap();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0]["description"], "y");

    assert_matches!(
        store.delete("statistics", &[]).await,
        Err(StoreError::Unfiltered { .. })
    );
    let removed = store
        .delete("statistics", &[Filter::neq("id", uuid::Uuid::nil().to_string())])
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.count("statistics", &[]).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn upsert_on_page_name(pool: PgPool) {
    let store = PgStore::new(pool);
    let mut draft = PageCtaRepo::load(&store).await.unwrap();
    PageCtaRepo::save(&store, &mut draft).await.unwrap();

    draft.ctas = vec![PageCta {
        page_name: "contact".into(),
        title: "Changed".into(),
        ..PageCta::default()
    }];
    PageCtaRepo::save(&store, &mut draft).await.unwrap();

    assert_eq!(store.count("page_cta_sections", &[]).await.unwrap(), 3);
    let contact = store
        .select(&Select::from("page_cta_sections").filter(Filter::eq("page_name", "contact")))
        .await
        .unwrap();
    assert_eq!(contact[0]["title"], "Changed");
    assert!(contact[0]["button_url"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn hero_and_statistics_reconcile_on_postgres(pool: PgPool) {
    let store = PgStore::new(pool);

    let mut hero = HeroDraft {
        hero: HeroSection {
            title: "Welcome".into(),
            ..HeroSection::default()
        },
        cards: vec![HeroCard::new("heart-outline", "S", "T")].into(),
    };
    HeroRepo::save(&store, &mut hero).await.unwrap();
    let loaded = HeroRepo::load(&store).await.unwrap();
    assert_eq!(loaded.cards.len(), 1);
    assert_eq!(loaded.cards.get(0).unwrap().hero_id, hero.hero.id);
    assert_eq!(loaded.cards.get(0).unwrap().display_order, 0);

    let mut stats = StatisticsRepo::load(&store).await.unwrap();
    stats.statistics = vec![Statistic::new("65", "A"), Statistic::new("10", "B")].into();
    StatisticsRepo::save(&store, &mut stats).await.unwrap();
    let loaded = StatisticsRepo::load(&store).await.unwrap();
    let numbers: Vec<&str> = loaded.statistics.iter().map(|s| s.number.as_str()).collect();
    assert_eq!(numbers, vec!["65", "10"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn unknown_column_is_rejected_before_sql(pool: PgPool) {
    let store = PgStore::new(pool);
    assert_matches!(
        store
            .select(&Select::from("statistics").filter(Filter::eq("1 OR 1=1", 1)))
            .await,
        Err(StoreError::UnknownColumn { .. })
    );
}
