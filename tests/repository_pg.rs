//! PostgreSQL repository tests. Run with a database:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test repository_pg -- --ignored
//! ```

use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::entities::NewVisit;
use tinylink::domain::repositories::{StoreError, UrlRepository, VisitRepository};
use tinylink::infrastructure::persistence::{PgUrlRepository, PgVisitRepository};

fn repos(pool: PgPool) -> (PgUrlRepository, PgVisitRepository) {
    let pool = Arc::new(pool);
    (
        PgUrlRepository::new(pool.clone()),
        PgVisitRepository::new(pool),
    )
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_insert_and_get_url(pool: PgPool) {
    let (urls, _) = repos(pool);

    let id = urls.insert_url("https://example.com").await.unwrap();
    let url = urls.get_url_by_id(id).await.unwrap().unwrap();

    assert_eq!(url.id, id);
    assert_eq!(url.original_url, "https://example.com");
    assert_eq!(url.total_visitors, 0);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_visits_maintain_url_counter(pool: PgPool) {
    let (urls, visits) = repos(pool);
    let id = urls.insert_url("https://example.com").await.unwrap();
    let other = urls.insert_url("https://other.example").await.unwrap();

    for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.1"] {
        visits
            .insert_visit(NewVisit::new(id, ip, Utc::now()))
            .await
            .unwrap();
    }

    assert_eq!(urls.get_url_by_id(id).await.unwrap().unwrap().total_visitors, 3);
    assert_eq!(urls.get_url_by_id(other).await.unwrap().unwrap().total_visitors, 0);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_get_unknown_url(pool: PgPool) {
    let (urls, _) = repos(pool);

    assert!(urls.get_url_by_id(424242).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_insert_duplicate_url(pool: PgPool) {
    let (urls, _) = repos(pool);
    urls.insert_url("https://example.com").await.unwrap();

    let result = urls.insert_url("https://example.com").await;

    assert!(matches!(result, Err(StoreError::DuplicateUrl)));
    assert_eq!(urls.count_urls().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_list_urls_with_visitor_counts(pool: PgPool) {
    let (urls, visits) = repos(pool);
    let mut ids = Vec::new();
    for i in 1..=4 {
        ids.push(urls.insert_url(&format!("https://{i}.example")).await.unwrap());
    }
    for ip in ["10.0.0.1", "10.0.0.2"] {
        visits
            .insert_visit(NewVisit::new(ids[2], ip, Utc::now()))
            .await
            .unwrap();
    }

    let page = urls.list_urls(2, 2).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, ids[2]);
    assert_eq!(page[0].total_visitors, 2);
    assert_eq!(page[1].id, ids[3]);
    assert_eq!(page[1].total_visitors, 0);
    assert_eq!(urls.count_urls().await.unwrap(), 4);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_list_visits_in_insertion_order(pool: PgPool) {
    let (urls, visits) = repos(pool);
    let id = urls.insert_url("https://example.com").await.unwrap();
    for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
        visits
            .insert_visit(NewVisit::new(id, ip, Utc::now()))
            .await
            .unwrap();
    }

    let page = visits.list_visits(id, 1, 5).await.unwrap();
    let ips: Vec<&str> = page.iter().map(|v| v.ip.as_str()).collect();

    assert_eq!(ips, vec!["10.0.0.2", "10.0.0.3"]);
    assert_eq!(visits.count_visits().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_visit_for_unknown_url_fails(pool: PgPool) {
    let (_, visits) = repos(pool);

    let result = visits
        .insert_visit(NewVisit::new(999, "10.0.0.1", Utc::now()))
        .await;

    assert!(matches!(result, Err(StoreError::Backend(_))));
}
