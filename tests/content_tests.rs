use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use financeclinics_client::pages::PageInput;
use financeclinics_client::FinanceClinics;

fn page_body(id: i64, slug: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "About Us",
        "slug": slug,
        "meta_title": null,
        "meta_description": null,
        "meta_keywords": null,
        "featured_image": null,
        "is_published": true,
        "sort_order": 0,
        "template": "default",
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-01T00:00:00"
    })
}

fn post_body(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Post {}", id),
        "slug": format!("post-{}", id),
        "excerpt": "teaser",
        "featured_image": null,
        "category": "insights",
        "tags": ["finance"],
        "meta_title": null,
        "meta_description": null,
        "is_published": true,
        "published_at": "2025-01-01T00:00:00",
        "views": 3,
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-01T00:00:00",
        "author": "Admin"
    })
}

#[tokio::test]
async fn test_pages_list_and_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pages": [page_body(1, "about"), page_body(2, "privacy")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": page_body(1, "about")
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());

    let pages = client.pages().all().await.unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].slug, "about");
    assert_eq!(pages[0].content, None);

    let page = client.pages().by_slug("about").await.unwrap();
    assert_eq!(page.id, 1);
}

#[tokio::test]
async fn test_page_create_narrows_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pages/admin"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Page created",
            "page": page_body(7, "new-page")
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let input = PageInput {
        title: Some("New Page".to_string()),
        content: Some("<p>body</p>".to_string()),
        ..Default::default()
    };

    let page = client.pages().create(&input).await.unwrap();
    assert_eq!(page.id, 7);
    assert_eq!(page.slug, "new-page");
}

#[tokio::test]
async fn test_featured_services() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "services": [{
                "id": 1,
                "title": "Revenue Cycle Advisory",
                "slug": "revenue-cycle",
                "short_description": "short",
                "icon": "chart",
                "featured_image": null,
                "features": ["audits", "forecasting"],
                "meta_title": null,
                "meta_description": null,
                "is_featured": true,
                "is_published": true,
                "sort_order": 0,
                "display_order": 1,
                "created_at": "2025-01-01T00:00:00",
                "updated_at": "2025-01-01T00:00:00"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let services = client.services().featured().await.unwrap();

    assert_eq!(services.len(), 1);
    assert!(services[0].is_featured);
    assert_eq!(services[0].features, vec!["audits", "forecasting"]);
}

#[tokio::test]
async fn test_blog_list_carries_pagination_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_body(1), post_body(2)],
            "total": 2,
            "pages": 1,
            "current_page": 1,
            "per_page": 10,
            "has_next": false,
            "has_prev": false
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let page = client.blog().list(1, 10, None).await.unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.posts.len(), 2);
    assert!(!page.has_next);
}

#[tokio::test]
async fn test_blog_categories_and_recent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": ["insights", "news"]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog/recent"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_body(5), post_body(4), post_body(3)]
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());

    let categories = client.blog().categories().await.unwrap();
    assert_eq!(categories, vec!["insights", "news"]);

    let recent = client.blog().recent(3).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].id, 5);
}

#[tokio::test]
async fn test_blog_feed_appends_until_short_page() {
    let mock_server = MockServer::start().await;

    let first_page: Vec<serde_json::Value> = (1..=10).map(post_body).collect();
    let second_page: Vec<serde_json::Value> = (11..=14).map(post_body).collect();

    Mock::given(method("GET"))
        .and(path("/blog"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": first_page,
            "total": 14,
            "pages": 2,
            "current_page": 1,
            "per_page": 10,
            "has_next": true,
            "has_prev": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": second_page,
            "total": 14,
            "pages": 2,
            "current_page": 2,
            "per_page": 10,
            "has_next": false,
            "has_prev": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let mut feed = client.blog().feed(10, None);

    // Full page: more may follow.
    assert_eq!(feed.load_more().await.unwrap(), 10);
    assert!(feed.has_more());

    // Short page: the feed is exhausted.
    assert_eq!(feed.load_more().await.unwrap(), 4);
    assert!(!feed.has_more());
    assert_eq!(feed.posts().len(), 14);

    // Disjoint pages accumulate without duplication.
    let mut ids: Vec<i64> = feed.posts().iter().map(|post| post.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 14);

    // Exhausted feeds do not go back to the server.
    assert_eq!(feed.load_more().await.unwrap(), 0);
}

#[tokio::test]
async fn test_admin_blog_list_tolerates_sparse_envelope() {
    let mock_server = MockServer::start().await;

    // The admin listing omits per_page and the has-next/has-prev flags.
    Mock::given(method("GET"))
        .and(path("/blog/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_body(1)],
            "total": 1,
            "pages": 1,
            "current_page": 1
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let page = client.blog().admin_list(1, 20).await.unwrap();

    assert_eq!(page.posts.len(), 1);
    assert!(!page.has_next);
    assert_eq!(page.per_page, 0);
}
