use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use financeclinics_client::admin::{NewUser, UserUpdate};
use financeclinics_client::FinanceClinics;

fn user_body(id: i64, email: &str, active: bool) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "name": "Admin",
        "role": "admin",
        "is_active": active,
        "last_login": null,
        "created_at": "2025-01-01T00:00:00"
    })
}

#[tokio::test]
async fn test_dashboard_aggregate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": {
                "total_leads": 40,
                "total_pages": 6,
                "total_services": 5,
                "total_posts": 12,
                "recent_leads": 4,
                "new_leads": 3,
                "total_views": 900
            },
            "leads_by_status": {"new": 3, "contacted": 10, "closed": 27},
            "monthly_leads": [
                {"month": "2025-06", "count": 11},
                {"month": "2025-07", "count": 9}
            ],
            "recent_activity": [
                {"type": "lead", "message": "New inquiry from Pat Doe", "time": "2025-07-30T10:00:00", "id": 40},
                {"type": "post", "message": "Blog post: Mid-year outlook", "time": "2025-07-29T09:00:00", "id": 12}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let dashboard = client.admin().dashboard().await.unwrap();

    assert_eq!(dashboard.stats.total_leads, 40);
    assert_eq!(dashboard.leads_by_status.get("new"), Some(&3));
    assert_eq!(dashboard.monthly_leads[1].month, "2025-07");
    assert_eq!(dashboard.recent_activity[0].kind, "lead");
}

#[tokio::test]
async fn test_user_listing_and_creation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [user_body(1, "a@b.com", true), user_body(2, "c@d.com", false)]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/users"))
        .and(body_json(json!({
            "email": "new@b.com",
            "password": "longenough",
            "name": "New Admin"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "User created",
            "user": user_body(3, "new@b.com", true)
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());

    let users = client.admin().users().await.unwrap();
    assert_eq!(users.len(), 2);

    let created = client
        .admin()
        .create_user(&NewUser {
            email: "new@b.com".to_string(),
            password: "longenough".to_string(),
            name: "New Admin".to_string(),
            role: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn test_user_update_sends_only_present_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/users/2"))
        .and(body_json(json!({"is_active": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User updated",
            "user": user_body(2, "c@d.com", false)
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let updated = client
        .admin()
        .update_user(
            2,
            &UserUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!updated.is_active);
}

#[tokio::test]
async fn test_approve_and_delete_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/users/2/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User approved",
            "user": user_body(2, "c@d.com", true)
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/admin/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "User deleted"})))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());

    let approved = client.admin().approve_user(2).await.unwrap();
    assert!(approved.is_active);

    assert!(client.admin().delete_user(2).await.is_ok());
}
