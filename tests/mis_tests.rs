use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use financeclinics_client::mis::{ExportFormat, MisColumn, MisTemplateUpdate};
use financeclinics_client::FinanceClinics;

fn template_body(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "columns": [
            {"key": "month", "label": "Month"},
            {"key": "revenue", "label": "Revenue"}
        ],
        "created_by": 1,
        "is_public": false,
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-01T00:00:00"
    })
}

#[tokio::test]
async fn test_template_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/mis/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "templates": [template_body(1, "Monthly Revenue")]
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let templates = client.mis().templates().await.unwrap();

    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].columns[0].key, "month");
}

#[tokio::test]
async fn test_create_template_sends_columns() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/mis/templates"))
        .and(body_json(json!({
            "name": "Monthly Revenue",
            "columns": [
                {"key": "month", "label": "Month"},
                {"key": "revenue", "label": "Revenue"}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "template": template_body(1, "Monthly Revenue")
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let columns = vec![
        MisColumn {
            key: "month".to_string(),
            label: "Month".to_string(),
        },
        MisColumn {
            key: "revenue".to_string(),
            label: "Revenue".to_string(),
        },
    ];

    let template = client
        .mis()
        .create_template("Monthly Revenue", &columns)
        .await
        .unwrap();

    assert_eq!(template.id, 1);
    assert_eq!(template.columns.len(), 2);
}

#[tokio::test]
async fn test_update_template_renames_without_touching_columns() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/mis/templates/1"))
        .and(body_json(json!({"name": "Quarterly Revenue"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "template": template_body(1, "Quarterly Revenue")
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let update = MisTemplateUpdate {
        name: Some("Quarterly Revenue".to_string()),
        ..Default::default()
    };

    let template = client.mis().update_template(1, &update).await.unwrap();
    assert_eq!(template.name, "Quarterly Revenue");
}

#[tokio::test]
async fn test_rows_are_opaque_objects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/mis/templates/1/rows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [
                {
                    "id": 11,
                    "template_id": 1,
                    "data": {"month": "2025-06", "revenue": "120000"},
                    "created_at": "2025-07-01T00:00:00"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let rows = client.mis().rows(1).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].data["month"], "2025-06");
}

#[tokio::test]
async fn test_import_uploads_multipart_and_counts_rows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/mis/templates/1/import"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"imported": 37})))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let csv = b"month,revenue\n2025-06,120000\n".to_vec();

    let imported = client
        .mis()
        .import(1, "revenue.csv", csv, Some(ExportFormat::Csv))
        .await
        .unwrap();

    assert_eq!(imported, 37);
}

#[tokio::test]
async fn test_export_returns_binary_payload_untouched() {
    let mock_server = MockServer::start().await;

    let payload: Vec<u8> = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0x01];
    Mock::given(method("GET"))
        .and(path("/admin/mis/templates/1/export"))
        .and(query_param("format", "xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    let bytes = client.mis().export(1, ExportFormat::Xlsx).await.unwrap();

    assert_eq!(bytes, payload);
}

#[tokio::test]
async fn test_delete_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/mis/templates/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Template and data deleted"})),
        )
        .mount(&mock_server)
        .await;

    let client = FinanceClinics::new(&mock_server.uri());
    assert!(client.mis().delete_template(1).await.is_ok());
}
