// Paginated sequence tests: lazy fetching, page ceilings and failure modes

use mockito::Matcher;
use pw_client::prelude::*;
use serde_json::json;

fn authenticated_builder(server: &mockito::ServerGuard) -> ClientBuilder {
    let credentials = Arc::new(Credentials::new("user@example.com", "secret"));
    credentials.set_token("valid");
    ClientBuilder::new(credentials)
        .with_core_base_url(server.url())
        .with_fabric_base_url(server.url())
}

fn page_body(page: u64, last_page: u64, total: u64, items: Vec<serde_json::Value>) -> String {
    json!({
        "data": items,
        "meta": {"current_page": page, "last_page": last_page, "total": total},
    })
    .to_string()
}

async fn mock_page(
    server: &mut mockito::ServerGuard,
    path: &str,
    page: u64,
    body: String,
) -> mockito::Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("per_page".into(), "250".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_yields_all_pages_in_order() {
    let mut server = mockito::Server::new_async().await;

    let mut mocks = Vec::new();
    for page in 1..=5u64 {
        let items = vec![json!({"id": page * 2 - 1}), json!({"id": page * 2})];
        let body = page_body(page, 5, 10, items);
        mocks.push(mock_page(&mut server, "/records", page, body).await);
    }

    let builder = authenticated_builder(&server)
        .with_options(RequestOptions::default().with_max_pages(None));
    let core = builder.core_client().unwrap();

    let mut sequence = core.api().items("records", Vec::new());
    let items = sequence.collect_all().await.unwrap();

    let ids: Vec<u64> = items.iter().map(|v| v["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    assert_eq!(sequence.total(), Some(10));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_page_ceiling_stops_iteration() {
    let mut server = mockito::Server::new_async().await;

    // Server has 5 pages; the ceiling stops after page 2 and pages 3-5 are
    // never requested (an unmatched request would fail collection).
    let first = mock_page(
        &mut server,
        "/records",
        1,
        page_body(1, 5, 10, vec![json!({"id": 1}), json!({"id": 2})]),
    )
    .await;
    let second = mock_page(
        &mut server,
        "/records",
        2,
        page_body(2, 5, 10, vec![json!({"id": 3}), json!({"id": 4})]),
    )
    .await;

    let builder = authenticated_builder(&server)
        .with_options(RequestOptions::default().with_max_pages(Some(2)));
    let core = builder.core_client().unwrap();

    let mut sequence = core.api().items("records", Vec::new());
    let items = sequence.collect_all().await.unwrap();

    assert_eq!(items.len(), 4);
    assert_eq!(sequence.current_page(), 2);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_exhausted_sequence_does_not_refetch() {
    let mut server = mockito::Server::new_async().await;

    let only_page = mock_page(
        &mut server,
        "/records",
        1,
        page_body(1, 1, 2, vec![json!({"id": 1}), json!({"id": 2})]),
    )
    .await;

    let core = authenticated_builder(&server).core_client().unwrap();
    let mut sequence = core.api().items("records", Vec::new());

    let items = sequence.collect_all().await.unwrap();
    assert_eq!(items.len(), 2);

    // Re-iterating after exhaustion yields nothing and issues no requests
    assert!(sequence.next().await.is_none());
    assert!(sequence.next().await.is_none());
    only_page.assert_async().await;
}

#[tokio::test]
async fn test_missing_last_page_means_single_page() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/records")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": [{"id": 1}], "meta": {"current_page": 1}}).to_string())
        .create_async()
        .await;

    let core = authenticated_builder(&server).core_client().unwrap();
    let mut sequence = core.api().items("records", Vec::new());

    let items = sequence.collect_all().await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_missing_meta_means_single_page() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/records")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": [{"id": 1}, {"id": 2}]}).to_string())
        .create_async()
        .await;

    let core = authenticated_builder(&server).core_client().unwrap();
    let mut sequence = core.api().items("records", Vec::new());

    let items = sequence.collect_all().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(sequence.total(), None);
}

#[tokio::test]
async fn test_error_surfaces_at_the_failing_page() {
    let mut server = mockito::Server::new_async().await;

    mock_page(
        &mut server,
        "/records",
        1,
        page_body(1, 3, 6, vec![json!({"id": 1}), json!({"id": 2})]),
    )
    .await;
    server
        .mock("GET", "/records")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(500)
        .create_async()
        .await;

    let core = authenticated_builder(&server).core_client().unwrap();
    let mut sequence = core.api().items("records", Vec::new());

    // First page items arrive intact
    assert_eq!(sequence.next().await.unwrap().unwrap()["id"], json!(1));
    assert_eq!(sequence.next().await.unwrap().unwrap()["id"], json!(2));

    // The failing fetch surfaces at this iteration step
    match sequence.next().await {
        Some(Err(AppError::UnexpectedStatus { got, .. })) => {
            assert_eq!(got, StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }

    // And the sequence is over
    assert!(sequence.next().await.is_none());
}

#[tokio::test]
async fn test_caller_filters_override_page_size() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/records")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("per_page".into(), "2".into()),
            Matcher::UrlEncoded("sort".into(), "-started_at".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(1, 1, 2, vec![json!({"id": 1}), json!({"id": 2})]))
        .create_async()
        .await;

    let core = authenticated_builder(&server).core_client().unwrap();
    let mut sequence = core.api().items(
        "records",
        vec![
            ("per_page".to_string(), "2".to_string()),
            ("sort".to_string(), "-started_at".to_string()),
        ],
    );

    let items = sequence.collect_all().await.unwrap();
    assert_eq!(items.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_reauthenticates_during_page_fetch() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/records")
        .match_header("authorization", "Bearer valid")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(401)
        .create_async()
        .await;
    server
        .mock("POST", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token": "fresh"}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/records")
        .match_header("authorization", "Bearer fresh")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(1, 1, 1, vec![json!({"id": 1})]))
        .create_async()
        .await;

    let builder = authenticated_builder(&server);
    let core = builder.core_client().unwrap();

    let mut sequence = core.api().items("records", Vec::new());
    let items = sequence.collect_all().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(builder.credentials().token(), "fresh");
}
