//
//  cloudfoundry-client
//  tests/applications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use mockito::Matcher;

use cloudfoundry_client::api::v3::applications::{Applications, ListApplicationPackagesRequest};
use cloudfoundry_client::api::v3::Linked;

use common::*;

const APP: &str = "guid-a7c9f4a8-e364-4e2d-a5a4-9a24b1b7e9d1";

#[tokio::test]
async fn test_list_packages() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v3/apps/{}/packages", APP).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "50".into()),
        ]))
        .match_header("authorization", auth_header().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture("v3/apps/GET_packages_response.json"))
        .expect(1)
        .create_async()
        .await;

    let page = client(&server)
        .applications()
        .list_packages(&ListApplicationPackagesRequest {
            application_id: Some(APP.to_string()),
            page: Some(1),
            per_page: Some(50),
        })
        .await
        .unwrap();

    assert_eq!(page.pagination.total_results, Some(1));
    assert!(!page.has_next());
    assert_eq!(page.resources.len(), 1);

    let package = &page.resources[0];
    assert_eq!(package.state.as_deref(), Some("READY"));
    assert_eq!(
        package.hash.as_ref().and_then(|h| h.value.as_deref()),
        Some("f8ed3e1a1c2a52b2b8c1ee5d8c01c6f1d3d8b4a9")
    );
    assert_eq!(
        package.link("download").and_then(|l| l.method.as_deref()),
        Some("GET")
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_packages_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v3/apps/{}/packages", APP).as_str())
        .with_status(400)
        .with_body(error_body())
        .expect(1)
        .create_async()
        .await;

    let error = client(&server)
        .applications()
        .list_packages(&ListApplicationPackagesRequest {
            application_id: Some(APP.to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_platform_error(error);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_packages_invalid_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = client(&server)
        .applications()
        .list_packages(&ListApplicationPackagesRequest {
            application_id: None,
            page: Some(0),
            per_page: Some(5001),
        })
        .await
        .unwrap_err();

    assert_invalid_request(error, &["application_id", "page", "per_page"]);
    mock.assert_async().await;
}
