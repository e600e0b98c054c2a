use super::*;

/// Expected: the OpenAPI document lists both paths of every resource
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, router) = app().await;

    let (status, body) = send(&router, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    for path in ["drone-categories", "drones", "pilots", "competitions"] {
        let collection = &body["paths"][format!("/{}/", path)];
        assert!(collection["get"].is_object(), "GET /{}/ missing", path);
        assert!(collection["post"].is_object(), "POST /{}/ missing", path);

        let detail = &body["paths"][format!("/{}/{{id}}/", path)];
        for method in ["get", "put", "delete"] {
            assert!(detail[method].is_object(), "{} /{}/{{id}}/ missing", method, path);
        }
    }
}
