use super::*;

#[test]
fn normalize_base_url_trims_trailing_slashes_and_space() {
    assert_eq!(normalize_base_url(" http://localhost:3000/products/ "), "http://localhost:3000/products");
    assert_eq!(normalize_base_url("/products//"), "/products");
}

#[test]
fn item_endpoint_appends_id() {
    assert_eq!(item_endpoint("http://localhost:3000/products", 42), "http://localhost:3000/products/42");
}

#[test]
fn http_api_defaults_to_local_catalog() {
    assert_eq!(HttpCatalogApi::default().base_url(), DEFAULT_API_URL);
}

#[test]
fn http_api_item_url_uses_normalized_base() {
    let api = HttpCatalogApi::new("https://shop.test/api/products/");
    assert_eq!(api.base_url(), "https://shop.test/api/products");
    assert_eq!(api.item_url(5), "https://shop.test/api/products/5");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_falls_back_without_browser() {
    assert_eq!(HttpCatalogApi::from_document(), HttpCatalogApi::default());
}

#[test]
fn status_error_accepts_2xx_only() {
    assert_eq!(status_error(200), Ok(()));
    assert_eq!(status_error(201), Ok(()));
    assert_eq!(status_error(204), Ok(()));
    assert_eq!(status_error(404), Err(ApiError::Status { status: 404 }));
    assert_eq!(status_error(500), Err(ApiError::Status { status: 500 }));
    assert_eq!(status_error(302), Err(ApiError::Status { status: 302 }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpCatalogApi::default();
    let result = futures::executor::block_on(api.list_products());
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status { status: 503 }.to_string(), "server responded with status 503");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network request failed: offline");
}
