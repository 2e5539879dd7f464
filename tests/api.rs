use estatelist::api::{ApiClient, ApiError, COMPANIES_PATH, LEADS_PATH, PARTNERS_PATH};

#[test]
fn test_endpoint_paths() {
    assert_eq!(LEADS_PATH, "leads");
    assert_eq!(COMPANIES_PATH, "companies");
    assert_eq!(PARTNERS_PATH, "channelPartners");
}

#[test]
fn test_trailing_slash_is_stripped_from_the_base_url() {
    let client = ApiClient::new("http://localhost:5000/api/", 30).unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000/api");

    let client = ApiClient::new("http://localhost:5000/api", 30).unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

#[test]
fn test_status_error_names_path_and_code() {
    let error = ApiError::Status {
        status: 404,
        path: LEADS_PATH.to_string(),
        body: "Not Found".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("/leads"));
    assert!(message.contains("Not Found"));
}

#[test]
fn test_decode_error_names_the_path() {
    let source = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
    let error = ApiError::Decode {
        path: COMPANIES_PATH.to_string(),
        source,
    };
    assert!(error.to_string().contains("/companies"));
}
