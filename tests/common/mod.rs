#![allow(dead_code)]

use short_url_client::api::HttpShortUrlClient;

/// Builds a client pointed at a mockito server.
pub fn client_for(server: &mockito::ServerGuard) -> HttpShortUrlClient {
    HttpShortUrlClient::new(server.url())
}

pub fn success_create_body(original: &str, shortened: &str) -> String {
    serde_json::json!({
        "code": "success",
        "data": {
            "originalUrl": original,
            "shortenedUrl": shortened,
        }
    })
    .to_string()
}

pub fn success_stats_body(original: &str, shortened: &str, is_custom: bool, visits: u64) -> String {
    serde_json::json!({
        "code": "success",
        "data": {
            "createdAt": "2024-05-01T12:00:00.000Z",
            "isCustom": is_custom,
            "originalUrl": original,
            "shortenedUrl": shortened,
            "visitCount": visits,
        }
    })
    .to_string()
}

pub fn fail_body(code: &str) -> String {
    serde_json::json!({
        "code": "fail",
        "error": { "message": code }
    })
    .to_string()
}
