//! Document Fetcher — retrieves the raw PDF bytes behind a caller-supplied URL.

use bytes::Bytes;

use crate::errors::AppError;

/// Fetches the document at `url` and returns its raw bytes.
///
/// No scheme or host validation is performed; any transport failure or
/// non-2xx status surfaces as `AppError::Fetch`. The shared client's timeout
/// bounds the whole call, and dropping the future (client disconnect) cancels
/// the in-flight request.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<Bytes, AppError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Fetch(format!(
            "upstream returned {status} for {url}"
        )));
    }

    response
        .bytes()
        .await
        .map_err(|e| AppError::Fetch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    /// Serves `router` on an ephemeral port and returns its base address.
    async fn spawn_upstream(router: Router) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_fetch_error() {
        let router = Router::new().route("/missing.pdf", get(|| async { StatusCode::NOT_FOUND }));
        let addr = spawn_upstream(router).await;

        let client = reqwest::Client::new();
        let url = format!("http://{addr}/missing.pdf");
        match fetch_document(&client, &url).await.unwrap_err() {
            AppError::Fetch(msg) => assert!(msg.contains("404")),
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_returns_raw_bytes() {
        let router = Router::new().route("/doc.pdf", get(|| async { "%PDF-FAKE" }));
        let addr = spawn_upstream(router).await;

        let client = reqwest::Client::new();
        let url = format!("http://{addr}/doc.pdf");
        let bytes = fetch_document(&client, &url).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-FAKE");
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_fetch_error() {
        let client = reqwest::Client::new();
        let err = fetch_document(&client, "http://resume.invalid/cv.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
    }
}
