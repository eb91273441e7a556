use pinmap_shared::{Dataset, LoadError};

/// Fetch and decode the dataset. No retry and no timeout.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Status {
            status: resp.status(),
        });
    }

    let payload = resp
        .text()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;
    Dataset::from_json(&payload)
}
