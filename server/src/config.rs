use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "data.json";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

/// URL path the client fetches the dataset from (relative to the page).
pub const DATA_ROUTE: &str = "/data.json";

pub fn port() -> u16 {
    std::env::var("PINMAP_PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_PORT)
}

pub fn data_path() -> PathBuf {
    non_empty_env("PINMAP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

pub fn static_dir() -> PathBuf {
    non_empty_env("PINMAP_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
