use serde::Deserialize;

/// Common pagination query parameters (`?page=0&perPage=10`).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}
