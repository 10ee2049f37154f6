use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub categories: Vec<String>,
    pub sizes: Vec<String>,
    pub tags: Vec<String>,
}
