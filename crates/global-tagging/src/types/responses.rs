/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use super::models::{
    CreateTagResultsItem, DeleteTagResultsItem, DeleteTagsResultItem, Tag, TagResultsItem,
};

/// A successful response: decoded body plus transport metadata
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn into_result(self) -> T {
        self.result
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub items: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTagResults {
    #[serde(default)]
    pub results: Vec<CreateTagResultsItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTagsResult {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub errors: Option<bool>,
    #[serde(default)]
    pub items: Vec<DeleteTagsResultItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTagResults {
    #[serde(default)]
    pub results: Vec<DeleteTagResultsItem>,
}

/// Outcome of an attach or detach call, one entry per resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResults {
    #[serde(default)]
    pub results: Vec<TagResultsItem>,
}

impl TagResults {
    /// Resources the server reported as failed
    pub fn failed(&self) -> impl Iterator<Item = &TagResultsItem> {
        self.results
            .iter()
            .filter(|item| item.is_error.unwrap_or(false))
    }
}
