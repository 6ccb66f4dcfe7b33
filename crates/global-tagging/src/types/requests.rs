/*
[INPUT]:  Caller-supplied operation parameters
[OUTPUT]: Typed parameter objects consumed by the tag operations
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new parameters added
*/

use reqwest::header::HeaderMap;
use serde::Serialize;

use super::enums::{OrderByName, Provider, TagType};
use super::models::Resource;

/// Query parameters shared by every write operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountScope {
    /// IAM id of a user to act on behalf of
    pub impersonate_user: Option<String>,
    pub account_id: Option<String>,
    pub tag_type: Option<TagType>,
}

/// Parameters for `list_tags`. Nothing is required.
#[derive(Debug, Clone, Default)]
pub struct ListTagsOptions {
    pub scope: AccountScope,
    pub full_data: Option<bool>,
    pub providers: Vec<Provider>,
    /// CRN of a resource; only tags attached to it are listed
    pub attached_to: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    /// Server-side timeout in milliseconds
    pub timeout: Option<u64>,
    pub order_by_name: Option<OrderByName>,
    pub attached_only: Option<bool>,
    pub headers: HeaderMap,
}

/// Parameters for `create_tag`. `tag_names` is required.
#[derive(Debug, Clone, Default)]
pub struct CreateTagOptions {
    pub tag_names: Vec<String>,
    pub scope: AccountScope,
    pub headers: HeaderMap,
}

/// Parameters for `delete_tag_all`. Nothing is required.
#[derive(Debug, Clone, Default)]
pub struct DeleteTagAllOptions {
    pub provider: Option<Provider>,
    pub scope: AccountScope,
    pub headers: HeaderMap,
}

/// Parameters for `delete_tag`. `tag_name` is required.
#[derive(Debug, Clone, Default)]
pub struct DeleteTagOptions {
    pub tag_name: String,
    pub providers: Vec<Provider>,
    pub scope: AccountScope,
    pub headers: HeaderMap,
}

/// Parameters for `attach_tag` and `detach_tag`. `resources` is required.
#[derive(Debug, Clone, Default)]
pub struct TagResourcesOptions {
    pub resources: Vec<Resource>,
    pub tag_name: Option<String>,
    pub tag_names: Vec<String>,
    pub scope: AccountScope,
    pub headers: HeaderMap,
}

pub type AttachTagOptions = TagResourcesOptions;
pub type DetachTagOptions = TagResourcesOptions;

macro_rules! scope_setters {
    ($ty:ty) => {
        impl $ty {
            pub fn impersonate_user(mut self, user: impl Into<String>) -> Self {
                self.scope.impersonate_user = Some(user.into());
                self
            }

            pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
                self.scope.account_id = Some(account_id.into());
                self
            }

            pub fn tag_type(mut self, tag_type: TagType) -> Self {
                self.scope.tag_type = Some(tag_type);
                self
            }

            pub fn headers(mut self, headers: HeaderMap) -> Self {
                self.headers = headers;
                self
            }
        }
    };
}

scope_setters!(ListTagsOptions);
scope_setters!(CreateTagOptions);
scope_setters!(DeleteTagAllOptions);
scope_setters!(DeleteTagOptions);
scope_setters!(TagResourcesOptions);

impl ListTagsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_data(mut self, full_data: bool) -> Self {
        self.full_data = Some(full_data);
        self
    }

    pub fn providers(mut self, providers: impl IntoIterator<Item = Provider>) -> Self {
        self.providers = providers.into_iter().collect();
        self
    }

    pub fn attached_to(mut self, crn: impl Into<String>) -> Self {
        self.attached_to = Some(crn.into());
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    pub fn order_by_name(mut self, order: OrderByName) -> Self {
        self.order_by_name = Some(order);
        self
    }

    pub fn attached_only(mut self, attached_only: bool) -> Self {
        self.attached_only = Some(attached_only);
        self
    }
}

impl CreateTagOptions {
    pub fn new<I, S>(tag_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag_names: tag_names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl DeleteTagAllOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }
}

impl DeleteTagOptions {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    pub fn providers(mut self, providers: impl IntoIterator<Item = Provider>) -> Self {
        self.providers = providers.into_iter().collect();
        self
    }
}

impl TagResourcesOptions {
    pub fn new(resources: impl IntoIterator<Item = Resource>) -> Self {
        Self {
            resources: resources.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    pub fn tag_names<I, S>(mut self, tag_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_names = tag_names.into_iter().map(Into::into).collect();
        self
    }
}

/// JSON body of `create_tag`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CreateTagBody<'a> {
    pub tag_names: &'a [String],
}

/// JSON body of `attach_tag` and `detach_tag`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TagResourcesBody<'a> {
    pub resources: &'a [Resource],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    pub tag_names: &'a [String],
}

fn is_empty_slice(values: &&[String]) -> bool {
    values.is_empty()
}
