/*
[INPUT]:  Operation parameter objects
[OUTPUT]: Validated requests and typed tag API results
[POS]:    HTTP layer - tag endpoints (list, create, delete, attach, detach)
[UPDATE]: When adding new tag endpoints or changing parameter mapping
*/

use reqwest::{Method, Request};

use crate::http::{GlobalTaggingClient, GlobalTaggingError, Result};
use crate::types::{
    AccountScope, CreateTagBody, CreateTagOptions, CreateTagResults, DeleteTagAllOptions,
    DeleteTagOptions, DeleteTagResults, DeleteTagsResult, DetailedResponse, ListTagsOptions,
    Provider, TagList, TagResources, TagResourcesBody, TagResourcesOptions, TagResults,
};

const TAGS: &[&str] = &["v3", "tags"];
const TAGS_ATTACH: &[&str] = &["v3", "tags", "attach"];
const TAGS_DETACH: &[&str] = &["v3", "tags", "detach"];

/// Query string under construction; unset values are skipped
#[derive(Debug, Default)]
struct Query(Vec<(&'static str, String)>);

impl Query {
    fn opt<T: ToString>(&mut self, name: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.0.push((name, value.to_string()));
        }
        self
    }

    fn providers(&mut self, providers: &[Provider]) -> &mut Self {
        if !providers.is_empty() {
            let joined = providers
                .iter()
                .map(Provider::as_str)
                .collect::<Vec<_>>()
                .join(",");
            self.0.push(("providers", joined));
        }
        self
    }

    fn scope(&mut self, scope: &AccountScope) -> &mut Self {
        self.opt("impersonate_user", scope.impersonate_user.as_deref())
            .opt("account_id", scope.account_id.as_deref())
            .opt("tag_type", scope.tag_type.map(|t| t.as_str()))
    }
}

/// Fail with the names of every required parameter that is absent
fn require(checks: &[(&'static str, bool)]) -> Result<()> {
    let missing: Vec<&'static str> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GlobalTaggingError::MissingParameters(missing))
    }
}

impl GlobalTaggingClient {
    /// Build the request for `list_tags`
    pub fn prepare_list_tags(&self, options: &ListTagsOptions) -> Result<Request> {
        let mut query = Query::default();
        query
            .scope(&options.scope)
            .opt("full_data", options.full_data)
            .providers(&options.providers)
            .opt("attached_to", options.attached_to.as_deref())
            .opt("offset", options.offset)
            .opt("limit", options.limit)
            .opt("timeout", options.timeout)
            .opt("order_by_name", options.order_by_name.map(|o| o.as_str()))
            .opt("attached_only", options.attached_only);

        self.prepare::<()>(Method::GET, TAGS, &query.0, None, &options.headers)
    }

    /// List tags in an account
    ///
    /// GET /v3/tags
    pub async fn list_tags(&self, options: &ListTagsOptions) -> Result<DetailedResponse<TagList>> {
        let request = self.prepare_list_tags(options)?;
        self.execute(request).await
    }

    /// Build the request for `create_tag`
    pub fn prepare_create_tag(&self, options: &CreateTagOptions) -> Result<Request> {
        require(&[("tag_names", !options.tag_names.is_empty())])?;

        let mut query = Query::default();
        query.scope(&options.scope);
        let body = CreateTagBody {
            tag_names: &options.tag_names,
        };

        self.prepare(Method::POST, TAGS, &query.0, Some(&body), &options.headers)
    }

    /// Create access management tags
    ///
    /// POST /v3/tags
    pub async fn create_tag(
        &self,
        options: &CreateTagOptions,
    ) -> Result<DetailedResponse<CreateTagResults>> {
        let request = self.prepare_create_tag(options)?;
        self.execute(request).await
    }

    /// Build the request for `delete_tag_all`
    pub fn prepare_delete_tag_all(&self, options: &DeleteTagAllOptions) -> Result<Request> {
        let mut query = Query::default();
        query
            .opt("providers", options.provider.map(|p| p.as_str()))
            .scope(&options.scope);

        self.prepare::<()>(Method::DELETE, TAGS, &query.0, None, &options.headers)
    }

    /// Delete every tag that is not attached to any resource
    ///
    /// DELETE /v3/tags
    pub async fn delete_tag_all(
        &self,
        options: &DeleteTagAllOptions,
    ) -> Result<DetailedResponse<DeleteTagsResult>> {
        let request = self.prepare_delete_tag_all(options)?;
        self.execute(request).await
    }

    /// Build the request for `delete_tag`
    pub fn prepare_delete_tag(&self, options: &DeleteTagOptions) -> Result<Request> {
        require(&[("tag_name", !options.tag_name.trim().is_empty())])?;

        let mut query = Query::default();
        query.providers(&options.providers).scope(&options.scope);
        let segments = [TAGS[0], TAGS[1], options.tag_name.as_str()];

        self.prepare::<()>(Method::DELETE, &segments, &query.0, None, &options.headers)
    }

    /// Delete a single unattached tag
    ///
    /// DELETE /v3/tags/{tag_name}
    pub async fn delete_tag(
        &self,
        options: &DeleteTagOptions,
    ) -> Result<DetailedResponse<DeleteTagResults>> {
        let request = self.prepare_delete_tag(options)?;
        self.execute(request).await
    }

    /// Build the request for `attach_tag`
    pub fn prepare_attach_tag(&self, options: &TagResourcesOptions) -> Result<Request> {
        self.prepare_tag_resources(TAGS_ATTACH, options)
    }

    /// Attach one or more tags to resources
    ///
    /// POST /v3/tags/attach
    pub async fn attach_tag(
        &self,
        options: &TagResourcesOptions,
    ) -> Result<DetailedResponse<TagResults>> {
        let request = self.prepare_attach_tag(options)?;
        self.execute(request).await
    }

    /// Build the request for `detach_tag`
    pub fn prepare_detach_tag(&self, options: &TagResourcesOptions) -> Result<Request> {
        self.prepare_tag_resources(TAGS_DETACH, options)
    }

    /// Detach one or more tags from resources
    ///
    /// POST /v3/tags/detach
    pub async fn detach_tag(
        &self,
        options: &TagResourcesOptions,
    ) -> Result<DetailedResponse<TagResults>> {
        let request = self.prepare_detach_tag(options)?;
        self.execute(request).await
    }

    /// Dispatch an attach or detach by direction
    pub async fn tag_resources(
        &self,
        direction: TagResources,
        options: &TagResourcesOptions,
    ) -> Result<DetailedResponse<TagResults>> {
        match direction {
            TagResources::Attach => self.attach_tag(options).await,
            TagResources::Detach => self.detach_tag(options).await,
        }
    }

    fn prepare_tag_resources(
        &self,
        segments: &[&str],
        options: &TagResourcesOptions,
    ) -> Result<Request> {
        require(&[("resources", !options.resources.is_empty())])?;

        let mut query = Query::default();
        query.scope(&options.scope);
        let body = TagResourcesBody {
            resources: &options.resources,
            tag_name: options.tag_name.as_deref(),
            tag_names: &options.tag_names,
        };

        self.prepare(Method::POST, segments, &query.0, Some(&body), &options.headers)
    }
}
