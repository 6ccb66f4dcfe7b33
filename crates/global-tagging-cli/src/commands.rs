/*
[INPUT]:  Parsed subcommand, account scope, dry-run flag
[OUTPUT]: API results or prepared requests printed to stdout
[POS]:    Command layer - maps subcommands onto client operations
[UPDATE]: When adding subcommands or changing output format
*/

use anyhow::Result;
use clap::{Args, Subcommand};
use global_tagging::{
    AccountScope, CreateTagOptions, DeleteTagAllOptions, DeleteTagOptions, GlobalTaggingClient,
    ListTagsOptions, OrderByName, Provider, Resource, TagResources, TagResourcesOptions,
};
use reqwest::Request;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tags in the account
    List(ListArgs),
    /// Create access management tags
    Create {
        /// Tag names to create
        names: Vec<String>,
    },
    /// Delete a single unattached tag
    Delete {
        name: String,
        #[arg(long, value_delimiter = ',')]
        providers: Vec<Provider>,
    },
    /// Delete every unattached tag
    DeleteAll {
        #[arg(long)]
        provider: Option<Provider>,
    },
    /// Attach tags to resources
    Attach(TagResourcesArgs),
    /// Detach tags from resources
    Detach(TagResourcesArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    full_data: bool,
    #[arg(long, value_delimiter = ',')]
    providers: Vec<Provider>,
    /// Only tags attached to this CRN
    #[arg(long)]
    attached_to: Option<String>,
    #[arg(long)]
    offset: Option<u64>,
    #[arg(long)]
    limit: Option<u64>,
    #[arg(long)]
    order: Option<OrderByName>,
    #[arg(long)]
    attached_only: bool,
}

#[derive(Args, Debug)]
pub struct TagResourcesArgs {
    /// Resource CRN or IMS id; repeatable
    #[arg(long = "resource", value_name = "ID")]
    resources: Vec<String>,
    /// Resource type applied to every resource (IMS resources only)
    #[arg(long)]
    resource_type: Option<String>,
    /// Tag name; repeatable
    #[arg(long = "tag", value_name = "NAME")]
    tags: Vec<String>,
}

impl ListArgs {
    fn into_options(self, scope: AccountScope) -> ListTagsOptions {
        ListTagsOptions {
            scope,
            full_data: self.full_data.then_some(true),
            providers: self.providers,
            attached_to: self.attached_to,
            offset: self.offset,
            limit: self.limit,
            order_by_name: self.order,
            attached_only: self.attached_only.then_some(true),
            ..ListTagsOptions::default()
        }
    }
}

impl TagResourcesArgs {
    fn into_options(self, scope: AccountScope) -> TagResourcesOptions {
        let resource_type = self.resource_type;
        let resources = self.resources.into_iter().map(|id| match &resource_type {
            Some(kind) => Resource::with_type(id, kind.clone()),
            None => Resource::new(id),
        });

        let mut options = TagResourcesOptions::new(resources);
        // a single tag goes out as `tag_name`, several as `tag_names`
        if self.tags.len() == 1 {
            options.tag_name = self.tags.into_iter().next();
        } else {
            options.tag_names = self.tags;
        }
        options.scope = scope;
        options
    }
}

/// Run one subcommand; with `dry_run` the prepared request is printed instead of sent
pub async fn run(
    client: &GlobalTaggingClient,
    command: Command,
    scope: AccountScope,
    dry_run: bool,
) -> Result<()> {
    match command {
        Command::List(args) => {
            let options = args.into_options(scope);
            if dry_run {
                return print_request(&client.prepare_list_tags(&options)?);
            }
            let response = client.list_tags(&options).await?;
            info!(count = response.result.items.len(), "listed tags");
            print_json(&response.result)
        }
        Command::Create { names } => {
            let options = CreateTagOptions {
                tag_names: names,
                scope,
                ..CreateTagOptions::default()
            };
            if dry_run {
                return print_request(&client.prepare_create_tag(&options)?);
            }
            print_json(&client.create_tag(&options).await?.result)
        }
        Command::Delete { name, providers } => {
            let options = DeleteTagOptions {
                tag_name: name,
                providers,
                scope,
                ..DeleteTagOptions::default()
            };
            if dry_run {
                return print_request(&client.prepare_delete_tag(&options)?);
            }
            print_json(&client.delete_tag(&options).await?.result)
        }
        Command::DeleteAll { provider } => {
            let options = DeleteTagAllOptions {
                provider,
                scope,
                ..DeleteTagAllOptions::default()
            };
            if dry_run {
                return print_request(&client.prepare_delete_tag_all(&options)?);
            }
            print_json(&client.delete_tag_all(&options).await?.result)
        }
        Command::Attach(args) => {
            tag_resources(client, TagResources::Attach, args.into_options(scope), dry_run).await
        }
        Command::Detach(args) => {
            tag_resources(client, TagResources::Detach, args.into_options(scope), dry_run).await
        }
    }
}

async fn tag_resources(
    client: &GlobalTaggingClient,
    direction: TagResources,
    options: TagResourcesOptions,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        let request = match direction {
            TagResources::Attach => client.prepare_attach_tag(&options)?,
            TagResources::Detach => client.prepare_detach_tag(&options)?,
        };
        return print_request(&request);
    }

    let response = client.tag_resources(direction, &options).await?;
    let failed = response.result.failed().count();
    if failed > 0 {
        warn!(failed, ?direction, "some resources were not updated");
    }
    print_json(&response.result)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_request(request: &Request) -> Result<()> {
    println!("{} {}", request.method(), request.url());
    if let Some(bytes) = request.body().and_then(|body| body.as_bytes()) {
        let body: serde_json::Value = serde_json::from_slice(bytes)?;
        print_json(&body)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag_uses_tag_name() {
        let args = TagResourcesArgs {
            resources: vec!["crn:v1:a".to_string()],
            resource_type: None,
            tags: vec!["env:dev".to_string()],
        };
        let options = args.into_options(AccountScope::default());
        assert_eq!(options.tag_name.as_deref(), Some("env:dev"));
        assert!(options.tag_names.is_empty());
    }

    #[test]
    fn test_resource_type_applied_to_all() {
        let args = TagResourcesArgs {
            resources: vec!["123".to_string(), "456".to_string()],
            resource_type: Some("SoftLayer_Virtual_Guest".to_string()),
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let options = args.into_options(AccountScope::default());
        assert_eq!(options.resources.len(), 2);
        assert!(
            options
                .resources
                .iter()
                .all(|r| r.resource_type.as_deref() == Some("SoftLayer_Virtual_Guest"))
        );
        assert_eq!(options.tag_names, vec!["a", "b"]);
        assert!(options.tag_name.is_none());
    }
}
