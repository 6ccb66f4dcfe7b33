/*
[INPUT]:  GLOBAL_TAGGING_* environment variables
[OUTPUT]: Tags listed, created, attached and detached on a resource
[POS]:    Examples - end-to-end tagging flow demonstration
[UPDATE]: When operation signatures change
*/

use global_tagging::*;

/// Example: tagging flow
///
/// Configure credentials through the environment, e.g.
///   GLOBAL_TAGGING_AUTH_TYPE=bearertoken
///   GLOBAL_TAGGING_BEARER_TOKEN=$(ibmcloud iam oauth-tokens --output json | jq -r .iam_token | cut -d' ' -f2)
///   RESOURCE_CRN=crn:v1:...
#[tokio::main]
async fn main() {
    println!("=== Global Tagging Example ===\n");

    let client = match GlobalTaggingClient::new_instance(ServiceOptions::new()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}", client.service_url());

    match client.list_tags(&ListTagsOptions::new().limit(10)).await {
        Ok(response) => {
            println!("✓ {} tags in account", response.result.total_count.unwrap_or(0));
            for tag in &response.result.items {
                println!("  - {}", tag.name);
            }
        }
        Err(e) => eprintln!("list_tags failed: {}", e),
    }

    let Ok(crn) = std::env::var("RESOURCE_CRN") else {
        println!("\nSet RESOURCE_CRN to try attach/detach");
        return;
    };

    let options = TagResourcesOptions::new([Resource::new(crn)]).tag_names(["example:rust"]);
    match client.attach_tag(&options).await {
        Ok(response) => println!("✓ attach: {} failed", response.result.failed().count()),
        Err(e) => eprintln!("attach_tag failed: {}", e),
    }
    match client.detach_tag(&options).await {
        Ok(response) => println!("✓ detach: {} failed", response.result.failed().count()),
        Err(e) => eprintln!("detach_tag failed: {}", e),
    }

    println!("\n✓ Tagging example complete");
}
