//! Check that the API key and region in the environment are accepted.
//!
//! Run with:
//! MAILCHIMP_API_KEY=... MAILCHIMP_REGION=us6 cargo run --example ping

use mailchimp_rs::MailchimpClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> mailchimp_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = MailchimpClient::from_env()?;
    client.ping().await?;
    println!("Mailchimp API is reachable");

    for list in client.lists().list().await? {
        let id = list.id.as_ref().map(|id| id.as_str()).unwrap_or("?");
        println!("{:>12}  {}", id, list.name);
    }

    Ok(())
}
