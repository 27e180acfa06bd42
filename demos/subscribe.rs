//! Subscribe an address to a list and tag it.
//!
//! Run with:
//! MAILCHIMP_API_KEY=... MAILCHIMP_REGION=us6 cargo run --example subscribe -- <list-id> <email>

use mailchimp_rs::models::{MemberBuilder, TagBuilder};
use mailchimp_rs::{ListId, MailchimpClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> mailchimp_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(list_id), Some(email)) = (args.next(), args.next()) else {
        eprintln!("usage: subscribe <list-id> <email>");
        std::process::exit(2);
    };
    let list_id = ListId::new(list_id);

    let client = MailchimpClient::from_env()?;

    let member = MemberBuilder::new()
        .email_address(&email)
        .subscribed()
        .build()?;
    let summary = client.lists().batch_upsert(&list_id, &[member]).await?;
    println!(
        "created: {}, updated: {}",
        summary.total_created, summary.total_updated
    );
    for error in &summary.errors {
        println!("rejected {}: {}", error.email_address, error.error);
    }

    let tag = TagBuilder::new().name("demo").active().build()?;
    client
        .members()
        .update_tags_sync(&list_id, &email, &[tag])
        .await?;

    let tags = client.members().tags(&list_id, &email).await?;
    println!(
        "tags: {}",
        tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
    );

    Ok(())
}
