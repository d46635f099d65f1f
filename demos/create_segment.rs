use serde_json::json;
use stream_campaigns::{Auth, CampaignsClient, Filter, NewSegment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let channel_type = std::env::var("STREAM_CHANNEL_TYPE").unwrap_or_else(|_| "messaging".into());

    let client = CampaignsClient::new(Auth::from_env()?);
    let segment = client
        .create_segment(NewSegment::new(
            format!("{channel_type} members"),
            format!("Every member of a {channel_type} channel"),
            Filter::new().with("channel", json!({ "type": channel_type })),
        ))
        .await?;

    println!(
        "segment id: {}, recipients: {}",
        segment.id.as_str(),
        segment.recipients
    );

    Ok(())
}
