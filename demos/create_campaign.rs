use std::io;

use stream_campaigns::{Auth, CampaignsClient, NewCampaign, SegmentId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let segment_id = std::env::var("STREAM_SEGMENT_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STREAM_SEGMENT_ID environment variable is required",
        )
    })?;
    let message = std::env::var("STREAM_CAMPAIGN_MESSAGE")
        .unwrap_or_else(|_| "Hi {{ user.name }}, we have news for you!".into());

    let client = CampaignsClient::new(Auth::from_env()?);
    let campaign = client
        .create_campaign(NewCampaign::new(SegmentId::new(segment_id)?, message))
        .await?;

    println!(
        "campaign id: {}, status: {}",
        campaign.id.as_str(),
        campaign.status
    );

    Ok(())
}
