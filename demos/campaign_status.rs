use std::io;
use std::time::Duration;

use stream_campaigns::{Auth, CampaignId, CampaignsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let campaign_id = std::env::var("STREAM_CAMPAIGN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STREAM_CAMPAIGN_ID environment variable is required",
        )
    })?;

    let client = CampaignsClient::builder(Auth::from_env()?)
        .timeout(Duration::from_secs(10))
        .build()?;
    let id = CampaignId::new(campaign_id)?;

    // Poll until the server settles the campaign.
    loop {
        let status = client.get_campaign_status(&id).await?;
        println!(
            "status: {}, sent: {}, errors: {:?}",
            status.status,
            status.progress.map(|it| it.sent).unwrap_or_default(),
            status.errors
        );
        if !status.status.is_active() {
            break;
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    Ok(())
}
