use std::io;

use stream_campaigns::{Auth, CampaignId, CampaignsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let campaign_id = std::env::var("STREAM_CAMPAIGN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STREAM_CAMPAIGN_ID environment variable is required",
        )
    })?;

    let client = CampaignsClient::new(Auth::from_env()?);
    let status = client
        .cancel_campaign(&CampaignId::new(campaign_id)?)
        .await?;

    println!("status: {}", status.status);

    Ok(())
}
