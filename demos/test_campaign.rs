use std::io;

use stream_campaigns::{Auth, CampaignId, CampaignsClient, UserId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let campaign_id = std::env::var("STREAM_CAMPAIGN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STREAM_CAMPAIGN_ID environment variable is required",
        )
    })?;
    let user_ids_raw = std::env::var("STREAM_TEST_USER_IDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STREAM_TEST_USER_IDS environment variable is required (comma-separated ids)",
        )
    })?;

    let user_ids = user_ids_raw
        .split(',')
        .map(UserId::new)
        .collect::<Result<Vec<_>, _>>()?;

    let client = CampaignsClient::new(Auth::from_env()?);
    let status = client
        .send_test_campaign(&CampaignId::new(campaign_id)?, user_ids)
        .await?;

    println!("status: {}, progress: {:?}", status.status, status.progress);

    Ok(())
}
