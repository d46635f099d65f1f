use std::io;

use serde_json::json;
use stream_campaigns::{Auth, CampaignId, CampaignsClient, TemplateParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let campaign_id = std::env::var("STREAM_CAMPAIGN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "STREAM_CAMPAIGN_ID environment variable is required",
        )
    })?;

    let client = CampaignsClient::new(Auth::from_env()?);
    let params = TemplateParams::new().with("user", json!({ "name": "Jane" }));
    let preview = client
        .preview_campaign(&CampaignId::new(campaign_id)?, params)
        .await?;

    println!("{}", preview.message);

    Ok(())
}
