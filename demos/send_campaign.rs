use std::io;

use chrono::{DateTime, Utc};
use stream_campaigns::{Auth, CampaignId, CampaignsClient, SendOptions};

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
    // Optional RFC3339 timestamp, e.g. 2030-01-01T09:00:00Z.
    let options = match std::env::var("STREAM_SCHEDULED_AT") {
        Ok(raw) => SendOptions::scheduled_at(raw.parse::<DateTime<Utc>>()?),
        Err(_) => SendOptions::default(),
    };

    let client = CampaignsClient::new(Auth::from_env()?);
    let id = CampaignId::new(campaign_id)?;

    match client.send_campaign(&id, options).await {
        Ok(status) => println!(
            "status: {}, scheduled_at: {:?}",
            status.status, status.scheduled_at
        ),
        Err(err) if err.is_validation_error() => {
            println!(
                "send rejected (current status: {:?}): {err}",
                err.campaign_state()
            );
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
