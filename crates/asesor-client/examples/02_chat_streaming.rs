use std::io::Write;

use anyhow::Result;
use asesor_client::{ApiClient, ApiConfig, AssistantChat};

#[tokio::main]
async fn main() -> Result<()> {
    let email = std::env::var("ASESOR_EMAIL")?;
    let password = std::env::var("ASESOR_PASSWORD")?;

    let client = ApiClient::new(&ApiConfig::from_env())?;
    client.login(&email, &password).await?;

    let workspaces = client.list_workspaces().await?;
    let workspace = workspaces
        .first()
        .ok_or_else(|| anyhow::anyhow!("no workspaces available"))?;

    // Print fragments as their records complete
    client
        .stream_message(workspace.key(), "Draft a short engagement letter", &mut |chunk| {
            print!("{chunk}");
            let _ = std::io::stdout().flush();
        })
        .await?;
    println!();

    Ok(())
}
