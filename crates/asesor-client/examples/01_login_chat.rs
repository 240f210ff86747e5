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
    println!("Using workspace: {}", workspace.name);

    let reply = client
        .send_message(workspace.key(), "Summarize my open cases")
        .await?;
    println!("Assistant: {reply}");

    Ok(())
}
