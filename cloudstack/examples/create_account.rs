use cloudstack::api::account::{CreateAccount, DeleteAccount};
use cloudstack::api::options::with_list_all;
use cloudstack::Client;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    // CLOUDSTACK_API_URL, CLOUDSTACK_API_KEY and CLOUDSTACK_SECRET_KEY are required
    let client = Client::from_env()?;
    info!("Endpoint: {}", client.base_url());

    let username =
        std::env::var("CLOUDSTACK_EXAMPLE_USER").unwrap_or_else(|_| "example-user".to_string());
    let params = CreateAccount {
        accounttype: Some(0),
        ..CreateAccount::new(
            format!("{}@example.com", username),
            "Example",
            "User",
            "ChangeMe-123",
            username.as_str(),
        )
    };

    let account = client.account().create_account(&params).await?;
    info!("Created account {} ({})", account.name, account.id);

    let id = client
        .account()
        .get_account_id(&account.name, &[with_list_all()])
        .await?;
    info!("Lookup by name resolved to {}", id);

    match client.account().delete_account(&DeleteAccount::new(id)).await {
        Ok(result) => info!("Deleted account, success: {}", result.success),
        Err(e) if e.is_async_timeout() => {
            warn!(
                "Delete still running as job {}",
                e.job_id().unwrap_or_default()
            );
        }
        Err(e) => {
            error!("Failed to delete account: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
