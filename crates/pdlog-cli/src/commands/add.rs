use anyhow::Result;
use pdlog_config::Config;
use pdlog_storage::NewUser;

pub async fn handle(config: &Config, user: NewUser) -> Result<()> {
    let storage = super::open_storage(config).await?;
    storage.insert_user(&user).await?;

    println!("✓ Added user");
    println!("  Total users: {}", storage.count_users().await?);

    Ok(())
}
