use anyhow::Result;
use futures_util::TryStreamExt;
use pdlog_config::Config;
use pdlog_logging::UserDataLogger;
use pdlog_security::SEPARATOR;
use pdlog_storage::Storage;

pub async fn handle(config: &Config) -> Result<()> {
    let storage = super::open_storage(config).await?;
    let logger = UserDataLogger::builder()
        .name(&config.logging.logger_name)
        .build()?;

    let count = dump(&storage, &logger).await?;
    tracing::info!(count, "Logged user rows");

    Ok(())
}

/// Log each row as soon as it is fetched
async fn dump(storage: &Storage, logger: &UserDataLogger) -> Result<usize> {
    let mut rows = storage.stream_users();
    let mut count = 0;

    while let Some(row) = rows.try_next().await? {
        logger.info(row.to_message(SEPARATOR));
        count += 1;
    }

    Ok(count)
}
