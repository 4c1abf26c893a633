use crate::errors::AppError;
use crate::models::TallyRecord;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the persisted record, if any. A missing file means first run; an
/// unreadable or unparsable file is logged and treated the same way rather
/// than taking the app down.
pub async fn load_record(path: &Path) -> Option<TallyRecord> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(record) => Some(record),
            Err(err) => {
                error!("failed to parse data file: {err}");
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read data file: {err}");
            None
        }
    }
}

pub async fn persist_record(path: &Path, record: &TallyRecord) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(record).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}

pub async fn delete_record(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
