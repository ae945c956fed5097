use crate::errors::AppError;
use crate::models::AppData;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<AppData>(&bytes) {
            Ok(data) => {
                info!("loaded {} entries from {}", data.entries.len(), path.display());
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use chrono::NaiveDate;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("work_tracker_{}_{}.json", name, std::process::id()));
        path
    }

    #[tokio::test]
    async fn persisted_entries_load_back() {
        let path = temp_path("roundtrip");
        let mut data = AppData::default();
        let date = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
        data.save(&[date], Location::Office);

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.next_id, 1);
        assert_eq!(loaded.entries.get(&date).map(|e| e.location), Some(Location::Office));
    }

    #[tokio::test]
    async fn unparsable_file_loads_empty() {
        let path = temp_path("garbage");
        std::fs::write(&path, b"not json").unwrap();
        let loaded = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert!(loaded.entries.is_empty());
    }
}
