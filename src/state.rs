use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub user_id: String,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, user_id: String, data: AppData) -> Self {
        Self {
            data_path,
            user_id,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
