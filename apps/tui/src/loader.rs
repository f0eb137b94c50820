use std::path::{Path, PathBuf};

use car_market::{decode_dataset, CarRecord, DatasetError};
use tokio::sync::oneshot;

pub type DatasetResult = Result<Vec<CarRecord>, DatasetError>;

/// Reads and decodes the listings file.
pub async fn load_dataset(path: &Path) -> DatasetResult {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| DatasetError::Unavailable(format!("{}: {error}", path.display())))?;
    decode_dataset(&raw)
}

/// Starts [`load_dataset`] on the runtime; the result arrives on the
/// returned channel. There is no timeout or retry.
pub fn spawn_dataset_load(path: PathBuf) -> oneshot::Receiver<DatasetResult> {
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        let result = load_dataset(&path).await;
        if sender.send(result).is_err() {
            tracing::debug!("dataset receiver dropped before load finished");
        }
    });
    receiver
}
