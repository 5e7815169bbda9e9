//! Sample asynchronous data feed.

use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

const SAMPLE_DATA: [u32; 3] = [1, 2, 3];

/// Resolves to a small list of numbers, or to [`ServiceError::FetchFailed`]
/// when `should_fail` is set.
pub async fn fetch_data(should_fail: bool) -> ServiceResult<Vec<u32>> {
    // Let other tasks run, as a real fetch would
    tokio::task::yield_now().await;

    if should_fail {
        debug!("Data feed asked to fail");
        return Err(ServiceError::FetchFailed("feed rejected the request".into()));
    }

    Ok(SAMPLE_DATA.to_vec())
}
