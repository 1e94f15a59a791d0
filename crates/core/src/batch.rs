//! Fixed-size batching for bulk preference processing.

use std::slice::Chunks;

use crate::error::PreferenceError;

/// Split `items` into consecutive batches of `batch_size`.
///
/// Every batch holds exactly `batch_size` items except possibly the last.
/// Batches are produced lazily; a new call starts over from the beginning.
pub fn list_in_batches<T>(items: &[T], batch_size: usize) -> Result<Chunks<'_, T>, PreferenceError> {
    if batch_size == 0 {
        return Err(PreferenceError::Validation(
            "Batch size must be at least 1".to_string(),
        ));
    }
    Ok(items.chunks(batch_size))
}
