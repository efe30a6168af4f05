use tracing::warn;

use crate::modules::media::application::ports::outgoing::FileStorage;

/// Best-effort removal of stored files once the rows pointing at them are
/// gone. Failures are logged and swallowed.
pub async fn release_files<I>(storage: &dyn FileStorage, names: I)
where
    I: IntoIterator<Item = String>,
{
    for name in names {
        if let Err(e) = storage.delete(&name).await {
            warn!(file = %name, error = %e, "Failed to release stored file");
        }
    }
}
