use serde_json::Value;
use tracing::debug;

use super::store::{StateKey, StateStore};
use crate::error::Result;

const STORE_TYPE: &str = "setup";
const FLAG_NAME: &str = "initHasRun";

/// Key of the first-run flag for `environment`.
pub fn first_run_key(environment: &str) -> StateKey {
    StateKey {
        store_type: STORE_TYPE.to_string(),
        environment: environment.to_string(),
        name: FLAG_NAME.to_string(),
    }
}

/// Returns whether seeding has never started for `environment`.
///
/// The flag is written `true` on every call, before the caller does any
/// seeding work, so a run that later fails is not retried on the next start.
pub async fn is_first_run(store: &dyn StateStore, environment: &str) -> Result<bool> {
    let key = first_run_key(environment);
    let has_run = store
        .get(&key)
        .await?
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    store.set(&key, Value::Bool(true)).await?;
    debug!(environment, has_run, "Checked first-run flag");

    Ok(!has_run)
}
