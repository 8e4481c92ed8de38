use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// A missing key is the common case on a first visit, so the error is
// reported to the caller without logging.
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::get(key.clone())
        .map_err(|err| anyhow::Error::msg(format!("failed to read local storage {key}: {err}")))
}
