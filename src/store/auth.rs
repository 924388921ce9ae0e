use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::utils::home_path;
use super::Storable;
use crate::config::AUTH_STORE_PATH;
use crate::impl_store;

/// Tokenization keys, keyed by the merchant id they authorize.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Auth {
    pub authorized: HashMap<String, String>,
}

impl Storable for Auth {
    fn path() -> Result<PathBuf> {
        home_path(AUTH_STORE_PATH)
    }
}

impl_store!(Auth);
