use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::utils::home_path;
use super::Storable;
use crate::config::CONTEXT_STORE_PATH;
use crate::impl_store;
use crate::store::configuration::Configuration;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Context {
    pub default_merchant: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_api_url: Option<String>,

    // in-memory only, resolved at startup
    #[serde(skip)]
    pub merchant_override: Option<String>,

    #[serde(skip)]
    pub current: Option<Configuration>,
}

impl Context {
    pub fn current_merchant(&self) -> Option<String> {
        self.merchant_override
            .clone()
            .or_else(|| self.default_merchant.clone())
    }
}

impl Storable for Context {
    fn path() -> Result<PathBuf> {
        home_path(CONTEXT_STORE_PATH)
    }
}

impl_store!(Context);
