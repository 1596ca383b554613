use async_trait::async_trait;

use crate::models::{Database, RawMatch};
use crate::resolvers::Resolver;

/// Trusts SauceNAO: the first `ext_urls` entry is the source.
#[derive(Clone, Default)]
pub struct Generic;

impl Generic {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn first_url(hit: &RawMatch) -> Option<String> {
        match hit.first_url() {
            Some(url) => Some(url.to_string()),
            None => {
                log::warn!(
                    "No ext_urls for {} match with similarity {}",
                    Database::describe(hit.database_index),
                    hit.similarity
                );
                None
            }
        }
    }
}

#[async_trait]
impl Resolver for Generic {
    fn name(&self) -> &'static str {
        "generic"
    }

    async fn resolve(&self, hit: &RawMatch) -> Option<String> {
        Generic::first_url(hit)
    }
}
