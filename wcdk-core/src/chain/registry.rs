use std::collections::HashMap;

use crate::error::{Error, Result};

use super::ChainInfo;

/// Static lookup from chain id to chain metadata.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: HashMap<String, ChainInfo>,
}

impl ChainRegistry {
    /// Build a registry from a list of chain descriptors. A duplicated
    /// chain id keeps the last descriptor.
    pub fn new(chain_infos: Vec<ChainInfo>) -> Self {
        let chains = chain_infos
            .into_iter()
            .map(|info| (info.chain_id.clone(), info))
            .collect();

        Self { chains }
    }

    pub fn get(&self, chain_id: &str) -> Result<&ChainInfo> {
        self.chains
            .get(chain_id)
            .ok_or_else(|| Error::UnknownChain(chain_id.to_string()))
    }

    pub fn contains(&self, chain_id: &str) -> bool {
        self.chains.contains_key(chain_id)
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
