mod info;
mod registry;

pub use info::{ChainInfo, Currency};
pub use registry::ChainRegistry;
