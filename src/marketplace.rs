mod manifest;
mod name;
mod registry;

pub use manifest::{
    MarketplaceManifest, MarketplaceMetadata, MarketplaceOwner, PluginReference, PluginSource,
};
pub use name::validate_name;
pub use registry::{load_marketplace, MarketplaceEntry, MarketplaceRegistry};
