pub mod assets;
pub mod catalog;
pub mod common;
pub mod integrations;
pub mod record;

pub use assets::{AssetRegistry, AssetToken, FileAsset};
pub use common::{is_filled, Displayable};
pub use integrations::{
    FieldValue, IntegrationCategory, IntegrationGroup, Integrations, ProviderSettings,
    ProviderSpec, SubProvider,
};
pub use record::{Complexity, ContentStrategy, FieldUpdate, FormRecord, Maintenance, UserExperience};
