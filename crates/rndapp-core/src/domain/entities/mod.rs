pub mod context;
pub mod params;
pub mod result;

pub use crate::domain::DomainError;
pub use context::{
    ContextOptions, ContextPaths, CreateContext, HardhatAccount, HardhatOptions, TruffleOptions,
};
pub use params::{CreateParams, CreateParamsBuilder};
pub use result::CreateResult;
