mod upload_guards;
mod validation_policy;

pub use upload_guards::{CollectionProjectGuard, UploadSizeGuard, DEFAULT_MAX_VEX_LENGTH};
pub use validation_policy::{ValidationMode, ValidationPolicy};
