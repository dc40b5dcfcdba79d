/// Use cases module containing application business logic orchestration
mod export_vex;
mod upload_vex;

pub use export_vex::ExportVexUseCase;
pub use upload_vex::{UploadSettings, UploadVexUseCase};
