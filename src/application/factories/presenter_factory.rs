use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Where an exported VEX document is delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Maps `export --output`: absent or `-` means stdout
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) if path != Path::new("-") => PresenterType::File(path),
            _ => PresenterType::Stdout,
        }
    }
}

/// Picks the output adapter for an export
///
/// Problem details are always printed through [`StdoutPresenter`]; only the
/// exported document itself can be redirected to a file.
pub struct PresenterFactory;

impl PresenterFactory {
    /// # Examples
    /// ```
    /// use project_vex::application::factories::{PresenterFactory, PresenterType};
    /// use std::path::PathBuf;
    ///
    /// let presenter = PresenterFactory::create(PresenterType::from_output(Some(PathBuf::from("-"))));
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
