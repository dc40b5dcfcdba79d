use crate::ports::outbound::OutputPresenter;
use crate::shared::error::VexError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Exported documents and problem details always end with a newline,
/// whether they go to a file or to stdout.
fn framed(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}

/// FileSystemWriter adapter for `export --output`
///
/// Writes the exported VEX document to the requested path, replacing a
/// previous export. The export directory must already exist and the target
/// must not be a symbolic link.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: String) -> VexError {
        VexError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
    }

    fn check_destination(&self) -> Result<()> {
        if let Some(directory) = self.output_path.parent() {
            if directory != Path::new("") && !directory.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Export directory does not exist: {}",
                        directory.display()
                    ))
                    .into());
            }
        }

        // symlink_metadata does not follow the link
        match fs::symlink_metadata(&self.output_path) {
            Ok(metadata) if metadata.is_symlink() => Err(self
                .write_error(
                    "Security: Output path is a symbolic link. Refusing to write the VEX document through it."
                        .to_string(),
                )
                .into()),
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self
                .write_error(format!("Failed to read file metadata: {}", e))
                .into()),
        }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_destination()?;

        let document = framed(content);
        fs::write(&self.output_path, &document).map_err(|e| self.write_error(e.to_string()))?;

        tracing::debug!(
            path = %self.output_path.display(),
            bytes = document.len(),
            "VEX document written"
        );
        Ok(())
    }
}

/// StdoutPresenter adapter for documents and problem details on stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .lock()
            .write_all(framed(content).as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}
