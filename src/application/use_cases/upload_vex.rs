use crate::application::dto::{ProjectSelector, VexUploadRequest, VexUploadResponse};
use crate::ports::outbound::{ProgressReporter, SchemaValidator, VexRepository};
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex_generation::domain::{DocumentFormat, Project};
use crate::vex_generation::policies::{CollectionProjectGuard, UploadSizeGuard, ValidationPolicy};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Upload-side configuration, read fresh for every use case instance
#[derive(Debug, Clone, Default)]
pub struct UploadSettings {
    pub policy: ValidationPolicy,
    pub size_guard: UploadSizeGuard,
}

/// UploadVexUseCase - Acceptance gate for inbound VEX documents
///
/// Runs the checks an upload must pass before it is handed to ingestion,
/// cheapest first: payload size, project resolution, collection guard,
/// decoding, then (depending on policy and the project's current tags)
/// schema validation.
///
/// # Type Parameters
/// * `R` - VexRepository implementation
/// * `V` - SchemaValidator implementation
/// * `PR` - ProgressReporter implementation
pub struct UploadVexUseCase<R, V, PR> {
    repository: R,
    validator: V,
    progress_reporter: PR,
    settings: UploadSettings,
}

impl<R, V, PR> UploadVexUseCase<R, V, PR>
where
    R: VexRepository,
    V: SchemaValidator,
    PR: ProgressReporter,
{
    /// Creates a new UploadVexUseCase with injected dependencies
    pub fn new(
        repository: R,
        validator: V,
        progress_reporter: PR,
        settings: UploadSettings,
    ) -> Self {
        Self {
            repository,
            validator,
            progress_reporter,
            settings,
        }
    }

    /// Executes the upload use case
    ///
    /// # Arguments
    /// * `request` - Target project selector and Base64-encoded document
    ///
    /// # Returns
    /// VexUploadResponse with a processing token
    ///
    /// # Errors
    /// * `VexError::PayloadTooLarge` - checked before anything else
    /// * `VexError::NotFound` - the project does not exist
    /// * `VexError::CollectionProjectRejected` - the project aggregates other projects
    /// * `VexError::MalformedPayload` - the payload is not valid Base64
    /// * `VexError::SchemaValidationFailed` - every violation the validator reported
    pub async fn execute(&self, request: VexUploadRequest) -> Result<VexUploadResponse> {
        // Step 1: Bound the payload before decoding or parsing
        self.settings.size_guard.check(&request.vex)?;

        // Step 2: Resolve and guard the target project
        let project = self.resolve_project(&request.project).await?;
        CollectionProjectGuard::check(&project)?;

        // Step 3: Decode and identify the document
        let document = Self::decode(&request.vex)?;
        let format = DocumentFormat::detect(&document);
        let declared_version = format.declared_spec_version(&document);
        self.progress_reporter.report(&format!(
            "📖 Received {} document ({} bytes, specVersion {})",
            format,
            document.len(),
            declared_version.as_deref().unwrap_or("unknown")
        ));
        if declared_version.is_none() {
            self.progress_reporter
                .report_warning("Document does not declare a CycloneDX version");
        }

        // Step 4: Decide on validation from the project's current tags
        let tags = self.repository.tags_of(&project.id()).await?;
        let must_validate = self.settings.policy.must_validate(&tags);
        tracing::debug!(
            mode = %self.settings.policy.mode(),
            tags = ?tags,
            must_validate,
            "evaluated validation policy"
        );

        // Step 5: Validate, collecting every violation
        if must_validate {
            self.validate(&document, format, declared_version.as_deref())?;
        } else {
            self.progress_reporter
                .report("⏭️  Schema validation skipped by policy");
        }

        let response = VexUploadResponse::new(project.id(), document.len(), format, must_validate);
        tracing::debug!(token = %response.token, project = %project.label(), "upload accepted");
        Ok(response)
    }

    async fn resolve_project(&self, selector: &ProjectSelector) -> Result<Project> {
        let project = match selector {
            ProjectSelector::Id(id) => self.repository.resolve_project(id).await?,
            ProjectSelector::NameVersion { name, version } => {
                self.repository
                    .find_project(name, version.as_deref())
                    .await?
            }
        };

        project.ok_or_else(|| {
            VexError::NotFound {
                entity: "Project",
                reference: selector.to_string(),
            }
            .into()
        })
    }

    fn decode(payload: &str) -> Result<Vec<u8>> {
        STANDARD.decode(payload.trim()).map_err(|e| {
            VexError::MalformedPayload {
                details: e.to_string(),
            }
            .into()
        })
    }

    fn validate(
        &self,
        document: &[u8],
        format: DocumentFormat,
        declared_version: Option<&str>,
    ) -> Result<()> {
        let violations = self.validator.validate(document, format, declared_version);
        if !violations.is_empty() {
            for violation in &violations {
                tracing::debug!(%violation, "schema violation");
            }
            return Err(VexError::SchemaValidationFailed { violations }.into());
        }

        self.progress_reporter.report("✅ Schema validation passed");
        Ok(())
    }
}
