use crate::application::read_models::{
    AnalysisView, SubjectView, VexMetadataView, VexReadModel, VulnerabilityView,
};
use crate::ports::outbound::VexFormatter;
use crate::shared::Result;
use serde::Serialize;

const RATING_METHOD: &str = "other";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    version: u32,
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    vulnerabilities: Option<Vec<Vulnerability>>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    component: Component,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Vulnerability {
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    id: String,
    source: Source,
    ratings: Vec<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<Analysis>,
    affects: Vec<Affect>,
}

#[derive(Debug, Serialize)]
struct Source {
    name: String,
}

#[derive(Debug, Serialize)]
struct Rating {
    source: Source,
    severity: String,
    method: String,
}

#[derive(Debug, Serialize)]
struct Analysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    justification: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    response: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct Affect {
    #[serde(rename = "ref")]
    bom_ref: String,
}

/// CycloneDxFormatter adapter for generating CycloneDX VEX JSON
///
/// This adapter implements the VexFormatter port. The `specVersion` field
/// follows the resolved version of the read model; the project appears as
/// the metadata component and is the target of every `affects` entry.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(&self, metadata: &VexMetadataView, subject: &SubjectView) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            component: Component {
                component_type: "application".to_string(),
                bom_ref: subject.bom_ref.clone(),
                name: subject.name.clone(),
                version: subject.version.clone(),
            },
            tools: vec![Tool {
                vendor: metadata.tool_vendor.clone(),
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            }],
        }
    }

    fn build_vulnerabilities(&self, vulnerabilities: &[VulnerabilityView]) -> Vec<Vulnerability> {
        vulnerabilities
            .iter()
            .map(|v| Vulnerability {
                bom_ref: v.bom_ref.clone(),
                id: v.id.clone(),
                source: Source {
                    name: v.source.clone(),
                },
                ratings: vec![Rating {
                    source: Source {
                        name: v.source.clone(),
                    },
                    severity: v.severity.clone(),
                    method: RATING_METHOD.to_string(),
                }],
                analysis: v.analysis.as_ref().map(Self::build_analysis),
                affects: v
                    .affects
                    .iter()
                    .map(|r| Affect { bom_ref: r.clone() })
                    .collect(),
            })
            .collect()
    }

    fn build_analysis(analysis: &AnalysisView) -> Analysis {
        Analysis {
            state: analysis.state.clone(),
            justification: analysis.justification.clone(),
            response: analysis.responses.clone(),
            detail: analysis.detail.clone(),
        }
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl VexFormatter for CycloneDxFormatter {
    fn format(&self, model: &VexReadModel) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: model.spec_version.as_str().to_string(),
            serial_number: model.metadata.serial_number.clone(),
            version: 1,
            metadata: self.build_metadata(&model.metadata, &model.subject),
            vulnerabilities: model
                .spec_version
                .supports_vulnerabilities()
                .then(|| self.build_vulnerabilities(&model.vulnerabilities)),
        };

        let json = serde_json::to_string_pretty(&bom)?;
        Ok(json)
    }
}
