use crate::ports::outbound::SchemaValidator;
use crate::shared::Result;
use crate::vex_generation::domain::DocumentFormat;
use anyhow::anyhow;
use jsonschema::error::ValidationErrorKind;
use jsonschema::paths::LocationSegment;
use jsonschema::{Draft, Retrieve, Uri, ValidationError, Validator};
use serde_json::Value;
use std::collections::HashMap;

/// `$id` prefix shared by every CycloneDX schema
const SCHEMA_URI_PREFIX: &str = "http://cyclonedx.org/schema/";
const XML_NAMESPACE_PREFIX: &str = "http://cyclonedx.org/schema/bom/";

/// Versions uploads are validated against
const SCHEMA_VERSIONS: &[&str] = &["1.4", "1.5", "1.6"];
/// Schema used when a JSON document does not say which version it follows
const LATEST_SCHEMA_VERSION: &str = "1.6";

const BUNDLED_SCHEMAS: &[(&str, &str)] = &[
    ("bom-1.4.schema.json", include_str!("../../../../schemas/bom-1.4.schema.json")),
    ("bom-1.5.schema.json", include_str!("../../../../schemas/bom-1.5.schema.json")),
    ("bom-1.6.schema.json", include_str!("../../../../schemas/bom-1.6.schema.json")),
    ("spdx.schema.json", include_str!("../../../../schemas/spdx.schema.json")),
    ("jsf-0.82.schema.json", include_str!("../../../../schemas/jsf-0.82.schema.json")),
];

/// Resolves cross-schema `$ref`s (`spdx.schema.json`, `jsf-0.82.schema.json`)
/// from the bundled set. Nothing is fetched over the network.
struct BundledSchemaRetriever {
    schemas_by_uri: HashMap<String, Value>,
}

impl Retrieve for BundledSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> std::result::Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri = uri.as_str();
        if let Some(schema) = self.schemas_by_uri.get(uri) {
            return Ok(schema.clone());
        }

        let file_name = uri.rsplit('/').next().unwrap_or(uri);
        self.schemas_by_uri
            .get(&format!("{}{}", SCHEMA_URI_PREFIX, file_name))
            .cloned()
            .ok_or_else(|| format!("schema {} is not bundled", uri).into())
    }
}

/// Segment of a violation path, ordered so that sorting follows the document tree
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum PathSegment {
    Index(usize),
    Property(String),
}

/// CycloneDxSchemaValidator adapter for uploaded VEX/BOM documents
///
/// This adapter implements the SchemaValidator port. JSON documents are
/// checked with `jsonschema` against the bundled CycloneDX schema of the
/// version they declare; XML documents get a structural check of the root
/// element, the namespace version and every `component/@type`.
/// Every violation is reported, ordered by its position in the document.
pub struct CycloneDxSchemaValidator {
    validators: HashMap<&'static str, Validator>,
    component_types: HashMap<&'static str, Vec<String>>,
}

impl CycloneDxSchemaValidator {
    /// Compiles the bundled schemas once
    ///
    /// # Errors
    /// Returns an error if a bundled schema is not valid JSON or does not compile.
    pub fn new() -> Result<Self> {
        let schemas_by_uri = Self::load_bundled_schemas()?;

        let mut validators = HashMap::new();
        let mut component_types = HashMap::new();
        for &version in SCHEMA_VERSIONS {
            let uri = format!("{}bom-{}.schema.json", SCHEMA_URI_PREFIX, version);
            let schema = schemas_by_uri
                .get(&uri)
                .ok_or_else(|| anyhow!("CycloneDX {} schema is not bundled", version))?;

            let mut options = jsonschema::options();
            options.with_draft(Draft::Draft7);
            options.with_retriever(BundledSchemaRetriever {
                schemas_by_uri: schemas_by_uri.clone(),
            });
            let validator = options.build(schema).map_err(|e| {
                anyhow!("Failed to compile CycloneDX {} schema: {}", version, e)
            })?;

            validators.insert(version, validator);
            component_types.insert(version, Self::schema_component_types(schema));
        }

        Ok(Self {
            validators,
            component_types,
        })
    }

    fn load_bundled_schemas() -> Result<HashMap<String, Value>> {
        BUNDLED_SCHEMAS
            .iter()
            .map(|(file_name, content)| {
                let schema: Value = serde_json::from_str(content)
                    .map_err(|e| anyhow!("Bundled schema {} is not valid JSON: {}", file_name, e))?;
                Ok((format!("{}{}", SCHEMA_URI_PREFIX, file_name), schema))
            })
            .collect()
    }

    /// `definitions.component.properties.type.enum` of a bom schema
    fn schema_component_types(schema: &Value) -> Vec<String> {
        schema
            .pointer("/definitions/component/properties/type/enum")
            .and_then(Value::as_array)
            .map(|types| {
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn unsupported_version(path: &str, version: &str) -> String {
        format!(
            "{}: CycloneDX {} cannot be validated; expected one of [{}]",
            path,
            version,
            SCHEMA_VERSIONS.join(", ")
        )
    }

    fn validate_json(&self, document: &[u8], declared_version: Option<&str>) -> Vec<String> {
        let root: Value = match serde_json::from_slice(document) {
            Ok(value) => value,
            Err(e) => return vec![format!("$: document is not valid JSON: {}", e)],
        };

        let version = declared_version.unwrap_or(LATEST_SCHEMA_VERSION);
        let Some(validator) = self.validators.get(version) else {
            return vec![Self::unsupported_version("$.specVersion", version)];
        };

        let mut violations: Vec<(Vec<PathSegment>, String)> =
            validator.iter_errors(&root).map(|e| Self::violation(&e)).collect();
        violations.sort_by(|a, b| a.0.cmp(&b.0));
        violations
            .into_iter()
            .map(|(path, message)| format!("{}: {}", Self::json_path(&path), message))
            .collect()
    }

    /// Splits a schema error into its instance path and message.
    ///
    /// A missing required property is reported at the property itself.
    fn violation(error: &ValidationError<'_>) -> (Vec<PathSegment>, String) {
        let mut path: Vec<PathSegment> = (&error.instance_path)
            .into_iter()
            .map(|segment| match segment {
                LocationSegment::Property(name) => PathSegment::Property(name.to_string()),
                LocationSegment::Index(index) => PathSegment::Index(index),
            })
            .collect();

        let message = match &error.kind {
            ValidationErrorKind::Required {
                property: Value::String(name),
            } => {
                path.push(PathSegment::Property(name.clone()));
                "is missing but it is required".to_string()
            }
            _ => error.to_string(),
        };
        (path, message)
    }

    /// Renders `$.components[0].type` style paths
    fn json_path(path: &[PathSegment]) -> String {
        let mut rendered = String::from("$");
        for segment in path {
            match segment {
                PathSegment::Property(name) => {
                    rendered.push('.');
                    rendered.push_str(name);
                }
                PathSegment::Index(index) => rendered.push_str(&format!("[{}]", index)),
            }
        }
        rendered
    }

    fn validate_xml(&self, document: &[u8], declared_version: Option<&str>) -> Vec<String> {
        let text = match std::str::from_utf8(document) {
            Ok(text) => text,
            Err(e) => return vec![format!("/: document is not valid UTF-8: {}", e)],
        };

        let mut violations = Vec::new();

        match Self::xml_root_element(text) {
            Some(name) if Self::local_name(name) == "bom" => {}
            Some(name) => violations.push(format!("/{}: root element must be 'bom'", name)),
            None => violations.push("/bom: root element is missing".to_string()),
        }

        let Some(version) = declared_version else {
            violations.push(format!(
                "/bom: namespace {}<version> is missing but it is required",
                XML_NAMESPACE_PREFIX
            ));
            return violations;
        };
        let Some(component_types) = self.component_types.get(version) else {
            violations.push(Self::unsupported_version("/bom/@xmlns", version));
            return violations;
        };

        for (index, component_type) in Self::xml_component_types(text).into_iter().enumerate() {
            match component_type {
                Some(t) if component_types.iter().any(|allowed| allowed == t) => {}
                Some(t) => violations.push(format!(
                    "/bom//component[{}]/@type: '{}' is not a valid value; expected one of [{}]",
                    index + 1,
                    t,
                    component_types.join(", ")
                )),
                None => violations.push(format!(
                    "/bom//component[{}]/@type: attribute is missing but it is required",
                    index + 1
                )),
            }
        }

        violations
    }

    /// Name of the first element, skipping the prolog, comments and doctype
    fn xml_root_element(text: &str) -> Option<&str> {
        let mut rest = text;
        loop {
            rest = &rest[rest.find('<')? + 1..];
            if let Some(comment) = rest.strip_prefix("!--") {
                rest = &comment[comment.find("-->")? + 3..];
            } else if rest.starts_with('?') || rest.starts_with('!') {
                rest = &rest[rest.find('>')? + 1..];
            } else {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                return (end > 0).then(|| &rest[..end]);
            }
        }
    }

    /// Strips a namespace prefix (`cdx:bom` → `bom`)
    fn local_name(name: &str) -> &str {
        name.rsplit(':').next().unwrap_or(name)
    }

    /// `type` attribute of every `<component>` start tag, in document order
    fn xml_component_types(text: &str) -> Vec<Option<&str>> {
        let mut types = Vec::new();
        let mut rest = text;
        while let Some(start) = rest.find("<component") {
            let after = &rest[start + "<component".len()..];
            // Skip <components>, <componentX>, ...
            let is_component_tag = after
                .chars()
                .next()
                .is_some_and(|c| c.is_whitespace() || c == '>' || c == '/');
            let tag_end = after.find('>').unwrap_or(after.len());
            if is_component_tag {
                types.push(Self::xml_attribute(&after[..tag_end], "type"));
            }
            rest = &after[tag_end..];
        }
        types
    }

    fn xml_attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
        for quote in ['"', '\''] {
            let needle = format!("{}={}", name, quote);
            let mut search = tag;
            while let Some(position) = search.find(&needle) {
                let preceded_by_space = search[..position]
                    .chars()
                    .last()
                    .is_some_and(char::is_whitespace);
                let value_start = position + needle.len();
                if preceded_by_space {
                    let value = &search[value_start..];
                    return value.find(quote).map(|end| &value[..end]);
                }
                search = &search[value_start..];
            }
        }
        None
    }
}

impl SchemaValidator for CycloneDxSchemaValidator {
    fn validate(
        &self,
        document: &[u8],
        format: DocumentFormat,
        spec_version: Option<&str>,
    ) -> Vec<String> {
        match format {
            DocumentFormat::Json => self.validate_json(document, spec_version),
            DocumentFormat::Xml => self.validate_xml(document, spec_version),
        }
    }
}
