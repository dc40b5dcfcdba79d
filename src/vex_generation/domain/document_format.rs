/// CycloneDX XML namespace prefix; the declared version follows it
const CYCLONEDX_XML_NAMESPACE: &str = "http://cyclonedx.org/schema/bom/";

/// Serialization family of an uploaded VEX/BOM document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Xml,
}

impl DocumentFormat {
    /// Detects the format from the first non-whitespace byte.
    ///
    /// `<` means XML; everything else is treated as JSON and left to the
    /// validator to reject.
    pub fn detect(document: &[u8]) -> Self {
        let first = document
            .iter()
            .copied()
            .find(|b| !b.is_ascii_whitespace() && *b != 0xEF && *b != 0xBB && *b != 0xBF);
        match first {
            Some(b'<') => DocumentFormat::Xml,
            _ => DocumentFormat::Json,
        }
    }

    /// Reads the CycloneDX version the document declares about itself.
    ///
    /// JSON documents declare it in `specVersion`, XML documents in the
    /// CycloneDX namespace URI. Returns `None` when nothing can be found.
    pub fn declared_spec_version(&self, document: &[u8]) -> Option<String> {
        match self {
            DocumentFormat::Json => serde_json::from_slice::<serde_json::Value>(document)
                .ok()?
                .get("specVersion")?
                .as_str()
                .map(str::to_string),
            DocumentFormat::Xml => {
                let text = std::str::from_utf8(document).ok()?;
                let start = text.find(CYCLONEDX_XML_NAMESPACE)? + CYCLONEDX_XML_NAMESPACE.len();
                let version: String = text[start..]
                    .chars()
                    .take_while(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                (!version.is_empty()).then_some(version)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Xml => "xml",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
