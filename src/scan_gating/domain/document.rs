//! Read-only model of one vulnerability-enriched CycloneDX scan result.
//!
//! Only the fields the gate actually consumes are modeled; everything
//! else in the wire document is ignored during deserialization. The
//! scanner annotates vulnerabilities with convention-named properties
//! (fixed version, exploit availability); the key-construction
//! conventions live here, behind typed accessors, so no call site ever
//! assembles a property key by hand.

use serde::Deserialize;

use crate::shared::error::GateError;
use crate::shared::Result;

/// Property carrying "is a public exploit known" for a vulnerability.
const EXPLOIT_AVAILABLE_PROPERTY: &str = "amazon:inspector:sbom_scanner:exploit_available";

/// Prefix of the per-component fixed-version property. The full key is
/// `<prefix>:<component bom-ref>`.
const FIXED_VERSION_PROPERTY_PREFIX: &str = "amazon:inspector:sbom_scanner:fixed_version";

/// Property on the metadata component carrying the scanned image digest.
const IMAGE_ID_PROPERTY: &str = "amazon:inspector:sbom_collector:image_id";

/// Root of the scan result document.
///
/// Immutable once parsed; one evaluation pass reads it and discards it.
/// Both top-level sequences default to empty because the scan API omits
/// them entirely for artifacts with no findings.
#[derive(Debug, Deserialize)]
pub struct ScanDocument {
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl ScanDocument {
    /// Parses a scan document from its JSON wire form.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Name of the scanned artifact (image or archive), when the
    /// document carries one.
    pub fn subject_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .component
            .as_ref()
            .map(|c| c.name.as_str())
    }

    /// Digest of the scanned image, when the collector recorded one.
    pub fn subject_image_id(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .component
            .as_ref()?
            .properties
            .iter()
            .find(|p| p.name == IMAGE_ID_PROPERTY)
            .map(|p| p.value.as_str())
    }
}

/// Document metadata block. Only the subject component is consumed.
#[derive(Debug, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub component: Option<SubjectComponent>,
}

/// The component the whole scan is about (container image, archive, ...).
#[derive(Debug, Deserialize)]
pub struct SubjectComponent {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// One inventoried package. `bom_ref` is unique within a document and
/// serves as the join key from `Affect::reference`.
#[derive(Debug, Deserialize)]
pub struct Component {
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,
    pub name: String,
    #[serde(default)]
    pub purl: String,
}

impl Component {
    /// Extracts the installed version from the package URL: the segment
    /// between `@` and the next `?`, `#`, or end-of-string.
    ///
    /// A purl without a version segment is a data error, never a silent
    /// default - the CSV export cannot state an installed version it
    /// does not have.
    pub fn installed_version(&self) -> Result<&str> {
        let malformed = || GateError::MalformedPackageUrl {
            purl: self.purl.clone(),
            name: self.name.clone(),
        };

        let (_, rest) = self.purl.split_once('@').ok_or_else(malformed)?;
        let version = rest.split(['?', '#']).next().unwrap_or_default();

        if version.is_empty() {
            return Err(malformed().into());
        }

        Ok(version)
    }
}

/// One finding reported by the scanner.
#[derive(Debug, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub affects: Vec<Affect>,
}

impl Vulnerability {
    /// Whether a public exploit is known, as reported by the scanner.
    ///
    /// Fails with [`GateError::MissingProperty`] when the scanner did
    /// not annotate the finding; well-formed scan output always carries
    /// this property.
    pub fn exploit_available(&self) -> Result<&str> {
        self.property_value(EXPLOIT_AVAILABLE_PROPERTY)
    }

    /// Version of `component_ref` in which this finding is fixed.
    ///
    /// The scanner emits one fixed-version property per affected
    /// component, keyed by the component's bom-ref.
    pub fn fixed_version_for(&self, component_ref: &str) -> Result<&str> {
        let key = format!("{}:{}", FIXED_VERSION_PROPERTY_PREFIX, component_ref);
        self.property_value(&key)
    }

    fn property_value(&self, name: &str) -> Result<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
            .ok_or_else(|| {
                GateError::MissingProperty {
                    name: name.to_string(),
                    vulnerability_id: self.id.clone(),
                }
                .into()
            })
    }
}

/// One scoring source's opinion of a vulnerability's severity.
#[derive(Debug, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub source: Option<RatingSource>,
    #[serde(default)]
    pub method: Option<String>,
    pub severity: String,
}

impl Rating {
    /// Name of the rating provider, if the rating names one.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.name.as_str())
    }
}

/// Provider of a rating (e.g. NVD, the scanning vendor).
#[derive(Debug, Deserialize)]
pub struct RatingSource {
    pub name: String,
}

/// Generic key/value annotation attached by the scanner.
#[derive(Debug, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Weak reference from a vulnerability to an affected component's
/// bom-ref. Dereferenced through the exporter's component lookup.
#[derive(Debug, Deserialize)]
pub struct Affect {
    #[serde(rename = "ref")]
    pub reference: String,
}
