//! Configuration options for field extraction.
//!
//! This module provides the [`ExtractorConfig`] struct which carries the few
//! catalog-specific literals the extraction rules depend on: the local agency
//! code embedded in record links, the `$h` markers that flag electronic
//! resources, and the link labels of fields 856/956.
//!
//! The defaults reproduce the behavior expected for records exported by the
//! Norwegian BIBSYS union catalog.

/// Default local cataloging agency code.
pub const DEFAULT_LOCAL_AGENCY: &str = "NO-TrBIB";

/// Configuration for the record extractors.
///
/// # Examples
///
/// ```
/// use marc_extract::ExtractorConfig;
///
/// // Default configuration (BIBSYS conventions)
/// let config = ExtractorConfig::default();
/// assert_eq!(config.local_agency_prefix(), "(NO-TrBIB)");
///
/// // Custom configuration for another union catalog
/// let config = ExtractorConfig::new()
///     .with_local_agency("SE-LIBR")
///     .with_cover_image_upscaling(false);
/// assert_eq!(config.local_agency_prefix(), "(SE-LIBR)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Agency code whose `(CODE)` prefix is removed from linked record ids (773/830 `$w`).
    pub local_agency: String,

    /// Substrings of 245 `$h` that mark the item as an electronic resource.
    pub electronic_markers: Vec<String>,

    /// 856/956 `$3` labels identifying a cover image link.
    pub cover_image_labels: Vec<String>,

    /// 856/956 `$3` labels identifying a publisher description link.
    pub description_labels: Vec<String>,

    /// Rewrite cover image URLs to request the large rendition.
    ///
    /// BIBSYS serves thumbnails as `size=mini` / `LITE_...`; the large versions live
    /// at the same URL with `stor` / `STOR_...`.
    pub upscale_cover_images: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            local_agency: DEFAULT_LOCAL_AGENCY.to_string(),
            electronic_markers: vec![
                "elektronisk ressurs".to_string(),
                "electronic resource".to_string(),
            ],
            cover_image_labels: vec!["Cover image".to_string(), "Omslagsbilde".to_string()],
            description_labels: vec![
                "Beskrivelse fra forlaget (kort)".to_string(),
                "Beskrivelse fra forlaget (lang)".to_string(),
            ],
            upscale_cover_images: true,
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the local agency code.
    #[must_use]
    pub fn with_local_agency(mut self, agency: impl Into<String>) -> Self {
        self.local_agency = agency.into();
        self
    }

    /// Adds a marker recognized in 245 `$h` as an electronic resource.
    #[must_use]
    pub fn with_electronic_marker(mut self, marker: impl Into<String>) -> Self {
        self.electronic_markers.push(marker.into());
        self
    }

    /// Adds a 856/956 `$3` label recognized as a cover image.
    #[must_use]
    pub fn with_cover_image_label(mut self, label: impl Into<String>) -> Self {
        self.cover_image_labels.push(label.into());
        self
    }

    /// Adds a 856/956 `$3` label recognized as a publisher description.
    #[must_use]
    pub fn with_description_label(mut self, label: impl Into<String>) -> Self {
        self.description_labels.push(label.into());
        self
    }

    /// Enables or disables the cover image URL rewrite.
    #[must_use]
    pub const fn with_cover_image_upscaling(mut self, enabled: bool) -> Self {
        self.upscale_cover_images = enabled;
        self
    }

    /// The local agency as it appears inside identifiers, e.g. `(NO-TrBIB)`.
    #[must_use]
    pub fn local_agency_prefix(&self) -> String {
        format!("({})", self.local_agency)
    }

    /// Whether a 245 `$h` value marks an electronic resource. Case-insensitive.
    #[must_use]
    pub fn is_electronic_medium(&self, medium: &str) -> bool {
        let medium = medium.to_lowercase();
        self.electronic_markers
            .iter()
            .any(|marker| medium.contains(marker.to_lowercase().as_str()))
    }

    /// Whether a 856/956 `$3` label denotes a cover image.
    #[must_use]
    pub fn is_cover_image_label(&self, label: &str) -> bool {
        self.cover_image_labels.iter().any(|l| l == label)
    }

    /// Whether a 856/956 `$3` label denotes a publisher description.
    #[must_use]
    pub fn is_description_label(&self, label: &str) -> bool {
        self.description_labels.iter().any(|l| l == label)
    }
}
