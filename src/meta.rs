//! Structured VRM 0.x metadata.

use serde::Deserialize;

use crate::glb::RawMeta;

/// The VRM 0.x `meta` object, as written by UniVRM exporters.
///
/// Field names follow the VRM 0.x wire format, including the historical
/// `Ussage` misspellings, which are part of the format. Absent fields
/// deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VrmMeta {
    pub title: String,
    pub version: String,
    pub author: String,
    pub contact_information: String,
    pub reference: String,
    pub allowed_user_name: String,
    #[serde(rename = "violentUssageName")]
    pub violent_usage_name: String,
    #[serde(rename = "sexualUssageName")]
    pub sexual_usage_name: String,
    #[serde(rename = "commercialUssageName")]
    pub commercial_usage_name: String,
    pub other_permission_url: String,
    pub license_name: String,
    pub other_license_url: String,
    /// From the flat `exporterVersion` field next to the `meta` object,
    /// never from the object itself.
    #[serde(skip)]
    pub exporter_version: String,
}

impl VrmMeta {
    /// Deserialize the extracted `meta` fragment and attach the flat
    /// exporter-version string. The flat field is authoritative: a copy
    /// inside the nested object is ignored.
    pub fn from_raw(raw: &RawMeta) -> serde_json::Result<Self> {
        let mut meta: VrmMeta = serde_json::from_str(&raw.meta_json)?;
        meta.exporter_version = raw.exporter_version.clone();
        Ok(meta)
    }
}
