//! Named optional arguments for the typed action methods.
//!
//! # Design
//! Every field is an `Option`; `None` means "use the action's default", which
//! for body fields is `null`. Each struct converts into `Overrides` keyed by
//! the server's wire names, so the defaulting itself stays in the action
//! table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actions::Overrides;

/// Arguments of `ApiClient::identify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifyOptions {
    pub replace_all_images: Option<bool>,
    pub name: Option<String>,
    /// Provider name to provider id, e.g. `{"Tmdb": "603"}`.
    pub provider_ids: Option<BTreeMap<String, Value>>,
    pub year: Option<i32>,
}

impl IdentifyOptions {
    pub fn overrides(&self) -> Overrides {
        Overrides::new()
            .set_opt("replaceAllImages", self.replace_all_images)
            .set_opt("Name", self.name.clone())
            .set_opt(
                "ProviderIds",
                self.provider_ids
                    .clone()
                    .map(|ids| ids.into_iter().collect::<serde_json::Map<_, _>>()),
            )
            .set_opt("ProductionYear", self.year)
    }
}

/// How thoroughly the server re-reads metadata or images on refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshMode {
    None,
    ValidationOnly,
    Default,
    FullRefresh,
}

impl RefreshMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RefreshMode::None => "None",
            RefreshMode::ValidationOnly => "ValidationOnly",
            RefreshMode::Default => "Default",
            RefreshMode::FullRefresh => "FullRefresh",
        }
    }
}

impl From<RefreshMode> for Value {
    fn from(mode: RefreshMode) -> Self {
        Value::from(mode.as_str())
    }
}

/// Arguments of `ApiClient::refresh_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshOptions {
    pub recursive: Option<bool>,
    pub image_refresh_mode: Option<RefreshMode>,
    pub metadata_refresh_mode: Option<RefreshMode>,
    pub replace_all_images: Option<bool>,
    pub replace_all_metadata: Option<bool>,
}

impl RefreshOptions {
    pub fn overrides(&self) -> Overrides {
        Overrides::new()
            .set_opt("Recursive", self.recursive)
            .set_opt("ImageRefreshMode", self.image_refresh_mode)
            .set_opt("MetadataRefreshMode", self.metadata_refresh_mode)
            .set_opt("ReplaceAllImages", self.replace_all_images)
            .set_opt("ReplaceAllMetadata", self.replace_all_metadata)
    }
}

/// Image slots an item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Primary,
    Art,
    Backdrop,
    Banner,
    Logo,
    Thumb,
    Disc,
    Box,
    Screenshot,
    Menu,
    Chapter,
    BoxRear,
    Profile,
}

impl ImageType {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageType::Primary => "Primary",
            ImageType::Art => "Art",
            ImageType::Backdrop => "Backdrop",
            ImageType::Banner => "Banner",
            ImageType::Logo => "Logo",
            ImageType::Thumb => "Thumb",
            ImageType::Disc => "Disc",
            ImageType::Box => "Box",
            ImageType::Screenshot => "Screenshot",
            ImageType::Menu => "Menu",
            ImageType::Chapter => "Chapter",
            ImageType::BoxRear => "BoxRear",
            ImageType::Profile => "Profile",
        }
    }
}

impl From<ImageType> for Value {
    fn from(kind: ImageType) -> Self {
        Value::from(kind.as_str())
    }
}

/// Arguments of `ApiClient::get_remote_images`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteImagesOptions {
    pub image_type: Option<ImageType>,
    pub start_index: Option<u32>,
    pub limit: Option<u32>,
    pub provider_name: Option<String>,
    pub include_all_languages: Option<bool>,
}

impl RemoteImagesOptions {
    pub fn overrides(&self) -> Overrides {
        Overrides::new()
            .set_opt("type", self.image_type)
            .set_opt("startIndex", self.start_index)
            .set_opt("limit", self.limit)
            .set_opt("providerName", self.provider_name.clone())
            .set_opt("includeAllLanguages", self.include_all_languages)
    }
}
