//! Typed action methods over an injected request executor.
//!
//! # Design
//! `ApiClient` holds only its executor and carries no mutable state between
//! calls. Every method builds one `RequestDescriptor` from the action table
//! and hands it to the executor exactly once; the executor's result comes
//! back untouched. Caller-contract faults are raised before dispatch and are
//! converted into the executor's error type, so no call ever reaches the
//! network with a bad identifier.

use tracing::{debug, warn};

use crate::actions::{self, Action, Overrides};
use crate::executor::RequestExecutor;
use crate::types::{IdentifyOptions, ImageType, RefreshOptions, RemoteImagesOptions};

/// Client for the Jellyfin item metadata API.
#[derive(Debug, Clone)]
pub struct ApiClient<E> {
    executor: E,
}

impl<E> ApiClient<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }
}

impl<E: RequestExecutor> ApiClient<E> {
    /// Build the descriptor for `action` and dispatch it.
    pub fn call(
        &self,
        action: &Action,
        item_id: &str,
        overrides: &Overrides,
    ) -> Result<E::Response, E::Error> {
        let descriptor = match action.build(item_id, overrides) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!(action = action.name, error = %e, "rejected call");
                return Err(e.into());
            }
        };
        debug!(
            action = action.name,
            method = descriptor.method.as_str(),
            handler = %descriptor.handler,
            "dispatching request"
        );
        self.executor.execute(descriptor)
    }

    /// Apply a remote search result (name, provider ids, year) to an item.
    pub fn identify(&self, item_id: &str, options: &IdentifyOptions) -> Result<E::Response, E::Error> {
        self.call(&actions::IDENTIFY, item_id, &options.overrides())
    }

    pub fn refresh_item(&self, item_id: &str, options: &RefreshOptions) -> Result<E::Response, E::Error> {
        self.call(&actions::REFRESH_ITEM, item_id, &options.overrides())
    }

    pub fn get_item(&self, item_id: &str) -> Result<E::Response, E::Error> {
        self.call(&actions::GET_ITEM, item_id, &Overrides::new())
    }

    pub fn delete_item(&self, item_id: &str) -> Result<E::Response, E::Error> {
        self.call(&actions::DELETE_ITEM, item_id, &Overrides::new())
    }

    pub fn get_external_id_infos(&self, item_id: &str) -> Result<E::Response, E::Error> {
        self.call(&actions::GET_EXTERNAL_ID_INFOS, item_id, &Overrides::new())
    }

    pub fn get_remote_images(
        &self,
        item_id: &str,
        options: &RemoteImagesOptions,
    ) -> Result<E::Response, E::Error> {
        self.call(&actions::GET_REMOTE_IMAGES, item_id, &options.overrides())
    }

    /// Ask the server to fetch `image_url` into the given slot (default
    /// `Primary`).
    pub fn download_remote_image(
        &self,
        item_id: &str,
        image_url: &str,
        image_type: Option<ImageType>,
    ) -> Result<E::Response, E::Error> {
        let overrides = Overrides::new()
            .set("imageUrl", image_url)
            .set_opt("type", image_type);
        self.call(&actions::DOWNLOAD_REMOTE_IMAGE, item_id, &overrides)
    }
}
