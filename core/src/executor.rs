//! The seam between request construction and transport.

use crate::error::ApiError;
use crate::http::RequestDescriptor;

/// Turns a `RequestDescriptor` into an actual network call.
///
/// Implementations resolve `descriptor.handler` against their configuration
/// (see `RequestDescriptor::url`), attach authentication and perform the
/// round-trip. Whatever they return is handed back to the caller of the
/// `ApiClient` method untouched, errors included.
///
/// `Error` must absorb `ApiError` so that caller-contract faults detected
/// before dispatch share the executor's error channel instead of wrapping it.
pub trait RequestExecutor {
    type Response;
    type Error: From<ApiError>;

    fn execute(&self, descriptor: RequestDescriptor) -> Result<Self::Response, Self::Error>;
}

impl<E: RequestExecutor + ?Sized> RequestExecutor for &E {
    type Response = E::Response;
    type Error = E::Error;

    fn execute(&self, descriptor: RequestDescriptor) -> Result<Self::Response, Self::Error> {
        (**self).execute(descriptor)
    }
}
