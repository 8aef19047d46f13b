//! The identify action against a recording executor double.
//!
//! # Design
//! The double stores every descriptor it receives and returns a fixed
//! response, so each test can assert both the exact request shape and that
//! the executor was invoked exactly once.

use std::collections::BTreeMap;
use std::sync::Mutex;

use jellyfin_core::{ApiClient, ApiError, HttpMethod, IdentifyOptions, RequestDescriptor, RequestExecutor};
use serde_json::{json, Value};

#[derive(Debug)]
enum TransportError {
    Api(ApiError),
    Unauthorized,
}

impl From<ApiError> for TransportError {
    fn from(e: ApiError) -> Self {
        TransportError::Api(e)
    }
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<RequestDescriptor>>,
    reject: bool,
}

impl RequestExecutor for Recorder {
    type Response = &'static str;
    type Error = TransportError;

    fn execute(&self, descriptor: RequestDescriptor) -> Result<&'static str, TransportError> {
        self.calls.lock().unwrap().push(descriptor);
        if self.reject {
            return Err(TransportError::Unauthorized);
        }
        Ok("no content")
    }
}

fn client() -> ApiClient<Recorder> {
    ApiClient::new(Recorder::default())
}

fn single_call(client: &ApiClient<Recorder>) -> RequestDescriptor {
    let calls = client.executor().calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "executor must be called exactly once");
    calls[0].clone()
}

fn default_params() -> Value {
    json!({"replaceAllImages": true})
}

fn default_json() -> Value {
    json!({"Name": null, "ProviderIds": null, "ProductionYear": null})
}

fn assert_request_matches(req: &RequestDescriptor, item_id: &str, params: Value, body: Value) {
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.handler, format!("Items/RemoteSearch/Apply/{item_id}"));
    assert_eq!(serde_json::to_value(&req.params).unwrap(), params);
    assert_eq!(Value::Object(req.json.clone().unwrap()), body);
}

#[test]
fn defaults_are_as_expected() {
    let client = client();
    client.identify("1234", &IdentifyOptions::default()).unwrap();
    assert_request_matches(&single_call(&client), "1234", default_params(), default_json());
}

fn do_image_replacement(item_id: &str, replace: bool) {
    let client = client();
    let options = IdentifyOptions {
        replace_all_images: Some(replace),
        ..Default::default()
    };
    client.identify(item_id, &options).unwrap();
    assert_request_matches(
        &single_call(&client),
        item_id,
        json!({"replaceAllImages": replace}),
        default_json(),
    );
}

#[test]
fn images_are_replaced() {
    do_image_replacement("1235", true);
}

#[test]
fn images_are_not_replaced() {
    do_image_replacement("1236", false);
}

#[test]
fn parameters_are_propagated() {
    let client = client();
    let options = IdentifyOptions {
        name: Some("foo".to_string()),
        provider_ids: Some(BTreeMap::from([
            ("id1".to_string(), json!(1)),
            ("id2".to_string(), json!(2)),
        ])),
        year: Some(1964),
        ..Default::default()
    };
    client.identify("1237", &options).unwrap();
    assert_request_matches(
        &single_call(&client),
        "1237",
        default_params(),
        json!({"Name": "foo", "ProviderIds": {"id1": 1, "id2": 2}, "ProductionYear": 1964}),
    );
}

#[test]
fn identical_calls_build_equal_descriptors() {
    let client = client();
    let options = IdentifyOptions {
        name: Some("foo".to_string()),
        year: Some(1964),
        ..Default::default()
    };
    client.identify("42", &options).unwrap();
    client.identify("42", &options).unwrap();
    let calls = client.executor().calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn executor_result_is_passed_through() {
    assert_eq!(client().identify("1", &IdentifyOptions::default()).unwrap(), "no content");
}

#[test]
fn executor_fault_propagates_unchanged() {
    let client = ApiClient::new(Recorder {
        reject: true,
        ..Default::default()
    });
    let err = client.identify("1", &IdentifyOptions::default()).unwrap_err();
    assert!(matches!(err, TransportError::Unauthorized));
    assert_eq!(client.executor().calls.lock().unwrap().len(), 1);
}

#[test]
fn missing_identifier_fails_before_dispatch() {
    let client = client();
    let err = client.identify("", &IdentifyOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        TransportError::Api(ApiError::MissingIdentifier { action: "identify" })
    ));
    assert!(client.executor().calls.lock().unwrap().is_empty());
}
