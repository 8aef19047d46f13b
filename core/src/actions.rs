//! Declarative table of the server actions this client knows how to call.
//!
//! # Design
//! Each action is a `const Action`: verb, handler template, the query
//! parameters with their defaults and the names of its JSON body fields.
//! Building a request is the same for every action (`Action::build`), so
//! adding one means adding a table entry and a thin typed method on
//! `ApiClient`.
//!
//! Overrides replace a parameter or body field wholesale. Body fields the
//! caller leaves alone are still sent, as `null`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::http::{HttpMethod, RequestDescriptor};

/// Placeholder substituted with the item identifier in handler templates.
pub const ITEM_ID: &str = "{item_id}";

/// Default value of a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    Bool(bool),
    Str(&'static str),
    /// Not sent unless the caller supplies a value.
    Omit,
    /// The caller must supply a non-blank value.
    Required,
}

impl ParamDefault {
    pub fn value(self) -> Option<Value> {
        match self {
            ParamDefault::Bool(b) => Some(Value::Bool(b)),
            ParamDefault::Str(s) => Some(Value::from(s)),
            ParamDefault::Omit | ParamDefault::Required => None,
        }
    }
}

/// A documented server operation on a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub name: &'static str,
    pub method: HttpMethod,
    pub handler: &'static str,
    pub params: &'static [(&'static str, ParamDefault)],
    /// Body field names, or `None` for actions that send no body.
    pub body: Option<&'static [&'static str]>,
}

/// Apply remote metadata search results to an item.
pub const IDENTIFY: Action = Action {
    name: "identify",
    method: HttpMethod::Post,
    handler: "Items/RemoteSearch/Apply/{item_id}",
    params: &[("replaceAllImages", ParamDefault::Bool(true))],
    body: Some(&["Name", "ProviderIds", "ProductionYear"]),
};

pub const REFRESH_ITEM: Action = Action {
    name: "refresh_item",
    method: HttpMethod::Post,
    handler: "Items/{item_id}/Refresh",
    params: &[
        ("Recursive", ParamDefault::Bool(true)),
        ("ImageRefreshMode", ParamDefault::Str("FullRefresh")),
        ("MetadataRefreshMode", ParamDefault::Str("FullRefresh")),
        ("ReplaceAllImages", ParamDefault::Bool(false)),
        ("ReplaceAllMetadata", ParamDefault::Bool(true)),
    ],
    body: None,
};

pub const GET_ITEM: Action = Action {
    name: "get_item",
    method: HttpMethod::Get,
    handler: "Items/{item_id}",
    params: &[],
    body: None,
};

pub const DELETE_ITEM: Action = Action {
    name: "delete_item",
    method: HttpMethod::Delete,
    handler: "Items/{item_id}",
    params: &[],
    body: None,
};

pub const GET_EXTERNAL_ID_INFOS: Action = Action {
    name: "get_external_id_infos",
    method: HttpMethod::Get,
    handler: "Items/{item_id}/ExternalIdInfos",
    params: &[],
    body: None,
};

pub const GET_REMOTE_IMAGES: Action = Action {
    name: "get_remote_images",
    method: HttpMethod::Get,
    handler: "Items/{item_id}/RemoteImages",
    params: &[
        ("type", ParamDefault::Omit),
        ("startIndex", ParamDefault::Omit),
        ("limit", ParamDefault::Omit),
        ("providerName", ParamDefault::Omit),
        ("includeAllLanguages", ParamDefault::Bool(false)),
    ],
    body: None,
};

pub const DOWNLOAD_REMOTE_IMAGE: Action = Action {
    name: "download_remote_image",
    method: HttpMethod::Post,
    handler: "Items/{item_id}/RemoteImages/Download",
    params: &[
        ("type", ParamDefault::Str("Primary")),
        ("imageUrl", ParamDefault::Required),
    ],
    body: None,
};

/// Every action in the table.
pub const ALL: &[&Action] = &[
    &IDENTIFY,
    &REFRESH_ITEM,
    &GET_ITEM,
    &DELETE_ITEM,
    &GET_EXTERNAL_ID_INFOS,
    &GET_REMOTE_IMAGES,
    &DOWNLOAD_REMOTE_IMAGE,
];

/// Look an action up by name.
pub fn find(name: &str) -> Option<&'static Action> {
    ALL.iter().copied().find(|action| action.name == name)
}

/// Caller-supplied values keyed by parameter or body field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    values: BTreeMap<String, Value>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// `set` when `value` is `Some`, no-op otherwise.
    pub fn set_opt<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

impl Action {
    fn declares(&self, name: &str) -> bool {
        self.params.iter().any(|(param, _)| *param == name)
            || self.body.is_some_and(|fields| fields.iter().any(|field| *field == name))
    }

    fn check_identifier(&self, item_id: &str) -> Result<(), ApiError> {
        if item_id.trim().is_empty() {
            return Err(ApiError::MissingIdentifier { action: self.name });
        }
        if item_id
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
        {
            return Err(ApiError::MalformedIdentifier {
                action: self.name,
                id: item_id.to_string(),
            });
        }
        Ok(())
    }

    /// Handler path for `item_id`.
    pub fn handler_for(&self, item_id: &str) -> String {
        self.handler.replace(ITEM_ID, item_id)
    }

    /// Build the descriptor for one call of this action.
    pub fn build(&self, item_id: &str, overrides: &Overrides) -> Result<RequestDescriptor, ApiError> {
        self.check_identifier(item_id)?;
        if let Some(name) = overrides.names().find(|name| !self.declares(name)) {
            return Err(ApiError::UnknownArgument {
                action: self.name,
                name: name.to_string(),
            });
        }

        for &(name, default) in self.params {
            if default == ParamDefault::Required && overrides.get(name).map_or(true, is_blank) {
                return Err(ApiError::MissingArgument {
                    action: self.name,
                    name: name.to_string(),
                });
            }
        }

        let params = self
            .params
            .iter()
            .filter_map(|&(name, default)| {
                let value = overrides.get(name).cloned().or_else(|| default.value())?;
                Some((name.to_string(), value))
            })
            .collect();

        let json = self.body.map(|fields| {
            fields
                .iter()
                .map(|&field| {
                    let value = overrides.get(field).cloned().unwrap_or(Value::Null);
                    (field.to_string(), value)
                })
                .collect::<Map<String, Value>>()
        });

        Ok(RequestDescriptor {
            method: self.method,
            handler: self.handler_for(item_id),
            params,
            json,
        })
    }
}
