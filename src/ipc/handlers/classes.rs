use crate::entities::draft_from_params;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_classes_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "classes": state.classes.list() }))
}

fn handle_classes_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let draft = draft_from_params(&req.params);
    let class = state.classes.add(&draft);
    tracing::info!(id = class.id, name = %class.name, "class added");
    ok(&req.id, json!({ "class": class }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "classes.list" => Some(handle_classes_list(state, req)),
        "classes.create" => Some(handle_classes_create(state, req)),
        _ => None,
    }
}
