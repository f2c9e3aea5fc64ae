use crate::entities::draft_from_params;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_teachers_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "teachers": state.teachers.list() }))
}

fn handle_teachers_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let draft = draft_from_params(&req.params);
    let teacher = state.teachers.add(&draft);
    tracing::info!(id = teacher.id, name = %teacher.name, "teacher added");
    ok(&req.id, json!({ "teacher": teacher }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "teachers.list" => Some(handle_teachers_list(state, req)),
        "teachers.create" => Some(handle_teachers_create(state, req)),
        _ => None,
    }
}
