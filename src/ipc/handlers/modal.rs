use crate::entities::scalar_text;
use crate::ipc::error::{err, ok, Code};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::modal::ModalTarget;
use serde_json::json;

fn handle_modal_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, state.modal.to_json())
}

fn handle_modal_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let kind = match required_str(req, "kind") {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    let Some(target) = ModalTarget::parse(kind) else {
        return err(
            &req.id,
            Code::BadParams,
            "kind must be one of: teacher, class",
            Some(json!({ "kind": kind })),
        );
    };
    state.modal.open(target);
    ok(&req.id, state.modal.to_json())
}

fn handle_modal_set_field(state: &mut AppState, req: &Request) -> serde_json::Value {
    let name = match required_str(req, "name") {
        Ok(n) => n,
        Err(resp) => return resp,
    };
    // Same text rule as the create endpoints. An absent, null or nested value
    // drafts an empty string, which commits as the field's fallback.
    let value = req
        .params
        .get("value")
        .and_then(scalar_text)
        .unwrap_or_default();
    state.modal.set_field(name, &value);
    ok(&req.id, state.modal.to_json())
}

fn handle_modal_commit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let created = state
        .modal
        .commit(&mut state.teachers, &mut state.classes);
    if let Some(c) = &created {
        tracing::info!(created = %c.to_json(), "add dialog committed");
    }
    let mut result = state.modal.to_json();
    result["created"] = created.map(|c| c.to_json()).unwrap_or(serde_json::Value::Null);
    ok(&req.id, result)
}

fn handle_modal_cancel(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.modal.cancel();
    ok(&req.id, state.modal.to_json())
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "modal.get" => Some(handle_modal_get(state, req)),
        "modal.open" => Some(handle_modal_open(state, req)),
        "modal.setField" => Some(handle_modal_set_field(state, req)),
        "modal.commit" => Some(handle_modal_commit(state, req)),
        "modal.cancel" => Some(handle_modal_cancel(state, req)),
        _ => None,
    }
}
