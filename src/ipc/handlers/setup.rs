use crate::config::{ConfigPatch, LogoImage};
use crate::ipc::error::{err, ok, Code};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::rules::{module_rule, ModuleKind, PREDICATE_SCALE};
use serde_json::json;
use std::path::Path;

fn config_json(state: &AppState) -> serde_json::Value {
    json!(state.config.get())
}

fn handle_config_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, config_json(state))
}

fn handle_config_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let patch = match ConfigPatch::from_json(&req.params) {
        Ok(p) => p,
        Err(e) => return err(&req.id, Code::BadParams, e.to_string(), None),
    };
    state.config.update(patch);
    ok(&req.id, config_json(state))
}

/// Reads the picked file and applies it as the logo. A read failure is not
/// reported; the response simply carries the unchanged config.
fn handle_logo_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = match required_str(req, "path") {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    state.config.complete_logo_read(LogoImage::read(Path::new(path)));
    ok(&req.id, config_json(state))
}

fn handle_logo_clear(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.config.clear_logo();
    ok(&req.id, config_json(state))
}

fn handle_rules_modules(state: &mut AppState, req: &Request) -> serde_json::Value {
    let cfg = state.config.get();
    let rules: Vec<serde_json::Value> = ModuleKind::ALL
        .into_iter()
        .map(|m| module_rule(cfg, m).to_json())
        .collect();
    ok(&req.id, json!({ "gradingType": cfg.grading_type, "modules": rules }))
}

fn handle_rules_predicates(_state: &mut AppState, req: &Request) -> serde_json::Value {
    let scale: Vec<serde_json::Value> = PREDICATE_SCALE
        .iter()
        .map(|p| json!({ "value": p.name(), "label": p.label() }))
        .collect();
    ok(&req.id, json!({ "predicates": scale }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "config.get" => Some(handle_config_get(state, req)),
        "config.update" => Some(handle_config_update(state, req)),
        "config.logo.load" => Some(handle_logo_load(state, req)),
        "config.logo.clear" => Some(handle_logo_clear(state, req)),
        "rules.modules" => Some(handle_rules_modules(state, req)),
        "rules.predicates" => Some(handle_rules_predicates(state, req)),
        _ => None,
    }
}
