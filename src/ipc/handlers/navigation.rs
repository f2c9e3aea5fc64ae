use crate::ipc::error::{err, ok, Code};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::view::Tab;
use serde_json::json;

fn handle_view_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, state.router.to_json())
}

fn handle_view_navigate(state: &mut AppState, req: &Request) -> serde_json::Value {
    let key = match required_str(req, "tab") {
        Ok(k) => k,
        Err(resp) => return resp,
    };
    let Some(tab) = Tab::parse(key) else {
        let known: Vec<&str> = Tab::ALL.iter().map(|t| t.key()).collect();
        return err(
            &req.id,
            Code::BadParams,
            format!("tab must be one of: {}", known.join(", ")),
            Some(json!({ "tab": key })),
        );
    };
    state.navigate(tab);
    ok(&req.id, state.router.to_json())
}

/// There is no real session; logging out only returns to the dashboard.
fn handle_session_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.navigate(Tab::Dashboard);
    ok(&req.id, state.router.to_json())
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "view.get" => Some(handle_view_get(state, req)),
        "view.navigate" => Some(handle_view_navigate(state, req)),
        "session.logout" => Some(handle_session_logout(state, req)),
        _ => None,
    }
}
