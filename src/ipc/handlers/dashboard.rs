use crate::dashboard::dashboard_summary;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};

fn handle_dashboard_summary(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        dashboard_summary(
            state.config.get(),
            state.students.list(),
            state.teachers.list(),
            &state.gradebook,
            &state.weekly,
        ),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.summary" => Some(handle_dashboard_summary(state, req)),
        _ => None,
    }
}
