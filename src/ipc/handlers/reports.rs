use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::report::report_card;

fn handle_report_card_model(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student = state.selected();
    let assessments = student
        .map(|s| state.gradebook.for_student(s.id))
        .unwrap_or_default();
    let today = chrono::Local::now().date_naive();
    ok(
        &req.id,
        report_card(state.config.get(), student, &assessments, today),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reports.reportCardModel" => Some(handle_report_card_model(state, req)),
        _ => None,
    }
}
