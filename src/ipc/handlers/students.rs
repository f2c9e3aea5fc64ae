use crate::ipc::error::{err, ok, Code};
use crate::ipc::helpers::required_id;
use crate::ipc::types::{AppState, Request};
use crate::view::Tab;
use serde_json::json;

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "students": state.students.list() }))
}

fn select(state: &mut AppState, req: &Request) -> Result<(), serde_json::Value> {
    let student_id = required_id(req, "studentId")?;
    if state.select_student(student_id).is_none() {
        return Err(err(
            &req.id,
            Code::NotFound,
            "student not found",
            Some(json!({ "studentId": student_id })),
        ));
    }
    Ok(())
}

fn handle_students_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Err(resp) = select(state, req) {
        return resp;
    }
    ok(&req.id, json!({ "selectedStudent": state.selected() }))
}

fn handle_students_selected(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "selectedStudent": state.selected() }))
}

/// Student card actions: select, then jump to the grading or report view.
fn handle_students_open(state: &mut AppState, req: &Request, tab: Tab) -> serde_json::Value {
    if let Err(resp) = select(state, req) {
        return resp;
    }
    state.navigate(tab);
    ok(
        &req.id,
        json!({
            "activeTab": state.router.active(),
            "selectedStudent": state.selected(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.select" => Some(handle_students_select(state, req)),
        "students.selected" => Some(handle_students_selected(state, req)),
        "students.openGrading" => Some(handle_students_open(state, req, Tab::Grading)),
        "students.openReport" => Some(handle_students_open(state, req, Tab::Report)),
        _ => None,
    }
}
