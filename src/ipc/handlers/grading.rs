use crate::grading::{grading_form, parse_submission, NO_STUDENT_FOR_GRADING};
use crate::ipc::error::{err, ok, Code};
use crate::ipc::types::{AppState, Request};
use crate::rules::ValueDomain;
use serde_json::json;

fn handle_grading_form(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student = state.selected();
    let history = student
        .map(|s| state.gradebook.for_student(s.id))
        .unwrap_or_default();
    ok(
        &req.id,
        grading_form(state.config.get(), student, &history),
    )
}

fn handle_grading_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(student_id) = state.selected().map(|s| s.id) else {
        return err(&req.id, Code::NoStudentSelected, NO_STUDENT_FOR_GRADING, None);
    };
    let draft = match parse_submission(state.config.get(), student_id, &req.params) {
        Ok(d) => d,
        Err(e) => return err(&req.id, Code::BadParams, e.to_string(), None),
    };
    let domain = ValueDomain::for_grading(state.config.get().grading_type);
    let assessment = state.gradebook.record(draft);
    tracing::info!(
        id = assessment.id,
        student_id,
        grades = assessment.grades.len(),
        "assessment saved"
    );
    ok(&req.id, json!({ "assessment": assessment.to_json(domain) }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "grading.form" => Some(handle_grading_form(state, req)),
        "grading.submit" => Some(handle_grading_submit(state, req)),
        _ => None,
    }
}
