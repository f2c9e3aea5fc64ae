use serde_json::json;

/// Stable machine-readable error tokens sent in `error.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    BadParams,
    NotFound,
    NoStudentSelected,
    NotImplemented,
}

impl Code {
    pub fn as_str(self) -> &'static str {
        match self {
            Code::BadParams => "bad_params",
            Code::NotFound => "not_found",
            Code::NoStudentSelected => "no_student_selected",
            Code::NotImplemented => "not_implemented",
        }
    }
}

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: Code,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code.as_str(),
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}
