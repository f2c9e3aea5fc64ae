use crate::ipc::error::{err, Code};
use crate::ipc::types::Request;
use serde_json::json;

pub fn required_str<'a>(req: &'a Request, key: &str) -> Result<&'a str, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| err(&req.id, Code::BadParams, format!("missing {}", key), None))
}

pub fn required_id(req: &Request, key: &str) -> Result<u32, serde_json::Value> {
    let v = req
        .params
        .get(key)
        .ok_or_else(|| err(&req.id, Code::BadParams, format!("missing {}", key), None))?;
    // Record ids start at 1.
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            err(
                &req.id,
                Code::BadParams,
                format!("{} must be a positive integer", key),
                Some(json!({ key: v })),
            )
        })
}
