use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use std::io;
use std::path::Path;

pub const DEFAULT_INSTITUTION_NAME: &str = "TPQ Al-Hidayah";
pub const DEFAULT_INSTITUTION_ADDRESS: &str = "Jl. H. Nawi Raya No. 12, Jakarta Selatan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingType {
    Numeric,
    Predicate,
}

/// Theme tokens understood by the dashboard chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeColor {
    #[serde(rename = "bg-emerald-600")]
    Emerald,
    #[serde(rename = "bg-blue-600")]
    Blue,
    #[serde(rename = "bg-purple-600")]
    Purple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleFlags {
    pub tilawah: bool,
    pub tahfidz: bool,
    pub adab: bool,
}

impl Default for ModuleFlags {
    fn default() -> Self {
        Self {
            tilawah: true,
            tahfidz: true,
            adab: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionConfig {
    pub institution_name: String,
    pub institution_address: String,
    /// `data:<mime>;base64,...` once a logo has been read.
    pub institution_logo: Option<String>,
    pub grading_type: GradingType,
    pub modules: ModuleFlags,
    pub logo_color: ThemeColor,
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        Self {
            institution_name: DEFAULT_INSTITUTION_NAME.to_string(),
            institution_address: DEFAULT_INSTITUTION_ADDRESS.to_string(),
            institution_logo: None,
            grading_type: GradingType::Numeric,
            modules: ModuleFlags::default(),
            logo_color: ThemeColor::Emerald,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config patch: {0}")]
    InvalidPatch(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModulesPatch {
    pub tilawah: Option<bool>,
    pub tahfidz: Option<bool>,
    pub adab: Option<bool>,
}

/// Partial config update. Absent fields are left alone; `institutionLogo: null`
/// clears the logo.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigPatch {
    pub institution_name: Option<String>,
    pub institution_address: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub institution_logo: Option<Option<String>>,
    pub grading_type: Option<GradingType>,
    pub modules: Option<ModulesPatch>,
    pub logo_color: Option<ThemeColor>,
}

fn present_or_null<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

impl ConfigPatch {
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// Raw image bytes from a completed logo read.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl LogoImage {
    pub fn read(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self {
            mime: mime_for(path),
            bytes,
        })
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, B64.encode(&self.bytes))
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Default)]
pub struct ConfigStore {
    current: InstitutionConfig,
}

impl ConfigStore {
    pub fn get(&self) -> &InstitutionConfig {
        &self.current
    }

    pub fn update(&mut self, patch: ConfigPatch) -> &InstitutionConfig {
        let cfg = &mut self.current;
        if let Some(name) = patch.institution_name {
            cfg.institution_name = name;
        }
        if let Some(address) = patch.institution_address {
            cfg.institution_address = address;
        }
        if let Some(logo) = patch.institution_logo {
            cfg.institution_logo = logo;
        }
        if let Some(grading_type) = patch.grading_type {
            cfg.grading_type = grading_type;
        }
        // Merge module flags one by one; a patch naming one module must not
        // reset the other two.
        if let Some(modules) = patch.modules {
            if let Some(v) = modules.tilawah {
                cfg.modules.tilawah = v;
            }
            if let Some(v) = modules.tahfidz {
                cfg.modules.tahfidz = v;
            }
            if let Some(v) = modules.adab {
                cfg.modules.adab = v;
            }
        }
        if let Some(color) = patch.logo_color {
            cfg.logo_color = color;
        }
        tracing::info!(
            grading_type = ?cfg.grading_type,
            modules = ?cfg.modules,
            "institution config updated"
        );
        &self.current
    }

    /// Applies the outcome of one logo read. A failed read leaves the config
    /// as it was and reports nothing to the caller beyond the return value.
    pub fn complete_logo_read(&mut self, read: io::Result<LogoImage>) -> bool {
        match read {
            Ok(image) => {
                tracing::info!(mime = image.mime, bytes = image.bytes.len(), "logo loaded");
                self.current.institution_logo = Some(image.data_uri());
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "logo read failed; keeping previous logo");
                false
            }
        }
    }

    pub fn clear_logo(&mut self) {
        self.current.institution_logo = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde_json::json;

    #[test]
    fn defaults_match_fresh_institution() {
        let cfg = InstitutionConfig::default();
        assert_eq!(cfg.institution_name, "TPQ Al-Hidayah");
        assert_eq!(cfg.grading_type, GradingType::Numeric);
        assert_eq!(cfg.modules, ModuleFlags::default());
        assert!(cfg.institution_logo.is_none());

        let v = serde_json::to_value(&cfg).expect("serialize");
        assert_eq!(v["logoColor"], json!("bg-emerald-600"));
        assert_eq!(v["gradingType"], json!("numeric"));
        assert_eq!(v["modules"], json!({ "tilawah": true, "tahfidz": true, "adab": true }));
    }

    #[test]
    fn single_module_patch_keeps_other_flags() {
        let mut store = ConfigStore::default();
        let patch = ConfigPatch::from_json(&json!({ "modules": { "adab": false } })).unwrap();
        let cfg = store.update(patch);
        assert!(cfg.modules.tilawah);
        assert!(cfg.modules.tahfidz);
        assert!(!cfg.modules.adab);
    }

    #[test]
    fn random_toggle_sequences_only_touch_named_flag() {
        let mut rng = StdRng::seed_from_u64(0x7071);
        for _ in 0..200 {
            let mut store = ConfigStore::default();
            for _ in 0..rng.random_range(1..40) {
                let before = store.get().modules;
                let value: bool = rng.random_bool(0.5);
                let which = rng.random_range(0..3);
                let patch = match which {
                    0 => json!({ "modules": { "tilawah": value } }),
                    1 => json!({ "modules": { "tahfidz": value } }),
                    _ => json!({ "modules": { "adab": value } }),
                };
                let after = store.update(ConfigPatch::from_json(&patch).unwrap()).modules;
                match which {
                    0 => {
                        assert_eq!(after.tilawah, value);
                        assert_eq!((after.tahfidz, after.adab), (before.tahfidz, before.adab));
                    }
                    1 => {
                        assert_eq!(after.tahfidz, value);
                        assert_eq!((after.tilawah, after.adab), (before.tilawah, before.adab));
                    }
                    _ => {
                        assert_eq!(after.adab, value);
                        assert_eq!((after.tilawah, after.tahfidz), (before.tilawah, before.tahfidz));
                    }
                }
            }
        }
    }

    #[test]
    fn name_and_address_accept_anything() {
        let mut store = ConfigStore::default();
        let patch = ConfigPatch::from_json(&json!({
            "institutionName": "",
            "institutionAddress": "   "
        }))
        .unwrap();
        let cfg = store.update(patch);
        assert_eq!(cfg.institution_name, "");
        assert_eq!(cfg.institution_address, "   ");
        assert_eq!(cfg.grading_type, GradingType::Numeric);
    }

    #[test]
    fn logo_null_clears_but_absent_keeps() {
        let mut store = ConfigStore::default();
        store.update(
            ConfigPatch::from_json(&json!({ "institutionLogo": "data:image/png;base64,AA==" }))
                .unwrap(),
        );
        store.update(ConfigPatch::from_json(&json!({ "institutionName": "X" })).unwrap());
        assert!(store.get().institution_logo.is_some());
        store.update(ConfigPatch::from_json(&json!({ "institutionLogo": null })).unwrap());
        assert!(store.get().institution_logo.is_none());
    }

    #[test]
    fn unknown_theme_token_is_rejected() {
        let e = ConfigPatch::from_json(&json!({ "logoColor": "bg-red-600" }));
        assert!(e.is_err());
        let e = ConfigPatch::from_json(&json!({ "gradingType": "letters" }));
        assert!(e.is_err());
    }

    #[test]
    fn failed_logo_read_is_a_silent_noop() {
        let mut store = ConfigStore::default();
        let ok = store.complete_logo_read(Ok(LogoImage {
            mime: "image/png",
            bytes: vec![1, 2, 3],
        }));
        assert!(ok);
        let first = store.get().institution_logo.clone();
        assert_eq!(first.as_deref(), Some("data:image/png;base64,AQID"));

        let applied = store.complete_logo_read(Err(io::Error::new(io::ErrorKind::NotFound, "gone")));
        assert!(!applied);
        assert_eq!(store.get().institution_logo, first);
    }

    #[test]
    fn last_completed_logo_read_wins() {
        let mut store = ConfigStore::default();
        store.complete_logo_read(Ok(LogoImage { mime: "image/png", bytes: vec![0] }));
        store.complete_logo_read(Ok(LogoImage { mime: "image/jpeg", bytes: vec![0] }));
        assert!(store
            .get()
            .institution_logo
            .as_deref()
            .unwrap()
            .starts_with("data:image/jpeg;"));
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for(Path::new("logo.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("a/b/logo.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("logo")), "application/octet-stream");
    }
}
