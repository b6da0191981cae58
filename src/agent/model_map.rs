use crate::models::ModelId;

/// Identifier the live backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendModelId(&'static str);

impl BackendModelId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for BackendModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Used for every id missing from the table.
pub const DEFAULT_BACKEND_MODEL: BackendModelId = BackendModelId("gpt-4o");

/// Maps a canonical model id to the id the live backend understands.
/// Several canonical ids may collapse onto one backend id.
pub fn resolve_backend_model(id: &ModelId) -> BackendModelId {
    match id {
        ModelId::Gpt4o => BackendModelId("gpt-4o"),
        ModelId::Gpt4Turbo => BackendModelId("gpt-4-turbo-preview"),
        ModelId::Claude35Sonnet => DEFAULT_BACKEND_MODEL,
        ModelId::Gpt35Turbo => BackendModelId("gpt-3.5-turbo"),
        ModelId::Other(_) => DEFAULT_BACKEND_MODEL,
    }
}
