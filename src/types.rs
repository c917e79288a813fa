use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Dotted field path of a capture, e.g. `["user", "id"]` for `{user.id}`.
pub type FieldPath = SmallVec<[String; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathVar {
    pub fields: FieldPath,
    pub value: String,
}

impl PathVar {
    pub fn field_path(&self) -> String {
        self.fields.join(".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub operation: String,
    pub verb: String,
    pub variables: Vec<PathVar>,
}

impl MatchResult {
    /// Value bound to the dotted field path, if any.
    pub fn get(&self, field_path: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|var| {
                let mut parts = field_path.split('.');
                var.fields.iter().all(|f| parts.next() == Some(f.as_str())) && parts.next().is_none()
            })
            .map(|var| var.value.as_str())
    }
}
