use serde::{Deserialize, Serialize};

/// A single input document
/// `id` is stable (derived from the source file name), `text` is the raw body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Box<str>,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<Box<str>>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
