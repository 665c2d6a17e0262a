use serde::{Deserialize, Serialize};

// One extracurricular offering. The activity name is the directory key,
// not a field, so the wire format stays a JSON object keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}
