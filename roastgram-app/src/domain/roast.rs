use serde::{Deserialize, Serialize};

/// Response body of both roast endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roast {
    pub roasting: String,
}

impl Roast {
    pub fn new(roasting: String) -> Self {
        Self { roasting }
    }
}
