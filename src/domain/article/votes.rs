use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Voting aggregate attached to an article. Its shape belongs to the voting
/// subsystem, so it stays a raw JSON value here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteAggregate(Value);

impl VoteAggregate {
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Project into a caller-defined view of the aggregate.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }
}
