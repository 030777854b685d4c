use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 200 with a non-empty array; fields of the first element.
    Found {
        name: Option<Value>,
        id: Option<Value>,
    },
    /// 200 with anything other than a non-empty array.
    Data(Value),
    /// Any non-200 status, with the body cut to the snippet length.
    Failed { status: u16, snippet: String },
}
