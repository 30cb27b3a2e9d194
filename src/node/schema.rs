/// Type tag and options for one declared node input.
///
/// The host renders these into UI widgets: a type tag plus the options it
/// needs (numeric range/step, multi-line flag, enumerated choices).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputKind {
    /// Free-form text.
    String {
        /// Render a multi-line editor instead of a single-line field.
        multiline: bool,
    },
    /// True/false toggle.
    Boolean,
    /// Integer with inclusive range and UI step.
    Int {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
        /// UI increment step.
        step: i64,
    },
    /// Float sequence (a lone float is accepted as a one-element array).
    FloatArray,
    /// One of a fixed list of named options.
    Choice {
        /// Option names, in display order.
        options: Vec<String>,
    },
}

/// One declared node input: name, type tag, and an optional default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputSpec {
    /// Input name, unique within the node.
    pub name: String,
    /// Type tag and widget options.
    pub kind: InputKind,
    /// Default value the host pre-fills, if any.
    pub default: Option<serde_json::Value>,
}

impl InputSpec {
    /// Build an input spec with no default.
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    /// Attach a default value.
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Type tag for one declared node output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// Formatted text.
    String,
    /// A 3-D floating-point mask batch.
    Mask,
}

/// One declared node output: name and type tag.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputSpec {
    /// Output name, unique within the node.
    pub name: String,
    /// Type tag.
    pub kind: OutputKind,
}

impl OutputSpec {
    /// Build an output spec.
    pub fn new(name: impl Into<String>, kind: OutputKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
