use crate::{
    animation::ease::Ease,
    foundation::core::{FrameSpan, PlaneSize},
    foundation::error::{MaskforgeError, MaskforgeResult},
    format::points::{format_list, format_points},
    mask::generate::{FadeParams, generate},
    node::registry::{NodeDescriptor, PluginNode},
    node::schema::{InputKind, InputSpec, OutputKind, OutputSpec},
    node::value::{Inputs, Value},
};

/// UI category shared by all built-in Maskforge nodes.
pub const CATEGORY: &str = "maskforge";

fn require_u64(inputs: &Inputs, name: &str) -> MaskforgeResult<u64> {
    let v = inputs.int(name)?;
    u64::try_from(v)
        .map_err(|_| MaskforgeError::configuration(format!("'{name}' must be non-negative")))
}

fn require_u32(inputs: &Inputs, name: &str) -> MaskforgeResult<u32> {
    let v = inputs.int(name)?;
    u32::try_from(v)
        .map_err(|_| MaskforgeError::configuration(format!("'{name}' is out of range")))
}

/// Fade-mask generator: expands a points string into a batch of
/// interpolated constant-intensity planes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FadeMaskNode;

impl PluginNode for FadeMaskNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            identifier: "FadeMaskGenerator".to_string(),
            display_name: "Fade Mask from point string".to_string(),
            category: CATEGORY.to_string(),
            inputs: vec![
                InputSpec::new("points", InputKind::String { multiline: true }),
                InputSpec::new(
                    "frames",
                    InputKind::Int {
                        min: 2,
                        max: 4096,
                        step: 1,
                    },
                )
                .with_default(serde_json::json!(16)),
                InputSpec::new(
                    "width",
                    InputKind::Int {
                        min: 1,
                        max: 8192,
                        step: 1,
                    },
                )
                .with_default(serde_json::json!(512)),
                InputSpec::new(
                    "height",
                    InputKind::Int {
                        min: 1,
                        max: 8192,
                        step: 1,
                    },
                )
                .with_default(serde_json::json!(512)),
                InputSpec::new("invert", InputKind::Boolean)
                    .with_default(serde_json::json!(false)),
                InputSpec::new(
                    "interpolation",
                    InputKind::Choice {
                        options: Ease::NAMES.iter().map(|s| s.to_string()).collect(),
                    },
                )
                .with_default(serde_json::json!("linear")),
            ],
            outputs: vec![OutputSpec::new("mask", OutputKind::Mask)],
        }
    }

    fn invoke(&self, inputs: &Inputs) -> MaskforgeResult<Vec<Value>> {
        let points = inputs.str("points")?;
        let span = FrameSpan::new(require_u64(inputs, "frames")?)?;
        let size = PlaneSize::new(
            require_u32(inputs, "width")?,
            require_u32(inputs, "height")?,
        )?;
        let invert = inputs.boolean("invert")?;
        let ease = Ease::from_name(inputs.str("interpolation")?);

        let batch = generate(&FadeParams {
            points,
            span,
            size,
            invert,
            ease,
        })?;
        Ok(vec![Value::Mask(batch)])
    }
}

/// Formats a float array into the points-string keyframe encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatArrayToPointStringNode;

impl PluginNode for FloatArrayToPointStringNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            identifier: "FloatArrayToPointString".to_string(),
            display_name: "Point String from float array".to_string(),
            category: CATEGORY.to_string(),
            inputs: vec![InputSpec::new("float_array", InputKind::FloatArray)],
            outputs: vec![OutputSpec::new("point_string", OutputKind::String)],
        }
    }

    fn invoke(&self, inputs: &Inputs) -> MaskforgeResult<Vec<Value>> {
        let values = inputs.float_array("float_array")?;
        Ok(vec![Value::Str(format_points(&values)?)])
    }
}

/// Formats a float array into a flat `", "`-separated listing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatArrayToListNode;

impl PluginNode for FloatArrayToListNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            identifier: "FloatArrayToList".to_string(),
            display_name: "List from float array".to_string(),
            category: CATEGORY.to_string(),
            inputs: vec![InputSpec::new("float_array", InputKind::FloatArray)],
            outputs: vec![OutputSpec::new("list_string", OutputKind::String)],
        }
    }

    fn invoke(&self, inputs: &Inputs) -> MaskforgeResult<Vec<Value>> {
        let values = inputs.float_array("float_array")?;
        Ok(vec![Value::Str(format_list(&values)?)])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/node/nodes.rs"]
mod tests;
