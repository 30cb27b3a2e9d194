//! Maskforge is a set of plugin nodes for a host-controlled visual
//! node-graph runtime (an image/video generation pipeline editor).
//!
//! The core node expands a compact textual keyframe format (a "points
//! string") into a batch of interpolated 2-D fade masks; two peripheral
//! nodes format float sequences back into that textual form.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: points string -> ordered keyframes ([`parse_points`])
//! 2. **Fix up**: guarantee final-frame coverage, sort, resolve duplicates
//!    ([`FadeTrack::from_keys`])
//! 3. **Interpolate**: per-frame clamped, eased scalar intensity
//!    ([`FadeTrack::intensity_at`])
//! 4. **Synthesize**: constant-value planes stacked into a
//!    `(frames, height, width)` batch, optionally inverted ([`generate`])
//!
//! The host consumes the nodes through an explicit registry
//! ([`builtin_nodes`]): each node declares a typed input/output schema
//! ([`NodeDescriptor`]) and is dispatched by identifier. There is no
//! process-wide registry state.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: generation is pure and stable for a given input.
//! - **All-or-nothing**: errors surface before any synthesis; there is no
//!   partial-result mode.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod format;
mod mask;
mod node;

pub use animation::ease::Ease;
pub use animation::keyframes::{FadeTrack, Keyframe, parse_points};
pub use foundation::core::{FrameIndex, FrameSpan, PlaneSize};
pub use foundation::error::{MaskforgeError, MaskforgeResult};
pub use format::points::{format_list, format_points};
pub use mask::batch::MaskBatch;
pub use mask::generate::{FadeParams, generate};
pub use node::nodes::{CATEGORY, FadeMaskNode, FloatArrayToListNode, FloatArrayToPointStringNode};
pub use node::registry::{NodeDescriptor, NodeRegistry, PluginNode, builtin_nodes};
pub use node::schema::{InputKind, InputSpec, OutputKind, OutputSpec};
pub use node::value::{Inputs, Value};
