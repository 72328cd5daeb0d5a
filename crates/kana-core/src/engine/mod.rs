//! Chained conversion over code-unit buffers.
//!
//! A [`ConversionRequest`] is an ordered list of [`Transform`]s. Each step sees
//! the complete output of the previous one. The fixed-buffer entry point
//! [`convert`] computes the full result first and only copies it out when it
//! fits, so an undersized buffer is never partially written.

mod transform;
#[cfg(test)]
mod tests;

pub use transform::Transform;

use tracing::{debug, debug_span};

use crate::codec::{self, Encoding};
use crate::{Codepoint, ConvertTarget};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("output buffer too small: {required} units required, capacity is {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
}

/// Ordered, immutable list of conversion steps, built by chaining.
///
/// ```
/// use kana_core::{ConversionRequest, ConvertTarget};
///
/// let req = ConversionRequest::new()
///     .katakana()
///     .narrow(ConvertTarget::ALL);
/// assert_eq!(req.steps().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    steps: Vec<Transform>,
}

impl ConversionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    pub fn upper_case(self) -> Self {
        self.then(Transform::UpperCase)
    }

    pub fn lower_case(self) -> Self {
        self.then(Transform::LowerCase)
    }

    pub fn hiragana(self) -> Self {
        self.then(Transform::Hiragana)
    }

    pub fn katakana(self) -> Self {
        self.then(Transform::Katakana)
    }

    pub fn wide(self, target: ConvertTarget) -> Self {
        self.then(Transform::Wide(target))
    }

    pub fn narrow(self, target: ConvertTarget) -> Self {
        self.then(Transform::Narrow(target))
    }

    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step in order.
    pub fn run(&self, input: Vec<Codepoint>) -> Vec<Codepoint> {
        self.steps
            .iter()
            .fold(input, |text, step| step.apply(&text))
    }

    /// Capacity in `E` units that is always enough for converting
    /// `input_len` units, without running the conversion.
    /// [`required_capacity`] gives the exact figure.
    pub fn max_units<E: Encoding>(&self, input_len: usize) -> usize {
        self.steps
            .iter()
            .fold(input_len, |len, s| len.saturating_mul(s.max_unit_growth::<E>()))
    }
}

impl FromIterator<Transform> for ConversionRequest {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Convert `input` into the caller's buffer. Returns the number of units
/// written. On [`ConvertError::BufferTooSmall`] `out` is left untouched and
/// the error carries the exact capacity needed.
pub fn convert<E: Encoding>(
    input: &[E::Unit],
    request: &ConversionRequest,
    out: &mut [E::Unit],
) -> Result<usize, ConvertError> {
    let _span = debug_span!("convert", steps = request.steps.len(), input_len = input.len()).entered();
    let result = request.run(E::decode(input));
    let required = codec::encoded_len::<E>(&result);
    if required > out.len() {
        debug!(required, capacity = out.len(), "output buffer too small");
        return Err(ConvertError::BufferTooSmall {
            required,
            capacity: out.len(),
        });
    }
    let mut encoded = Vec::with_capacity(required);
    E::encode(&result, &mut encoded);
    out[..required].copy_from_slice(&encoded);
    debug!(output_len = required);
    Ok(required)
}

/// Convert into a freshly allocated buffer.
pub fn convert_to_vec<E: Encoding>(input: &[E::Unit], request: &ConversionRequest) -> Vec<E::Unit> {
    let result = request.run(E::decode(input));
    let mut out = Vec::new();
    E::encode(&result, &mut out);
    out
}

/// Exact number of units [`convert`] would write for this input.
pub fn required_capacity<E: Encoding>(input: &[E::Unit], request: &ConversionRequest) -> usize {
    codec::encoded_len::<E>(&request.run(E::decode(input)))
}

pub fn convert_str(input: &str, request: &ConversionRequest) -> String {
    request
        .run(input.chars().map(Codepoint::from).collect())
        .into_iter()
        .map(|cp| cp.to_char().unwrap_or('\u{FFFD}'))
        .collect()
}
