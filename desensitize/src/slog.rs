//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`crate::desensitize`] with `slog` by providing a
//! `slog::Value` wrapper that serializes the *masked* copy as structured JSON
//! via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the masked copy,
//!   never from the original value.
//! - Avoiding fallible logging APIs: masking or serialization failures are
//!   represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or define masking policy.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{Desensitizable, Reflective};

/// A `slog::Value` that emits an owned masked payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted via `slog`'s
/// nested-value support.
pub struct MaskedJson {
    value: JsonValue,
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their masked form as JSON.
///
/// `to_masked_json` masks a copy of the value and stores the result as a
/// `serde_json::Value`. The original (unmasked) value is never serialized.
/// When masking or JSON conversion fails, the returned value stores a JSON
/// string describing the failure instead.
///
/// ## Example
/// ```ignore
/// use desensitize::slog::ToMaskedJson;
///
/// info!(logger, "event"; "data" => event.to_masked_json());
/// ```
pub trait ToMaskedJson: Reflective + Clone + Serialize + Sized {
    /// Masks a copy of `self` and returns a `slog::Value` that serializes it
    /// as structured JSON.
    fn to_masked_json(&self) -> MaskedJson {
        let value = self
            .desensitize()
            .map_err(|_| ())
            .and_then(|masked| serde_json::to_value(masked).map_err(|_| ()))
            .unwrap_or_else(|()| JsonValue::String("failed to mask value for logging".to_owned()));
        MaskedJson { value }
    }
}

impl<T> ToMaskedJson for T where T: Reflective + Clone + Serialize {}
