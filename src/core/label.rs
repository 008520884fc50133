//! Label lookup shared by the encoding and format enumerations.

use crate::core::error::{KeyFormatError, KeyFormatResult};

/// Looks `label` up among `members` by exact label match.
pub(crate) fn find_by_label<T: Copy>(
    members: &[T],
    label_of: fn(T) -> &'static str,
    kind: &'static str,
    label: &str,
) -> KeyFormatResult<T> {
    members
        .iter()
        .copied()
        .find(|member| label_of(*member) == label)
        .ok_or_else(|| KeyFormatError::UnknownLabel {
            kind,
            label: label.to_string(),
        })
}
