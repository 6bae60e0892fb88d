//! ID prefix constants and format checks.
//!
//! IDs are generated inside the store as `{prefix}-{8 lowercase hex}`.

pub const PREFIX_TASK: &str = "tsk";

/// Length of the random hex suffix.
pub const ID_HEX_LEN: usize = 8;

/// Check whether `id` has the shape of a generated ID with the given prefix.
#[must_use]
pub fn has_id_shape(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| {
            hex.len() == ID_HEX_LEN
                && hex
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}
