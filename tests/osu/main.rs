//! Tests for `osu_rs::osu`.

#[cfg(feature = "diagnostics")]
mod diagnostics_test;
mod files;
mod properties;
mod prompt_handlers;
#[cfg(feature = "serde")]
mod serde_test;
mod unparse_roundtrip;
