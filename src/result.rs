//! Unified error handling for forgelog built on the `color-eyre` crate.
//!
//! All fallible functions in this crate return the [`Result`] alias defined
//! here. Errors gain context as they propagate via `.wrap_err()`, and the
//! typed failure cases produced by the forge layer live in [`crate::error`].

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout forgelog.
pub type Result<T> = EyreResult<T>;
