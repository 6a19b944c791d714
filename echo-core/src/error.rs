// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error taxonomy shared by every codec.
//!
//! Two kinds of failure exist: a value that cannot be mapped to its canonical
//! representation ([`Error::Validation`]) and bytes that cannot be parsed
//! ([`Error::Decode`], [`Error::BufferOutOfBound`], [`Error::DepthExceed`]).
//! Composite codecs never recover from a child error; they only prepend
//! context with [`Error::with_context`] and return it.

use std::borrow::Cow;
use std::fmt::Display;

use thiserror::Error;

/// Set ECHO_PANIC_ON_ERROR=1 at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("ECHO_PANIC_ON_ERROR").is_some();

#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for every `to_raw`, `append_to_buffer` and `read_from_buffer` call.
///
/// Always build errors through the constructor functions
/// ([`Error::validation`], [`Error::decode`], ...) rather than the variants, so
/// that `ECHO_PANIC_ON_ERROR` can point at the exact call site.
///
/// ```rust
/// use echo_core::error::Error;
///
/// let err = Error::validation("value 70000 is out of range for u16");
/// assert!(err.is_validation());
///
/// let err = err.with_context("struct key \"weight\"");
/// assert_eq!(
///     err.to_string(),
///     "struct key \"weight\": value 70000 is out of range for u16"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An input value cannot be mapped to the canonical representation.
    ///
    /// Do not construct this variant directly; use [`Error::validation`] instead.
    #[error("{0}")]
    Validation(Cow<'static, str>),

    /// Bytes are structurally invalid, carry an unknown tag or were not fully consumed.
    ///
    /// Do not construct this variant directly; use [`Error::decode`] instead.
    #[error("{0}")]
    Decode(Cow<'static, str>),

    /// A read ran past the end of the input.
    ///
    /// Do not construct this variant directly; use [`Error::buffer_out_of_bound`] instead.
    #[error("buffer out of bound: {0} + {1} > {2}")]
    BufferOutOfBound(usize, usize, usize),

    /// Nested static variants exceeded the configured decode depth.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Misuse of a two-phase serializer graph (missing or repeated install).
    ///
    /// Do not construct this variant directly; use [`Error::registry`] instead.
    #[error("{0}")]
    Registry(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::Validation`].
    ///
    /// If `ECHO_PANIC_ON_ERROR` is set at compile time, this panics with the message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn validation<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Validation(s.into());
        if PANIC_ON_ERROR {
            panic!("ECHO_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Decode`].
    ///
    /// If `ECHO_PANIC_ON_ERROR` is set at compile time, this panics with the message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn decode<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Decode(s.into());
        if PANIC_ON_ERROR {
            panic!("ECHO_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::BufferOutOfBound`] with the given bounds.
    ///
    /// ```
    /// use echo_core::error::Error;
    ///
    /// let err = Error::buffer_out_of_bound(0, 20, 19);
    /// assert!(err.is_decode());
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, length: usize, capacity: usize) -> Self {
        let err = Error::BufferOutOfBound(offset, length, capacity);
        if PANIC_ON_ERROR {
            panic!("ECHO_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("ECHO_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Registry`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn registry<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Registry(s.into());
        if PANIC_ON_ERROR {
            panic!("ECHO_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// True for failures raised while mapping a value to its canonical form.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// True for failures raised while parsing bytes.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Error::Decode(_) | Error::BufferOutOfBound(..) | Error::DepthExceed(_)
        )
    }

    /// Prepends `"<ctx>: "` to the message, keeping the error kind.
    ///
    /// A [`Error::BufferOutOfBound`] becomes a [`Error::Decode`] carrying the
    /// bound description, since it can no longer hold a prefix.
    #[inline(never)]
    pub fn with_context<C: Display>(self, ctx: C) -> Self {
        match self {
            Error::Validation(m) => Error::Validation(format!("{ctx}: {m}").into()),
            Error::Decode(m) => Error::Decode(format!("{ctx}: {m}").into()),
            Error::DepthExceed(m) => Error::DepthExceed(format!("{ctx}: {m}").into()),
            Error::Registry(m) => Error::Registry(format!("{ctx}: {m}").into()),
            err @ Error::BufferOutOfBound(..) => Error::Decode(format!("{ctx}: {err}").into()),
        }
    }
}

/// Ensures a condition is true; otherwise returns a validation [`enum@Error`].
///
/// ```
/// use echo_core::ensure;
/// use echo_core::error::Error;
///
/// fn check_len(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, "length must be positive");
///     ensure!(n <= 64, "length {} too large", n);
///     Ok(())
/// }
/// assert!(check_len(65).unwrap_err().is_validation());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::validation($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::validation(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with a validation [`enum@Error`].
///
/// ```
/// use echo_core::bail;
/// use echo_core::error::Error;
///
/// fn reject(tag: u32) -> Result<(), Error> {
///     bail!("serializer with key {} not found", tag);
/// }
/// assert_eq!(reject(4).unwrap_err().to_string(), "serializer with key 4 not found");
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::validation($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::validation(format!($fmt, $($arg)*)))
    };
}
