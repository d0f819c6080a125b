//! Macros for creating checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] — Create a complete check (struct + `Validate` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use sentinel_validator::validator;
//! use sentinel_validator::foundation::StatusCode;
//!
//! // Unit check (no fields)
//! validator! {
//!     pub NotBlank;
//!     rule(input) { !input.trim().is_empty() }
//!     status { StatusCode::TooShort }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinBytes { min: usize };
//!     rule(self, input) { input.len() >= self.min }
//!     status { StatusCode::TooShort }
//!     fn min_bytes(min: usize);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete check: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// The `rule` block returns `true` when the text passes; otherwise the
/// `status` block supplies the code to report.
///
/// # Variants
///
/// **Unit check** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Alpha;
///     rule(input) { input.chars().all(|c| c.is_ascii_alphabetic()) }
///     status { StatusCode::NotAlpha }
///     fn alpha();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields, `#[derive(Debug, Clone)]` always applied):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: i64 };
///     rule(self, input) { char_len(input) >= self.min }
///     status { StatusCode::TooShort }
///     fn min_length(min: i64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Equal { expected: String };
///     rule(self, input) { input == self.expected }
///     status { StatusCode::NotEqual }
///     new(expected: impl Into<String>) { Self { expected: expected.into() } }
///     fn equal(expected: impl Into<String>);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit check (no fields) + factory fn ──────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        status $status:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            status $status
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit check (no fields), no factory ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        status $status:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            fn validate(&self, $inp: &str) -> ::std::result::Result<(), $crate::foundation::StatusCode> {
                if $rule {
                    Ok(())
                } else {
                    Err($status)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        status $status:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            status $status
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        status $status:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            fn validate(&$self_, $inp: &str) -> ::std::result::Result<(), $crate::foundation::StatusCode> {
                if $rule {
                    Ok(())
                } else {
                    Err($status)
                }
            }
        }
    };

    // ── Variant 3a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        status $status:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            status $status
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        status $status:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            fn validate(&$self_, $inp: &str) -> ::std::result::Result<(), $crate::foundation::StatusCode> {
                if $rule {
                    Ok(())
                } else {
                    Err($status)
                }
            }
        }
    };
}
