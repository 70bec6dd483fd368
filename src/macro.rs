//! Private macros specific to this crate.

/// Implement the shared surface of a transparent integer wrapper.
///
/// Generates `get`, [`Display`](core::fmt::Display), [`Deref`](core::ops::Deref) to the inner
/// primitive, `From<Wrapper>` for the primitive and comparison against a bare primitive.
///
/// When `checked: PATH` is given, `TryFrom<primitive>` is implemented by calling `PATH` which must
/// be a `fn(primitive) -> Result<Self, CalendarError>`. Wrappers without a checked constructor
/// are expected to provide their own `new`.
macro_rules! int_wrapper {
    (
        ident: $ident:ident,
        inner: $inner:ty,
    ) => {
        impl $ident {
            /// Return the owned primitive of this value.
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl core::ops::Deref for $ident {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$ident> for $inner {
            fn from(value: $ident) -> Self {
                value.0
            }
        }

        impl PartialEq<$inner> for $ident {
            fn eq(&self, other: &$inner) -> bool {
                self.0 == *other
            }
        }
    };
    (
        ident: $ident:ident,
        inner: $inner:ty,
        checked: $checked:path,
    ) => {
        int_wrapper!(
            ident: $ident,
            inner: $inner,
        );

        impl TryFrom<$inner> for $ident {
            type Error = $crate::CalendarError;

            fn try_from(value: $inner) -> Result<Self, Self::Error> {
                $checked(value)
            }
        }
    };
}
