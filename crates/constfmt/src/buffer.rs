//! Immutable fixed-length character buffers.

use core::fmt;

use crate::view::{StrView, bytes_eq};

/// An immutable character buffer that owns exactly `N` bytes.
///
/// A `FixedStr` is a value type: it is created by literal construction or
/// by [`concat`](FixedStr::concat) and never mutated in place. Because the
/// length is part of the type, the size of every intermediate result in the
/// rendering pipeline is derivable from other compile-known values, which
/// is what lets the whole pipeline run during constant evaluation.
#[derive(Clone, Copy)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedStr<N> {
    /// Copies `text` into an owned buffer.
    ///
    /// # Panics
    ///
    /// Panics if `text.len() != N`. In a const context this is a compile
    /// error.
    #[must_use]
    pub const fn from_str(text: &str) -> Self {
        Self::from_view(StrView::new(text))
    }

    /// Copies the bytes of `view` into an owned buffer.
    ///
    /// # Panics
    ///
    /// Panics if `view.len() != N`.
    #[must_use]
    pub const fn from_view(view: StrView<'_>) -> Self {
        assert!(
            view.len() == N,
            "view length must equal the buffer length"
        );
        let mut bytes = [0u8; N];
        let mut i = 0;
        while i < N {
            bytes[i] = view.at(i);
            i += 1;
        }
        Self { bytes }
    }

    /// Wraps bytes already laid out by the renderer.
    pub(crate) const fn from_raw(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// The buffer length. Always `N`.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub const fn at(&self, index: usize) -> u8 {
        self.bytes[index]
    }

    /// The owned bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A view borrowing this buffer.
    ///
    /// Like any byte-slice view, a single trailing NUL is excluded from
    /// the view's reported length.
    #[must_use]
    pub const fn as_view(&self) -> StrView<'_> {
        StrView::from_bytes(&self.bytes)
    }

    /// Concatenates two buffers into a new buffer of both lengths.
    ///
    /// This is the sole buffer-combining operation. `OUT` must equal
    /// `N + M`: the result size is derived from the operand *types*, never
    /// from their contents, so chained concatenation composes into one
    /// final compile-known size. (Stable Rust cannot spell `N + M` in the
    /// return type, so the sum is passed explicitly and checked.)
    ///
    /// ```
    /// use constfmt::FixedStr;
    ///
    /// const HELLO: FixedStr<5> = FixedStr::from_str("Hello");
    /// const WORLD: FixedStr<7> = FixedStr::from_str(", world");
    /// const BOTH: FixedStr<12> = HELLO.concat::<7, 12>(&WORLD);
    /// assert!(BOTH.const_eq("Hello, world"));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `OUT != N + M`.
    #[must_use]
    pub const fn concat<const M: usize, const OUT: usize>(
        &self,
        other: &FixedStr<M>,
    ) -> FixedStr<OUT> {
        assert!(
            OUT == N + M,
            "concatenated length must be the sum of the operand lengths"
        );
        let mut bytes = [0u8; OUT];
        let mut i = 0;
        while i < N {
            bytes[i] = self.bytes[i];
            i += 1;
        }
        let mut j = 0;
        while j < M {
            bytes[N + j] = other.bytes[j];
            j += 1;
        }
        FixedStr { bytes }
    }

    /// The buffer bytes with a trailing NUL appended, for C-string
    /// consumers. `OUT` must equal `N + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `OUT != N + 1`.
    #[must_use]
    pub const fn with_nul<const OUT: usize>(&self) -> [u8; OUT] {
        assert!(
            OUT == N + 1,
            "NUL-terminated length must be one past the buffer length"
        );
        let mut bytes = [0u8; OUT];
        let mut i = 0;
        while i < N {
            bytes[i] = self.bytes[i];
            i += 1;
        }
        bytes
    }

    /// Exact byte-wise comparison against `text`, usable in const
    /// contexts.
    #[must_use]
    pub const fn const_eq(&self, text: &str) -> bool {
        bytes_eq(&self.bytes, text.as_bytes())
    }

    /// The buffer content as UTF-8 text.
    ///
    /// # Panics
    ///
    /// Panics if the buffer holds invalid UTF-8, which is only possible
    /// when a view constructed over non-UTF-8 bytes was rendered into it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes).expect("buffer holds invalid UTF-8")
    }
}

impl<const N: usize, const M: usize> PartialEq<FixedStr<M>> for FixedStr<N> {
    fn eq(&self, other: &FixedStr<M>) -> bool {
        bytes_eq(&self.bytes, &other.bytes)
    }
}

impl<const N: usize> Eq for FixedStr<N> {}

impl<const N: usize> PartialEq<&str> for FixedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        bytes_eq(&self.bytes, other.as_bytes())
    }
}

impl<const N: usize> PartialEq<str> for FixedStr<N> {
    fn eq(&self, other: &str) -> bool {
        bytes_eq(&self.bytes, other.as_bytes())
    }
}

impl<const N: usize> PartialEq<StrView<'_>> for FixedStr<N> {
    fn eq(&self, other: &StrView<'_>) -> bool {
        bytes_eq(&self.bytes, other.as_bytes())
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(bstr::BStr::new(&self.bytes), f)
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(bstr::BStr::new(&self.bytes), f)
    }
}
