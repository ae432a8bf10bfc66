//! Tag widths.

/// An unsigned integer width able to hold a container's tag.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum TagWidth {
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
}

impl TagWidth {
    /// Size of the width in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
            Self::U64 => 8,
        }
    }
}

/// Returns the smallest width that can hold every tag in `0..=max_tag`.
///
/// A container with `n` variants uses the tags `0..=n`.
///
/// ```
/// use voe::algebra::{TagWidth, minimal_tag_width};
///
/// assert_eq!(minimal_tag_width(3), TagWidth::U8);
/// assert_eq!(minimal_tag_width(256), TagWidth::U16);
/// ```
#[inline]
pub const fn minimal_tag_width(max_tag: u64) -> TagWidth {
    if max_tag <= u8::MAX as u64 {
        TagWidth::U8
    } else if max_tag <= u16::MAX as u64 {
        TagWidth::U16
    } else if max_tag <= u32::MAX as u64 {
        TagWidth::U32
    } else {
        TagWidth::U64
    }
}
