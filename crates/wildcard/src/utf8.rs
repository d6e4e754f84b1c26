/// Returns the width in bytes of a UTF-8 encoded code point given its leading byte.
///
/// The result is unspecified for continuation bytes.
#[inline(always)]
pub(crate) fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0x80..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}
