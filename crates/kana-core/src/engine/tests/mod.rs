
pub(super) fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
