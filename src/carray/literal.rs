use crate::lut::BYTE_TO_HEX_LITERAL;

/// Render a byte as a C hex literal, `0x00` to `0xff`.
pub fn hex_literal(byte: u8) -> &'static str {
    BYTE_TO_HEX_LITERAL[byte as usize]
}

/// One literal per byte, in order.
pub fn hex_literals(data: &[u8]) -> impl Iterator<Item = &'static str> + Clone + '_ {
    data.iter().map(|&byte| hex_literal(byte))
}
