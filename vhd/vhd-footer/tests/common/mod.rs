#![allow(dead_code)]

/// Dynamic disk footer, `data_offset` 512.
pub const DYNAMIC: &str = "
    63 6F 6E 65 63 74 69 78 00 00 00 02 00 01 00 00    conectix........
    00 00 00 00 00 00 02 00 27 37 14 7E 77 69 6E 20    ........'7.~win.
    00 0A 00 00 57 69 32 6B 00 00 00 00 00 50 00 00    ....Wi2k.....P..
    00 00 00 00 00 50 00 00 00 96 04 11 00 00 00 03    .....P..........
    FF FF F0 E5 45 43 48 08 24 B6 AC 4A B7 2A 43 45    ..peECH.$6,J7*CE
    97 E3 E1 39 00 00 00 00 00 00 00 00 00 00 00 00    .ca9............
";

/// Dynamic disk footer of a GPT/FAT image.
pub const DYNAMIC_GPT: &str = "
    63 6f 6e 65 63 74 69 78 00 00 00 02 00 01 00 00    conectix000.0.00
    00 00 00 00 00 00 02 00 27 37 15 62 77 69 6e 20    000000.0'7.bwin
    00 0a 00 00 57 69 32 6b 00 00 00 00 00 50 00 00    0_00Wi2k00000P00
    00 00 00 00 00 50 00 00 00 96 04 11 00 00 00 03    00000P000...000.
    ff ff f0 32 ba 7b 3f 32 25 ed 02 4b 86 c4 6b ba    ...2.{?2%..K..k.
    d7 21 cd 3a 00 00 00 00 00 00 00 00 00 00 00 00    .!.:000000000000
    00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00    0000000000000000
";

/// Fixed disk footer, `data_offset` all ones.
pub const FIXED: &str = "
    63 6f 6e 65 63 74 69 78 00 00 00 02 00 01 00 00   conectix000.0.00
    ff ff ff ff ff ff ff ff 27 37 14 8e 77 69 6e 20   ........'7..win
    00 0a 00 00 57 69 32 6b 00 00 00 00 00 50 00 00   0_00Wi2k00000P00
    00 00 00 00 00 50 00 00 00 96 04 11 00 00 00 02   00000P000...000.
    ff ff e8 29 71 e3 56 12 02 fd 43 49 9d 46 b8 53   ...)q.V...CI.F.S
    f3 19 71 aa 00 00 00 00 00 00 00 00 00 00 00 00   ..q.000000000000
    00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00   0000000000000000
";

/// Fixed disk footer of a GPT image.
pub const FIXED_GPT: &str = "
    63 6f 6e 65 63 74 69 78 00 00 00 02 00 01 00 00   conectix000.0.00
    ff ff ff ff ff ff ff ff 27 37 14 b1 77 69 6e 20   ........'7..win
    00 0a 00 00 57 69 32 6b 00 00 00 00 00 50 00 00   0_00Wi2k00000P00
    00 00 00 00 00 50 00 00 00 96 04 11 00 00 00 02   00000P000...000.
    ff ff e7 8b 50 77 1c 32 f5 eb f4 4f 99 1c 51 c2   ....Pw.2...O..Q.
    06 7b 96 c0 00 00 00 00 00 00 00 00 00 00 00 00   .{..000000000000
    00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00   0000000000000000
";

pub const ALL: [&str; 4] = [FIXED, FIXED_GPT, DYNAMIC, DYNAMIC_GPT];

/// Parse the hex columns of a canonical hex dump (at most 16 bytes per
/// line, ASCII column ignored) and zero-pad the result to `pad_to` bytes.
pub fn parse_hexdump(text: &str, pad_to: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pad_to);
    for line in text.lines() {
        let hex = line
            .split_whitespace()
            .take(16)
            .take_while(|tok| tok.len() == 2)
            .map_while(|tok| u8::from_str_radix(tok, 16).ok());
        bytes.extend(hex);
    }
    if bytes.len() < pad_to {
        bytes.resize(pad_to, 0);
    }
    bytes
}

/// A fixture parsed and padded to a full footer.
pub fn footer_bytes(text: &str) -> Vec<u8> {
    let bytes = parse_hexdump(text, 512);
    assert_eq!(bytes.len(), 512, "fixture must fit in one footer");
    bytes
}
