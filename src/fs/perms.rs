//! Permission bit formatting and parsing

/// The nine permission bits in display order: owner, group, other,
/// each read/write/execute.
const BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Render the nine permission bits of a mode as a fixed 9-character
/// `rwxrwxrwx` string, `-` for each unset bit. Special bits (setuid,
/// setgid, sticky) do not affect the output.
pub fn format_mode(mode: u32) -> String {
    BITS.iter()
        .map(|&(bit, ch)| if mode & bit != 0 { ch } else { '-' })
        .collect()
}

/// Parse a numeric mode argument as octal (`"644"` -> `0o644`).
/// Rejects non-octal input and values beyond the permission + special
/// bits range (7777).
pub fn parse_mode(s: &str) -> Option<u32> {
    let mode = u32::from_str_radix(s, 8).ok()?;
    (mode <= 0o7777).then_some(mode)
}
