/// Attribute token the scanner looks for, matched without regard to case.
const SRC_TOKEN: &str = "src=\"";

/// Scan one line for its first `src="..."` occurrence and capture the
/// quoted value, preserving the line's original case.
///
/// The match is found on an ASCII-lowercased copy, so `SRC="..."` counts;
/// lowercasing ASCII never shifts byte offsets, which keeps the slice
/// indices valid on the original line. A line whose quote never closes
/// yields nothing, as does a line without the token.
fn source_name(line: &str) -> Option<&str> {
    let lowered = line.to_ascii_lowercase();
    let start = lowered.find(SRC_TOKEN)? + SRC_TOKEN.len();
    let end = lowered[start..].find('"')? + start;
    Some(&line[start..end])
}

/// Extract every referenced resource address from a fetched page.
///
/// The page bytes are decoded lossily as UTF-8 and split on `\n`; each
/// line contributes at most its first `src="` capture, in line order.
/// This is a textual scan, not an HTML parse: attributes spanning lines
/// are missed, and a second `src=` on the same line is ignored.
pub fn source_urls(data: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(data);
    text.split('\n')
        .filter_map(source_name)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
