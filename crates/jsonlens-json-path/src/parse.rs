//! Path string parsing and construction.
//!
//! The grammar is deliberately restricted: an optional leading `$`, then any
//! number of `.identifier` or `[...]` segments, where the bracket content is a
//! bare integer, a bare key, or a single/double-quoted key. Malformed tails
//! terminate parsing silently; callers receive the segments parsed so far.

/// Returns true when `key` is a bare identifier (`[A-Za-z_$][A-Za-z0-9_$]*`)
/// and can appear after a dot without quoting.
pub fn is_simple_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Returns true when `segment` is all ASCII digits (an array index).
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn identifier_len(input: &str) -> usize {
    let mut chars = input.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return 0,
    }
    for (i, c) in chars {
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return i;
        }
    }
    input.len()
}

/// Splits a path string into its segments.
///
/// The empty vector denotes the root itself.
pub fn parse_path(path: &str) -> Vec<String> {
    let mut rest = path.strip_prefix('$').unwrap_or(path);
    let mut segments = Vec::new();

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix('.') {
            let len = identifier_len(tail);
            if len == 0 {
                break;
            }
            segments.push(tail[..len].to_string());
            rest = &tail[len..];
        } else if let Some(tail) = rest.strip_prefix('[') {
            let Some(end) = tail.find(']') else { break };
            let mut key = &tail[..end];
            if key.len() >= 2
                && ((key.starts_with('"') && key.ends_with('"'))
                    || (key.starts_with('\'') && key.ends_with('\'')))
            {
                key = &key[1..key.len() - 1];
            }
            segments.push(key.to_string());
            rest = &tail[end + 1..];
        } else {
            break;
        }
    }

    segments
}

/// Rebuilds a path string from segments.
///
/// All-digit segments render as `[n]`, bare identifiers as `.name`, and
/// everything else is double-quoted inside brackets. `build_path` of
/// `parse_path` output round-trips up to re-quoting.
pub fn build_path(segments: &[String]) -> String {
    let mut path = String::from("$");
    for seg in segments {
        if is_index_segment(seg) {
            path.push('[');
            path.push_str(seg);
            path.push(']');
        } else if is_simple_key(seg) {
            path.push('.');
            path.push_str(seg);
        } else {
            path.push_str("[\"");
            path.push_str(seg);
            path.push_str("\"]");
        }
    }
    path
}
