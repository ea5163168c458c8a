//! # Token Estimation
//!
//! A heuristic sizing count, not a real tokenizer. Text is split into a
//! prose stream and a code stream (anything between triple-backtick fences),
//! both are fragmented on whitespace and punctuation, and the code count is
//! weighted up because symbol-dense text tokenizes more finely under real
//! subword tokenizers.

/// Characters that end a fragment wherever they appear.
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '{', '}', '[', ']', '<', '>', '/', '\\',
    '=', '+', '-',
];

/// Estimates the token count of `text`.
///
/// Fence-marker lines (trimmed content starting with ```) toggle the code
/// stream and are not themselves counted. The final figure is
/// `prose + ceil(1.2 * code)`; the 1.2 multiplier is a fixed calibration
/// constant.
pub fn estimate(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut prose = 0usize;
    let mut code = 0usize;
    let mut in_fence = false;

    for line in text.lines() {
        if line.trim().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }

        let fragments = fragment_count(line);
        if in_fence {
            code += fragments;
        } else {
            prose += fragments;
        }
    }

    prose + (code * 12).div_ceil(10)
}

fn fragment_count(line: &str) -> usize {
    line.split(|c: char| c.is_whitespace() || PUNCTUATION.contains(&c))
        .filter(|fragment| !fragment.is_empty())
        .count()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
