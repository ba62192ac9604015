// crates/extract_labeled_block/src/lib.rs

use regex::Regex;

/// Builds the pattern for one labeled code block: a level 3 or 4 markdown
/// heading whose text is the backtick-quoted label, followed (after
/// whitespace) by a fenced block whose opening fence carries the requested
/// language tag. The body is matched non-greedily up to the next line
/// consisting solely of the closing fence, so a match never spans blocks.
fn labeled_block_regex(label: &str, language: Option<&str>) -> Regex {
    let fence_tag = match language {
        Some(tag) => regex::escape(tag),
        None => r"\w*".to_string(),
    };
    let pattern = format!(
        r"(?sm)^#{{3,4}}[ \t]+`{}`\s*\n```{}\n(.*?)^```[ \t]*$",
        regex::escape(label),
        fence_tag,
    );
    Regex::new(&pattern).expect("labeled block pattern is valid")
}

/// Returns the body of the first code block labeled `label`, scanning
/// top-to-bottom, or `None` if the document has no such block.
///
/// The returned body is byte-for-byte the text between the fence delimiter
/// lines, trailing newline included; no trimming is performed.
pub fn extract_labeled_block(doc: &str, label: &str, language: Option<&str>) -> Option<String> {
    labeled_block_regex(label, language)
        .captures(doc)
        .map(|caps| caps[1].to_string())
}

/// Returns the bodies of every code block labeled `label`, in document
/// order. Used when the same label recurs and the Nth occurrence belongs
/// to the Nth destination by positional convention.
pub fn extract_all_labeled_blocks(doc: &str, label: &str, language: Option<&str>) -> Vec<String> {
    labeled_block_regex(label, language)
        .captures_iter(doc)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Like [`extract_labeled_block`], but only considers the text following
/// the first occurrence of the literal `section_heading`. Used when a
/// label's true owner depends on enclosing section context rather than
/// document order.
pub fn extract_block_in_section(
    doc: &str,
    section_heading: &str,
    label: &str,
    language: Option<&str>,
) -> Option<String> {
    let start = doc.find(section_heading)?;
    let scoped = &doc[start + section_heading.len()..];
    extract_labeled_block(scoped, label, language)
}
