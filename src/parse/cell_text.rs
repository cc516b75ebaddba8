use scraper::ElementRef;

/// Unicode line boundaries: LF, CR, VT, FF, the file/group/record separators, NEL, LS and PS.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// First line of the element's visible text.
///
/// Every text node is trimmed and empty ones are dropped before the lines are
/// joined, so leading whitespace, `<br>`s and empty wrappers never produce a
/// blank first line. Returns `None` when the element has no visible text.
pub fn first_line<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    element
        .text()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .and_then(|text| text.split(is_line_break).next())
}
