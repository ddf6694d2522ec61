use indexmap::IndexSet;

/// Scans help text for long-form flag tokens (`--name`).
///
/// A token is two literal dashes, an ASCII letter, then any run of ASCII
/// letters, digits, underscores, or hyphens, so `--output` and
/// `--long-name` match while single-dash short flags never do. The scan is
/// a plain substring sweep over the whole text, usage lines and examples
/// included, with no awareness of option-listing sections. Duplicates keep
/// their first-seen position only.
pub fn parse_flags(text: &str) -> IndexSet<String> {
    let bytes = text.as_bytes();
    let mut flags = IndexSet::new();
    let mut pos = 0;
    while let Some(found) = memchr::memmem::find(&bytes[pos..], b"--") {
        let start = pos + found;
        let body = start + 2;
        match bytes.get(body) {
            Some(b) if b.is_ascii_alphabetic() => {
                let mut end = body + 1;
                while end < bytes.len() && is_name_byte(bytes[end]) {
                    end += 1;
                }
                // Token boundaries sit on ASCII bytes, so slicing the str
                // here cannot split a code point.
                flags.insert(text[start..end].to_string());
                pos = end;
            }
            // Resume one byte later, not two: the tail of a dash run like
            // `---foo` still holds a match.
            _ => pos = start + 1,
        }
    }
    flags
}

/// Commands-section scanner state: between a `...commands:` header line and
/// the next blank line, or anywhere else.
enum Section {
    Outside,
    Inside,
}

/// Collects subcommand names from the commands section(s) of help text, in
/// appearance order, without deduplication.
///
/// A header is any line whose trimmed, lowercased form ends with
/// `commands:` ("Available Commands:", "COMMANDS:", ...). The header check
/// runs first on every line, so a header met while a section is already
/// open re-opens it instead of being read as an entry. Inside a section, a
/// blank line closes it; an entry line needs at least two leading
/// whitespace characters, a name starting with an ASCII letter, and one
/// whitespace character after the name (the description separator). Lines
/// that fit neither shape are skipped without closing the section.
pub fn parse_subcommands(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut state = Section::Outside;
    // split('\n') rather than lines(): a trailing '\r' must stay on the
    // line, where it can satisfy the whitespace-after-name rule.
    for line in text.split('\n') {
        if is_section_header(line) {
            state = Section::Inside;
            continue;
        }
        match state {
            Section::Outside => {}
            Section::Inside => {
                if line.trim().is_empty() {
                    state = Section::Outside;
                } else if let Some(name) = entry_name(line) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}

fn is_section_header(line: &str) -> bool {
    line.trim().to_lowercase().ends_with("commands:")
}

fn entry_name(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut start = 0;
    while start < bytes.len() && is_space_byte(bytes[start]) {
        start += 1;
    }
    if start < 2 || start >= bytes.len() || !bytes[start].is_ascii_alphabetic() {
        return None;
    }
    let mut end = start + 1;
    while end < bytes.len() && is_name_byte(bytes[end]) {
        end += 1;
    }
    // The description separator is mandatory; a name that runs to the end
    // of the line is not an entry.
    if end >= bytes.len() || !is_space_byte(bytes[end]) {
        return None;
    }
    Some(&line[start..end])
}

const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

const fn is_space_byte(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}
