// crates/unescape_newlines/src/lib.rs

/// Converts literal "\n" and "\t" escape sequences in the input string to
/// actual newline and tab characters.
///
/// Replacement text passed inline on a command line arrives with its
/// newlines escaped; this restores them. Content read from a file is not
/// run through this and is taken byte-for-byte.
pub fn unescape_newlines(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n') => {
                    chars.next();
                    output.push('\n');
                }
                Some('t') => {
                    chars.next();
                    output.push('\t');
                }
                Some('\\') => {
                    chars.next();
                    output.push('\\');
                }
                _ => output.push(c),
            }
        } else {
            output.push(c);
        }
    }
    output
}
