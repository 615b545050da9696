//! Identifier transformations for generated constant and container names.
//!
//! All functions here are pure and total: they accept any string,
//! including the empty string, and never fail.

/// Extract the file name of `path` without its final extension.
///
/// A `.` at position zero does not start an extension, so dotfiles such
/// as `.profile` are returned unchanged.
///
/// ```
/// use propkeys_codegen::basename;
///
/// assert_eq!(basename("a/b/foo.txt"), "foo");
/// assert_eq!(basename("foo.bar.txt"), "foo.bar");
/// assert_eq!(basename(".profile"), ".profile");
/// ```
pub fn basename(path: &str) -> String {
    let filename = path.rsplit('/').next().unwrap_or(path);
    match filename.rfind('.') {
        Some(pos) if pos >= 1 => filename[..pos].to_string(),
        _ => filename.to_string(),
    }
}

/// Split a string into words.
///
/// Runs of non-alphanumeric characters separate words, and a boundary is
/// inserted between a lowercase letter and an immediately following
/// uppercase letter so that camelCase input splits cleanly. Empty
/// segments produced by consecutive separators are dropped.
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if prev_lower && c.is_ascii_uppercase() && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
            prev_lower = c.is_ascii_lowercase();
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    c.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
            }
        })
        .collect()
}

/// Convert a string to UPPER_SNAKE_CASE (e.g., "helloWorld" -> "HELLO_WORLD")
pub fn to_upper_snake(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Derive a constant name from a property key.
///
/// This is a direct character substitution, not a word split: every `.`
/// and `-` becomes `_` and the whole result is uppercased, so digit runs
/// survive verbatim (e.g. "abc.def.17" -> "ABC_DEF_17"). The key text
/// itself is never altered in the generated output; only the constant
/// name is derived.
pub fn key_to_identifier(key: &str) -> String {
    key.replace(['.', '-'], "_").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(basename("foo.txt"), "foo");
        assert_eq!(basename("foo.bar.txt"), "foo.bar");
        assert_eq!(basename(".foo"), ".foo");
        assert_eq!(basename("foo"), "foo");
        assert_eq!(basename("foo."), "foo");
        assert_eq!(basename("a/b/foo.txt"), "foo");
        assert_eq!(basename("a/b/.foo"), ".foo");
        assert_eq!(basename(""), "");
        assert_eq!(basename("."), ".");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("helloWorld"), vec!["hello", "World"]);
        assert_eq!(split_words("hello__world"), vec!["hello", "world"]);
        assert_eq!(split_words("hello.world-foo"), vec!["hello", "world", "foo"]);
        assert_eq!(split_words("abc17def"), vec!["abc17def"]);
        assert_eq!(split_words("HELLO"), vec!["HELLO"]);
        assert!(split_words("").is_empty());
        assert!(split_words("-._ ").is_empty());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("h"), "H");
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("Hello"), "Hello");
        assert_eq!(to_pascal_case("HELLO"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("Hello_World"), "HelloWorld");
        assert_eq!(to_pascal_case("HELLO_WORLD"), "HelloWorld");
        assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello.world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello__world"), "HelloWorld");
        assert_eq!(to_pascal_case("helloWorld"), "HelloWorld");
        assert_eq!(to_pascal_case("HelloWorld"), "HelloWorld");
        assert_eq!(to_pascal_case("-"), "");
        assert_eq!(to_pascal_case("_"), "");
        assert_eq!(to_pascal_case("."), "");
    }

    #[test]
    fn test_to_upper_snake() {
        assert_eq!(to_upper_snake(""), "");
        assert_eq!(to_upper_snake("h"), "H");
        assert_eq!(to_upper_snake("hello"), "HELLO");
        assert_eq!(to_upper_snake("Hello"), "HELLO");
        assert_eq!(to_upper_snake("HELLO"), "HELLO");
        assert_eq!(to_upper_snake("helloWorld"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("HelloWorld"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("hello_world"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("Hello_World"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("hello-world"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("hello.world"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("hello__world"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("HELLO_WORLD"), "HELLO_WORLD");
        assert_eq!(to_upper_snake("-"), "");
        assert_eq!(to_upper_snake("_"), "");
    }

    #[test]
    fn test_key_to_identifier() {
        assert_eq!(key_to_identifier("abc.def.17"), "ABC_DEF_17");
        assert_eq!(key_to_identifier("uvw-xyz"), "UVW_XYZ");
        assert_eq!(key_to_identifier("key1"), "KEY1");
        assert_eq!(key_to_identifier("a.b-c_d"), "A_B_C_D");
        assert_eq!(key_to_identifier(""), "");
    }
}
