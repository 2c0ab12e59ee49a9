/// Default token separator.
pub const DEFAULT_SEPARATOR: char = ' ';

/// Split text into tokens on a single literal separator.
///
/// No trimming or collapsing: leading, trailing and repeated separators all
/// produce empty tokens, and the empty string yields a single empty token.
pub fn split_into_words(text: &str, separator: char) -> Vec<String> {
    text.split(separator).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_split() {
        let t = split_into_words("fluffy cat fluffy tail", DEFAULT_SEPARATOR);
        assert_eq!(t, vec!["fluffy", "cat", "fluffy", "tail"]);
    }

    #[test]
    fn keeps_empty_tokens() {
        let t = split_into_words(" a  b ", DEFAULT_SEPARATOR);
        assert_eq!(t, vec!["", "a", "", "b", ""]);
    }

    #[test]
    fn empty_text_is_one_empty_token() {
        assert_eq!(split_into_words("", DEFAULT_SEPARATOR), vec![""]);
    }
}
