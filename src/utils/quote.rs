/// Quote a single word for display as part of a POSIX shell command line
pub(crate) fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:=@%+,".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Join a program and its arguments into a copy-pasteable command line
pub(crate) fn shell_join<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut line = shell_quote(program);
    for arg in args {
        line.push(' ');
        line.push_str(&shell_quote(arg.as_ref()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_are_left_alone() {
        assert_eq!(
            shell_quote("kbase/relation_engine_api:0.0.4"),
            "kbase/relation_engine_api:0.0.4"
        );
        assert_eq!(
            shell_quote("BUILD_DATE=2026-02-06T10:00:00Z"),
            "BUILD_DATE=2026-02-06T10:00:00Z"
        );
        assert_eq!(shell_quote("."), ".");
    }

    #[test]
    fn words_with_spaces_are_single_quoted() {
        assert_eq!(shell_quote("BRANCH=my branch"), "'BRANCH=my branch'");
    }

    #[test]
    fn embedded_single_quote_is_escaped() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn empty_word_is_quoted() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn join_quotes_each_word() {
        assert_eq!(
            shell_join("docker", &["build", "-t", "a b", "."]),
            "docker build -t 'a b' ."
        );
    }
}
