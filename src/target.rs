//! Content-type classification for validator selection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which validator a document goes to. Chosen once per invocation.
pub enum Target {
    Html,
    Css,
    Unsupported,
}

/// Classify a grammar scope name such as `text.html.basic` or `source.css`.
///
/// The scope is split on `.` and matched token-wise, so `text.html.php`
/// is HTML but a grammar named `html-in-php` is not. When both families
/// appear (`source.css.embedded.html`), HTML wins.
pub fn classify(grammar: &str) -> Target {
    let mut css = false;
    for tok in grammar.split('.').map(str::trim) {
        if tok.eq_ignore_ascii_case("html") {
            return Target::Html;
        }
        if tok.eq_ignore_ascii_case("css") {
            css = true;
        }
    }
    if css {
        Target::Css
    } else {
        Target::Unsupported
    }
}

/// Grammar scope guessed from a file extension.
pub fn grammar_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" | "xhtml" => "text.html.basic",
        "php" => "text.html.php",
        "css" => "source.css",
        "scss" => "source.css.scss",
        "less" => "source.css.less",
        _ => "text.plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_scopes() {
        assert_eq!(classify("text.html.basic"), Target::Html);
        assert_eq!(classify("text.html.php"), Target::Html);
        assert_eq!(classify("source.css"), Target::Css);
        assert_eq!(classify("source.css.scss"), Target::Css);
        assert_eq!(classify("source.js"), Target::Unsupported);
        assert_eq!(classify(""), Target::Unsupported);
    }

    #[test]
    fn test_classify_is_token_exact() {
        assert_eq!(classify("html-in-php"), Target::Unsupported);
        assert_eq!(classify("source.postcss"), Target::Unsupported);
    }

    #[test]
    fn test_classify_html_wins_over_css() {
        assert_eq!(classify("source.css.embedded.html"), Target::Html);
    }

    #[test]
    fn test_grammar_for_extension() {
        assert_eq!(grammar_for_extension("HTM"), "text.html.basic");
        assert_eq!(grammar_for_extension("css"), "source.css");
        assert_eq!(classify(grammar_for_extension("md")), Target::Unsupported);
    }
}
