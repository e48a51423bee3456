use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

const THEME: &str = "Solarized (dark)";

pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Terminal-escaped rendering of `code`. Falls back to the plain text if
    /// the language or theme is unknown or highlighting fails.
    pub fn highlight(&self, code: &str, lang: &str) -> String {
        let Some(theme) = self.theme_set.themes.get(THEME) else {
            return code.to_string();
        };
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut output = String::new();

        for line in LinesWithEndings::from(code) {
            let ranges: Vec<(Style, &str)> =
                match highlighter.highlight_line(line, &self.syntax_set) {
                    Ok(ranges) => ranges,
                    Err(_) => return code.to_string(),
                };
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        // Reset colors so the prompt is not tinted.
        output.push_str("\x1b[0m");

        output
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
