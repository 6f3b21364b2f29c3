//! Word-by-word reveal markup
//!
//! Splits a heading's inner HTML into one `<span class="word">` per word so
//! CSS can fade words in with a per-word delay taken from `--word-index`.
//! Words touching an `<em>` tag become highlighted words with the tag removed.

pub const WORD_REVEAL_ATTRIBUTE: &str = "data-word-reveal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub index: usize,
    pub text: String,
    pub highlight: bool,
}

impl Word {
    pub fn to_html(&self) -> String {
        let class = if self.highlight { "word highlight" } else { "word" };
        format!(
            r#"<span class="{class}" style="--word-index: {}">{}</span>"#,
            self.index, self.text
        )
    }
}

pub fn split_words(inner_html: &str) -> Vec<Word> {
    inner_html
        .split_whitespace()
        .enumerate()
        .map(|(index, raw)| {
            let highlight = raw.contains("<em>") || raw.contains("</em>");
            let text = if highlight {
                raw.replace("<em>", "").replace("</em>", "")
            } else {
                raw.to_string()
            };
            Word {
                index,
                text,
                highlight,
            }
        })
        .collect()
}

/// Replacement inner HTML for a word-reveal element
pub fn render_words(inner_html: &str) -> String {
    split_words(inner_html)
        .iter()
        .map(Word::to_html)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_collapses_whitespace() {
        let words = split_words("  Study\n   smarter\tnot harder ");
        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Study", "smarter", "not", "harder"]);
        assert_eq!(words[3].index, 3);
    }

    #[test]
    fn test_em_words_are_highlighted() {
        let words = split_words("Learn <em>twice</em> as fast");
        assert!(!words[0].highlight);
        assert_eq!(
            words[1],
            Word {
                index: 1,
                text: "twice".into(),
                highlight: true
            }
        );
        assert!(!words[2].highlight);
    }

    #[test]
    fn test_multi_word_emphasis_highlights_edges() {
        let words = split_words("<em>remember more</em> today");
        assert!(words[0].highlight);
        assert_eq!(words[0].text, "remember");
        assert!(words[1].highlight);
        assert_eq!(words[1].text, "more");
        assert!(!words[2].highlight);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render_words("Ace <em>it</em>"),
            r#"<span class="word" style="--word-index: 0">Ace</span> <span class="word highlight" style="--word-index: 1">it</span>"#
        );
        assert_eq!(render_words("   "), "");
    }
}
