//! Caption text handling.
//!
//! The free-form words after the meme name are joined by spaces and
//! upper-cased. A literal `\\` becomes a line break and `//` splits the text
//! into segments, of which the first two are drawn as top and bottom text.

const LINE_BREAK: &str = "\\\\";
const SEPARATOR: &str = "//";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caption {
    /// No text at all; the picture is rendered without annotations.
    Empty,
    /// Only one segment was given.
    Single(String),
    /// Separate top and bottom text.
    TopBottom { top: String, bottom: String },
}

impl Caption {
    pub fn parse<S: AsRef<str>>(words: &[S]) -> Caption {
        let joined = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::from_text(&joined)
    }

    pub fn from_text(text: &str) -> Caption {
        let text = text.to_uppercase().replace(LINE_BREAK, "\n");

        let mut parts: Vec<&str> = text.split(SEPARATOR).collect();
        // Empty trailing parts carry no text; whitespace-only ones still count.
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }

        let mut parts = parts.into_iter().map(str::trim);
        match (parts.next(), parts.next()) {
            (None, _) => Caption::Empty,
            (Some(top), None) => Self::single(top),
            (Some(top), Some(bottom)) => {
                if parts.next().is_some() {
                    log::warn!("Caption has more than two segments, extra text is ignored");
                }
                Caption::TopBottom {
                    top: top.to_string(),
                    bottom: bottom.to_string(),
                }
            }
        }
    }

    fn single(text: &str) -> Caption {
        if text.is_empty() {
            Caption::Empty
        } else {
            Caption::Single(text.to_string())
        }
    }

    pub fn segments(&self) -> Vec<&str> {
        match self {
            Caption::Empty => Vec::new(),
            Caption::Single(text) => vec![text.as_str()],
            Caption::TopBottom { top, bottom } => vec![top.as_str(), bottom.as_str()],
        }
    }
}
