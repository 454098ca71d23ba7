use regex::Regex;
use std::sync::LazyLock;

/// Reference-style footnote markers such as `[12]`.
static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9]+\]").expect("static regex compile"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex compile"));

/// Terminal punctuation, the whitespace after it, and the first character of
/// the next sentence. Only the end of group 1 is used as the boundary, so the
/// following character is never consumed into the previous sentence.
static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.?!…»”])\s+[A-ZÁÉÍÓÚÑÜ¿¡0-9]").expect("static regex compile")
});

/// Replaces every citation marker with a single space.
#[must_use]
pub fn strip_citations(text: &str) -> String {
    CITATION_RE.replace_all(text, " ").into_owned()
}

/// Strips citation markers, collapses whitespace runs and trims the result.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let stripped = CITATION_RE.replace_all(text, " ");
    WHITESPACE_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Splits text into sentences in document order.
///
/// A boundary sits right after `.`, `?`, `!`, `…`, `»` or `”` when that mark is
/// followed by whitespace and then an uppercase letter (accented vowels, `Ñ`
/// and `Ü` included), a digit, `¿` or `¡`. Pieces are trimmed and empty pieces
/// dropped.
///
/// ```
/// use resumia::utils::sentences::segment;
///
/// let sentences = segment("Hola a todos. ¿Qué tal? Bien, gracias [3].");
/// assert_eq!(sentences, vec!["Hola a todos.", "¿Qué tal?", "Bien, gracias ."]);
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;

    for caps in BOUNDARY_RE.captures_iter(&cleaned) {
        let Some(terminal) = caps.get(1) else {
            continue;
        };
        push_piece(&mut sentences, &cleaned[start..terminal.end()]);
        start = terminal.end();
    }
    push_piece(&mut sentences, &cleaned[start..]);

    sentences
}

/// Joins sentences with a single space, the inverse used by every tier.
#[must_use]
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    sentences
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_piece(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
