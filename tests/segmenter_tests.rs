use resumia::utils::sentences::{clean_text, join_sentences, segment};

const TERMINALS: [char; 6] = ['.', '?', '!', '…', '»', '”'];

/// One representative per class of character that may open a sentence.
const OPENERS: [&str; 12] = [
    "Luego", "Álvaro", "Éste", "Ídolo", "Óscar", "Úrsula", "Ñandú", "Üter", "7", "¿Sí", "¡Ya", "Zeta",
];

#[test]
fn splits_after_every_terminal_before_every_opener() {
    for terminal in TERMINALS {
        for opener in OPENERS {
            let text = format!("Primera parte{terminal} {opener} sigue aquí");
            let sentences = segment(&text);
            assert_eq!(
                sentences,
                vec![
                    format!("Primera parte{terminal}"),
                    format!("{opener} sigue aquí")
                ],
                "terminal {terminal:?} before {opener:?}"
            );
        }
    }
}

#[test]
fn never_splits_before_lowercase() {
    for terminal in TERMINALS {
        for opener in ["luego", "álvaro", "ñandú", "etc"] {
            let text = format!("Primera parte{terminal} {opener} sigue aquí");
            assert_eq!(segment(&text).len(), 1, "terminal {terminal:?} before {opener:?}");
        }
    }
}

#[test]
fn requires_whitespace_after_the_terminal() {
    assert_eq!(segment("Versión 2.0 es estable.Nada más."), vec!["Versión 2.0 es estable.Nada más."]);
    assert_eq!(segment("Pesa 3.5 kilos. Mide 2 metros."), vec!["Pesa 3.5 kilos.", "Mide 2 metros."]);
}

#[test]
fn other_punctuation_is_not_terminal() {
    assert_eq!(segment("Uno; Dos: Tres, Cuatro"), vec!["Uno; Dos: Tres, Cuatro"]);
}

#[test]
fn quoted_speech_splits_after_closing_marks() {
    let text = "Dijo «ya voy». Después calló. “¿Vienes?” Nadie respondió…  Silencio.";
    // an opening quote does not start a new sentence on its own
    assert_eq!(
        segment(text),
        vec![
            "Dijo «ya voy».",
            "Después calló. “¿Vienes?”",
            "Nadie respondió…",
            "Silencio."
        ]
    );
}

#[test]
fn preserves_document_order_and_drops_nothing() {
    let text = "Uno es el primero. Dos es el segundo. Tres es el tercero. Cuatro cierra.";
    let sentences = segment(text);
    assert_eq!(sentences.len(), 4);
    assert_eq!(join_sentences(&sentences), clean_text(text));
}

#[test]
fn resegmenting_joined_sentences_is_idempotent() {
    let corpus = [
        "El agua hierve a 100 grados [2]. ¿Siempre?   No: depende de la presión!\n\n\
         En la montaña hierve antes… 3 alpinistas lo comprobaron. «Increíble» dijo uno.",
        "Sin puntuación final",
        "A. B. C.",
        "",
    ];

    for text in corpus {
        let first = segment(text);
        let second = segment(&join_sentences(&first));
        assert_eq!(first, second, "input: {text:?}");
    }
}

#[test]
fn citations_are_removed_even_without_surrounding_spaces() {
    assert_eq!(
        segment("Texto[1][22]pegado. Otro[3] más."),
        vec!["Texto pegado.", "Otro más."]
    );
}
