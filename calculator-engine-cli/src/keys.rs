use calculator_engine::ExpressionSession;

/// A single key press on the calculator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Evaluate,
    Clear,
    Backspace,
    ToggleSign,
    History,
    Quit,
}

impl Key {
    /// Applies an editing key to the session. Other keys are handled by the caller.
    pub fn edit(self, session: &mut ExpressionSession) {
        match self {
            Key::Character(character) => session.input(character),
            Key::Clear => session.clear(),
            Key::Backspace => session.backspace(),
            Key::ToggleSign => session.toggle_sign(),
            Key::Evaluate | Key::History | Key::Quit => {}
        }
    }
}

/// Reads the keys of a line. Words are either key names or runs of characters,
/// so `12+3 =` and `1 2 + 3 =` press the same keys.
pub fn parse_keys(line: &str) -> Vec<Key> {
    line.split_whitespace().flat_map(parse_word).collect()
}

fn parse_word(word: &str) -> Vec<Key> {
    match word {
        "c" | "C" => vec![Key::Clear],
        "b" | "⌫" => vec![Key::Backspace],
        "n" | "±" => vec![Key::ToggleSign],
        "h" => vec![Key::History],
        "q" => vec![Key::Quit],
        _ => word.chars().map(parse_character).collect(),
    }
}

/// Keyboard operators are shown with their display glyphs.
fn parse_character(character: char) -> Key {
    match character {
        '*' => Key::Character('×'),
        '/' => Key::Character('÷'),
        '=' => Key::Evaluate,
        other => Key::Character(other),
    }
}
