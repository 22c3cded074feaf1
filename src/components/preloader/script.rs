/// Pause before the first line appears.
pub const START_DELAY_MS: u32 = 200;
/// Pause between showing a prompt and typing its command.
pub const TYPE_START_MS: u32 = 100;
/// Pause after the last line before the text scatters.
pub const SCATTER_DELAY_MS: u32 = 1100;
pub const CURSOR_BLINK_MS: u32 = 530;
pub const FADE_OUT_MS: u32 = 550;

const PROMPT_END: &str = "> ";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineKind {
    Instant,
    Typed { char_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptLine {
    pub text: &'static str,
    pub kind: LineKind,
    pub delay_ms: u32,
}

const fn instant(text: &'static str, delay_ms: u32) -> ScriptLine {
    ScriptLine { text, kind: LineKind::Instant, delay_ms }
}

const fn typed(text: &'static str, char_ms: u32) -> ScriptLine {
    ScriptLine { text, kind: LineKind::Typed { char_ms }, delay_ms: 0 }
}

pub const SCRIPT: [ScriptLine; 10] = [
    instant("CoreProfile [Version 1.0.3]", 0),
    instant("(c) Кирсанов Егор Дмитриевич (Kirsanov Egor Dmitrievich). Все права защищены.", 0),
    instant("", 0),
    typed("C:\\browser\\websites> open CoreProfile", 70),
    typed("C:\\browser\\websites\\CoreProfile> login ******* password *****************", 50),
    instant("", 280),
    instant("Идентификация...", 280),
    instant("Проверка окружения...", 280),
    instant("Доступ подтвержден.", 280),
    instant("Сайт загружен.", 280),
];

/// Splits a command line into the prompt (kept whole) and the typed part.
pub fn split_prompt(text: &str) -> (&str, &str) {
    match text.find(PROMPT_END) {
        Some(i) => text.split_at(i + PROMPT_END.len()),
        None => ("", text),
    }
}

/// A line as currently shown on the terminal.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TerminalLine {
    pub text: String,
    pub typing: bool,
}

impl TerminalLine {
    pub fn done(text: &str) -> Self {
        Self { text: text.to_string(), typing: false }
    }
}

/// Every visible state of a typed line, from bare prompt to full command.
pub fn typing_frames(text: &str) -> Vec<TerminalLine> {
    let (prompt, command) = split_prompt(text);
    let total = command.chars().count();
    let mut frames = vec![TerminalLine { text: prompt.to_string(), typing: true }];
    let mut shown = prompt.to_string();
    for (i, ch) in command.chars().enumerate() {
        shown.push(ch);
        frames.push(TerminalLine { text: shown.clone(), typing: i + 1 < total });
    }
    if let Some(last) = frames.last_mut() {
        last.typing = false;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prompt() {
        assert_eq!(split_prompt("C:\\browser\\websites> open CoreProfile"), ("C:\\browser\\websites> ", "open CoreProfile"));
        assert_eq!(split_prompt("no prompt here"), ("", "no prompt here"));
    }

    #[test]
    fn test_typing_frames_grow_one_char_at_a_time() {
        let frames = typing_frames("C:\\> dir");
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], TerminalLine { text: "C:\\> ".to_string(), typing: true });
        assert_eq!(frames[1].text, "C:\\> d");
        assert!(frames[2].typing);
        assert_eq!(frames[3], TerminalLine::done("C:\\> dir"));
    }

    #[test]
    fn test_typing_frames_handle_cyrillic() {
        let frames = typing_frames("> да");
        assert_eq!(frames.last().map(|l| l.text.as_str()), Some("> да"));
        assert_eq!(frames.len(), 3);
    }

    #[test]
    fn test_script_shape() {
        let typed: Vec<_> = SCRIPT.iter().filter(|l| matches!(l.kind, LineKind::Typed { .. })).collect();
        assert_eq!(typed.len(), 2);
        assert!(typed.iter().all(|l| l.text.contains(PROMPT_END)));
        assert_eq!(SCRIPT.last().map(|l| l.text), Some("Сайт загружен."));
    }
}
