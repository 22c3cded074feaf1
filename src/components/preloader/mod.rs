mod script;
mod terminal;

pub use terminal::TerminalPreloader;
