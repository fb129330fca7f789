// console output - everything the user sees on stdout

use crate::theme::Theme;
use std::io::{self, Write};

pub struct Output<W: Write> {
    out: W,
    theme: Theme,
}

impl Output<io::Stdout> {
    pub fn stdout(theme: Theme) -> Self {
        Self::new(io::stdout(), theme)
    }
}

impl<W: Write> Output<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let title = self
            .theme
            .paint("=== Curious Toddler Bot (SafeGuard Edition) Started ===", self.theme.banner);
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "Ask me a 'why' question! (e.g., 'Why is the sky blue?')")
    }

    // prompt stays on the same line as the user's typing
    pub fn listening(&mut self) -> io::Result<()> {
        let line = self
            .theme
            .paint("Toddler Bot is listening... (Type 'exit' to quit)", self.theme.listening);
        let prompt = self.theme.paint("User: ", self.theme.prompt);
        write!(self.out, "\n{line}\n{prompt}")?;
        self.out.flush()
    }

    pub fn status(&mut self, message: &str) -> io::Result<()> {
        let line = self.theme.dim(&format!("* {message} *"));
        writeln!(self.out, "{line}")
    }

    pub fn heard(&mut self, cleaned: &str) -> io::Result<()> {
        let line = self
            .theme
            .paint(&format!("(I heard: '{cleaned}')"), self.theme.heard);
        writeln!(self.out, "{line}")
    }

    pub fn blocked(&mut self) -> io::Result<()> {
        self.bot(
            "I think we should ask a grown-up about that! \
             Let's talk about something happy, like puppies or rainbows!",
        )
    }

    pub fn no_results(&mut self) -> io::Result<()> {
        let line = self.theme.paint(
            "I couldn't find anything about that online. Maybe try asking differently?",
            self.theme.error,
        );
        writeln!(self.out, "{line}")
    }

    pub fn answer(&mut self, answer: &str) -> io::Result<()> {
        self.bot(answer.trim())
    }

    pub fn goodbye(&mut self) -> io::Result<()> {
        let line = self.theme.paint("Bye bye! Stay curious!", self.theme.banner);
        writeln!(self.out, "{line}")
    }

    pub fn end_of_input(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.goodbye()
    }

    pub fn interrupted(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nSee you later!")?;
        self.out.flush()
    }

    fn bot(&mut self, text: &str) -> io::Result<()> {
        let name = self.theme.paint("Bot:", self.theme.bot);
        writeln!(self.out, "\n{name} {text}\n")
    }
}
