// colour themes for the console

use crossterm::style::{Color, Stylize, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemeKind {
    /// pick dark or light from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
    /// no colours at all
    Plain,
}

impl ThemeKind {
    /// Settles `Auto` by asking the terminal how bright its background is.
    /// `NO_COLOR` wins over everything.
    pub fn resolve(self) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Plain;
        }

        match self {
            Self::Auto => match terminal_light::luma() {
                Ok(luma) if luma > 0.6 => Self::Light,
                Ok(_) => Self::Dark,
                Err(e) => {
                    tracing::debug!("couldn't read terminal background: {e}");
                    Self::Dark
                }
            },
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,
    pub banner: Color,
    pub listening: Color,
    pub prompt: Color,
    pub heard: Color,
    pub bot: Color,
    pub error: Color,
}

impl Theme {
    pub fn new(kind: ThemeKind) -> Self {
        match kind.resolve() {
            ThemeKind::Light => Self::light(),
            ThemeKind::Plain => Self::plain(),
            _ => Self::dark(),
        }
    }

    fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            banner: Color::Yellow,
            listening: Color::Green,
            prompt: Color::Cyan,
            heard: Color::Magenta,
            bot: Color::Blue,
            error: Color::Red,
        }
    }

    // the bright variants wash out on a white background
    fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            banner: Color::DarkYellow,
            listening: Color::DarkGreen,
            prompt: Color::DarkCyan,
            heard: Color::DarkMagenta,
            bot: Color::DarkBlue,
            error: Color::DarkRed,
        }
    }

    pub fn plain() -> Self {
        Self {
            kind: ThemeKind::Plain,
            ..Self::dark()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.kind == ThemeKind::Plain {
            text.to_string()
        } else {
            style(text).with(color).to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.kind == ThemeKind::Plain {
            text.to_string()
        } else {
            style(text).dim().to_string()
        }
    }
}
