//! Text-field state for the interactive form.
//!
//! The form owns the raw text of both fields. Every edit is followed by a
//! fresh call into the core pipeline; there is no cached result to keep in
//! sync, so clearing the fields needs no extra re-validation step.

use bmi_calc_core::{Assessment, Measurements, assess};

/// One of the two editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Height in centimeters.
    Height,
    /// Weight in kilograms.
    Weight,
}

impl Field {
    /// Field name as typed in the session.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }

    /// Unit the field is entered in.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Height => "cm",
            Self::Weight => "kg",
        }
    }
}

/// Raw text of the height and weight fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    height: String,
    weight: String,
}

impl Form {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text of one field.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Height => self.height = text,
            Field::Weight => self.weight = text,
        }
    }

    /// Reset both fields to empty text.
    pub fn clear(&mut self) {
        self.height.clear();
        self.weight.clear();
    }

    /// Current text of a field.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Height => &self.height,
            Field::Weight => &self.weight,
        }
    }

    /// Parsed view of both fields.
    pub fn measurements(&self) -> Measurements {
        Measurements::from_text(&self.height, &self.weight)
    }

    /// Run the pipeline over the current text.
    pub fn evaluate(&self) -> Option<Assessment> {
        assess(&self.height, &self.weight)
    }
}

/// A single line of input in the form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Replace a field's text (possibly with empty text).
    Set(Field, String),
    /// Reset both fields.
    Clear,
    /// Re-render the current state without editing.
    Show,
    /// List the available commands.
    Help,
    /// End the session.
    Quit,
    /// Anything unrecognized; carries the command word.
    Unknown(String),
}

impl FormCommand {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// The first word selects the command; for `height`/`weight` the rest of
    /// the line is the field text. Only ASCII spacing and control characters
    /// are stripped from its ends, matching what the number parser ignores, so
    /// other spacing reaches the parser and leaves the field invalid.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_matches(|c: char| c <= ' ')),
            None => (line.trim_end(), ""),
        };
        if word.is_empty() {
            return None;
        }

        let command = match word.to_ascii_lowercase().as_str() {
            "height" | "h" => Self::Set(Field::Height, rest.to_string()),
            "weight" | "w" => Self::Set(Field::Weight, rest.to_string()),
            "clear" | "reset" => Self::Clear,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(word.to_string()),
        };
        Some(command)
    }
}

/// Usage summary printed for `help` and unknown commands.
pub const FORM_USAGE: &str = "commands: height <cm>, weight <kg>, clear, show, help, quit";
