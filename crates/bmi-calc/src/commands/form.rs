//! Form command: interactive height/weight entry on stdin.
//!
//! Each input line edits a field (or clears both); after every edit the whole
//! pipeline runs again and the result is rendered, or nothing when absent.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use bmi_calc_core::config::Config;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use super::{AssessmentOutput, resolve_precision, write_assessment};
use crate::form::{FORM_USAGE, Field, Form, FormCommand};

/// Arguments for the `form` subcommand.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Decimal places for the displayed BMI
    #[arg(long)]
    pub precision: Option<usize>,
}

/// How each render is written.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Decimal places for the BMI.
    pub precision: usize,
    /// Emit one JSON object per render instead of text.
    pub json: bool,
    /// Terminal stream the output writer is attached to, for color support.
    pub stream: Stream,
}

/// Run an interactive form session on stdin/stdout.
#[instrument(name = "cmd_form", skip_all)]
pub fn cmd_form(args: FormArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let options = SessionOptions {
        precision: resolve_precision(args.precision, config),
        json: global_json,
        stream: Stream::Stdout,
    };
    debug!(precision = options.precision, json = options.json, "executing form command");

    let stdin = std::io::stdin();
    if stdin.is_terminal() && !options.json {
        eprintln!("{FORM_USAGE}");
    }
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let form = run_session(stdin.lock(), stdout.lock(), stderr.lock(), options)?;
    debug!(?form, "form session ended");
    Ok(())
}

/// Drive a form session from `input` until `quit` or end of input.
///
/// Returns the final form state.
pub fn run_session<R, W, E>(
    input: R,
    mut out: W,
    mut err: E,
    options: SessionOptions,
) -> anyhow::Result<Form>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut form = Form::new();

    for line in input.lines() {
        let line = line.context("failed to read form input")?;
        let Some(command) = FormCommand::parse(&line) else {
            continue;
        };
        debug!(?command, "form command");

        match command {
            FormCommand::Set(field, text) => form.set(field, text),
            FormCommand::Clear => form.clear(),
            FormCommand::Show => {}
            FormCommand::Help => {
                writeln!(err, "{FORM_USAGE}").context("failed to write usage")?;
                continue;
            }
            FormCommand::Quit => break,
            FormCommand::Unknown(word) => {
                writeln!(err, "unknown command: {word} ({FORM_USAGE})")
                    .context("failed to write usage")?;
                continue;
            }
        }

        render(&mut out, &form, options)?;
    }

    out.flush().context("failed to flush output")?;
    Ok(form)
}

/// Render the current fields and, when present, the result.
fn render<W: Write>(out: &mut W, form: &Form, options: SessionOptions) -> anyhow::Result<()> {
    let output = AssessmentOutput::evaluate(
        form.text(Field::Height),
        form.text(Field::Weight),
        options.precision,
    );

    if options.json {
        let line = serde_json::to_string(&output).context("failed to serialize result")?;
        writeln!(out, "{line}").context("failed to write result")?;
        return Ok(());
    }

    writeln!(
        out,
        "{}  {}",
        field_summary(form, Field::Height, options.stream),
        field_summary(form, Field::Weight, options.stream)
    )
    .context("failed to write form state")?;
    write_assessment(
        out,
        options.stream,
        output.assessment().as_ref(),
        options.precision,
    )
        .context("failed to write result")
}

/// `height: 170 cm`, or `height: (empty)` for an empty field.
fn field_summary(form: &Form, field: Field, stream: Stream) -> String {
    let text = form.text(field);
    if text.is_empty() {
        format!(
            "{}: {}",
            field.name(),
            "(empty)".if_supports_color(stream, |t| t.dimmed())
        )
    } else {
        format!("{}: {} {}", field.name(), text, field.unit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: SessionOptions = SessionOptions {
        precision: 2,
        json: false,
        stream: Stream::Stdout,
    };

    fn run(input: &str, options: SessionOptions) -> (Form, String, String) {
        owo_colors::set_override(false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let form = run_session(input.as_bytes(), &mut out, &mut err, options).unwrap();
        (
            form,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn renders_after_every_edit() {
        let (_, out, _) = run("height 170\nweight 65\n", TEXT);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "height: 170 cm  weight: (empty)");
        assert_eq!(lines[1], "height: 170 cm  weight: 65 kg");
        assert_eq!(lines[2], "BMI: 22.49");
        assert_eq!(lines[3], "Normal");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn clear_removes_result() {
        let (form, out, _) = run("h 100\nw 40\nclear\n", TEXT);
        assert_eq!(form, Form::new());
        assert!(out.contains("Obese Class III"));
        assert!(out.ends_with("height: (empty)  weight: (empty)\n"));
    }

    #[test]
    fn invalid_text_shows_no_result() {
        let (_, out, _) = run("height abc\nweight 60\n", TEXT);
        assert!(!out.contains("BMI"));
    }

    #[test]
    fn quit_stops_reading() {
        let (form, _, _) = run("height 150\nquit\nweight 40\n", TEXT);
        assert_eq!(form.text(Field::Height), "150");
        assert_eq!(form.text(Field::Weight), "");
    }

    #[test]
    fn unknown_command_goes_to_stderr() {
        let (_, out, err) = run("frobnicate\n", TEXT);
        assert!(out.is_empty());
        assert!(err.contains("unknown command: frobnicate"));
    }

    #[test]
    fn json_renders_one_object_per_edit() {
        let options = SessionOptions {
            precision: 1,
            json: true,
            stream: Stream::Stdout,
        };
        let (_, out, _) = run("height 150\nweight 40\n", options);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0]["bmi"].is_null());
        assert_eq!(lines[1]["display"], "17.8");
        assert_eq!(lines[1]["category"], "Mild Thinness");
    }

    #[test]
    fn blank_lines_do_not_render() {
        let (_, out, _) = run("\n\n", TEXT);
        assert!(out.is_empty());
    }
}
