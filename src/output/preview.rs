#![forbid(unsafe_code)]

//! Colored terminal preview of a decorated text
//!
//! Each run is written with the terminal attributes its decorations map
//! to. Decorations with no terminal equivalent are ignored, images are
//! shown as `[img]`.

use crate::config::ColorOption;
use crate::decoration::{CharacterStyle, Decoration, ParagraphStyle};
use crate::text::{DecoratedText, Run};
use crate::types::{Color, TextStyle};
use std::io::{self, Write};
use termcolor::{Buffer, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Marker written in place of a run carrying an image
pub const IMAGE_MARKER: &str = "[img]";

/// Terminal preview formatter
pub struct PreviewFormatter {
    color: ColorOption,
}

impl PreviewFormatter {
    pub fn new(color: ColorOption) -> Self {
        Self { color }
    }

    /// Write `text` to `out`, one color spec per run.
    pub fn render(&self, text: &DecoratedText, out: &mut dyn WriteColor) -> io::Result<()> {
        for run in text.runs() {
            let spec = color_spec(&run);
            if spec.is_none() {
                write_run(&run, out)?;
                continue;
            }
            out.set_color(&spec)?;
            write_run(&run, out)?;
            out.reset()?;
        }
        Ok(())
    }

    /// Render to a string; `Auto` renders without escape codes.
    pub fn format(&self, text: &DecoratedText) -> String {
        let mut buffer = match self.color {
            ColorOption::Always => Buffer::ansi(),
            ColorOption::Auto | ColorOption::Never => Buffer::no_color(),
        };
        if let Err(e) = self.render(text, &mut buffer) {
            log::warn!("Failed to render preview: {}", e);
        }
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Print the preview to stdout
    pub fn write_to_stdout(&self, text: &DecoratedText) -> io::Result<()> {
        let choice = match self.color {
            ColorOption::Auto => ColorChoice::Auto,
            ColorOption::Always => ColorChoice::Always,
            ColorOption::Never => ColorChoice::Never,
        };
        let mut stdout = StandardStream::stdout(choice);
        self.render(text, &mut stdout)?;
        stdout.flush()
    }
}

impl Default for PreviewFormatter {
    fn default() -> Self {
        Self::new(ColorOption::Auto)
    }
}

fn write_run(run: &Run<'_>, out: &mut dyn WriteColor) -> io::Result<()> {
    let has_image = run.decorations.iter().any(|decoration| {
        matches!(
            decoration,
            Decoration::Character(CharacterStyle::Image(_))
                | Decoration::Paragraph(ParagraphStyle::Image(_))
        )
    });
    if has_image {
        out.write_all(IMAGE_MARKER.as_bytes())
    } else {
        out.write_all(run.text.as_bytes())
    }
}

fn rgb(color: Color) -> termcolor::Color {
    termcolor::Color::Rgb(color.red(), color.green(), color.blue())
}

fn apply_style(spec: &mut ColorSpec, style: TextStyle) {
    spec.set_bold(style.is_bold()).set_italic(style.is_italic());
}

// Later decorations override earlier ones.
fn color_spec(run: &Run<'_>) -> ColorSpec {
    let mut spec = ColorSpec::new();
    for decoration in &run.decorations {
        match decoration {
            Decoration::Character(style) => match style {
                CharacterStyle::Style { style } => apply_style(&mut spec, *style),
                CharacterStyle::TextAppearance { style, color, .. } => {
                    apply_style(&mut spec, *style);
                    if let Some(color) = color {
                        spec.set_fg(Some(rgb(*color)));
                    }
                }
                CharacterStyle::Foreground { color } => {
                    spec.set_fg(Some(rgb(*color)));
                }
                CharacterStyle::Background { color } => {
                    spec.set_bg(Some(rgb(*color)));
                }
                CharacterStyle::Underline | CharacterStyle::Url { .. } => {
                    spec.set_underline(true);
                }
                CharacterStyle::Strikethrough => {
                    spec.set_strikethrough(true);
                }
                CharacterStyle::Clickable(click) => {
                    if let Some(color) = click.color {
                        spec.set_fg(Some(rgb(color)));
                    }
                    if let Some(color) = click.background {
                        spec.set_bg(Some(rgb(color)));
                    }
                    if let Some(style) = click.style {
                        apply_style(&mut spec, style);
                    }
                    spec.set_underline(click.underline.unwrap_or(true));
                }
                _ => {}
            },
            Decoration::Paragraph(ParagraphStyle::LineBackground { color }) => {
                spec.set_bg(Some(rgb(*color)));
            }
            Decoration::Paragraph(_) => {}
        }
    }
    spec
}
