//! Integration tests for the chained builder

#[macro_use]
mod common;

use common::{TestResult, ranges, snippets};
use spanx::decoration::{CharacterStyle, ClickableSpec, ImageSource, ImageSpec, ParagraphStyle};
use spanx::types::{Alignment, Color, ConversionUnit, DisplayMetrics, DrawableSize, TextStyle};
use spanx::{Config, Decorate, Decoration, MatchRule, SpanBuilder};
use std::sync::{Arc, Mutex};

#[test]
fn test_text_only_round_trip() {
    let fragments = ["Hello", ", ", "wörld", "", "!"];
    let mut builder = SpanBuilder::new();
    for fragment in fragments {
        builder.text(fragment);
    }
    let text = builder.build();

    assert_eq!(text.as_str(), fragments.concat());
    assert_eq!(text.decorations_len(), 0);
}

#[test]
fn test_matching_places_decorations() {
    let text = SpanBuilder::new()
        .text("Call 555-1234 or 555-9876")
        .matching(MatchRule::regex(r"\d{3}-\d{4}").unwrap().at(1))
        .color(Color::BLUE)
        .underline()
        .build();

    assert_eq!(snippets(&text), vec!["555-9876", "555-9876"]);
}

#[test]
fn test_matching_replacement_then_style() {
    let text = SpanBuilder::new()
        .text("TODO: ship it")
        .matching(MatchRule::literal("TODO").replace_with("DONE"))
        .bold()
        .build();

    assert_eq!(text.as_str(), "DONE: ship it");
    assert_eq!(ranges(&text), vec![0..4]);
}

#[test]
fn test_paragraph_decorations_cover_fragment() {
    let text = SpanBuilder::new()
        .text("intro ")
        .text("quoted")
        .matching("quo")
        .quote(Color::GRAY)
        .alignment(Alignment::Center)
        .build();

    assert_eq!(ranges(&text), vec![6..12, 6..12]);
    let expected: Decoration = ParagraphStyle::Quote {
        color: Color::GRAY,
        stripe_width: 10,
        gap_width: 0,
    }
    .into();
    let first = text.decorations().next().map(|(_, d)| d.clone());
    assert_eq!(first, Some(expected));
}

#[test]
fn test_image_auto_placeholder() {
    let text = SpanBuilder::new()
        .text("before")
        .image(ImageSpec::resource(42))
        .text("after")
        .build();

    assert_eq!(text.as_str(), "before after");
    assert_eq!(ranges(&text), vec![6..7]);
}

#[test]
fn test_image_placeholder_takes_following_decorations() {
    let text = SpanBuilder::new()
        .image(ImageSpec::remote("https://example.com/a.gif").loop_count(3))
        .background(Color::YELLOW)
        .build();

    assert_eq!(text.as_str(), " ");
    let kinds: Vec<&str> = text.decorations().map(|(_, d)| d.kind()).collect();
    assert_eq!(kinds, vec!["image", "background"]);
}

#[test]
fn test_image_on_matches() {
    let text = SpanBuilder::new()
        .text("I :heart: Rust :heart:")
        .matching(MatchRule::literal(":heart:").replace_with("♥"))
        .image(ImageSpec::resource(7).size(DrawableSize::square(16)))
        .build();

    assert_eq!(text.as_str(), "I ♥ Rust ♥");
    assert_eq!(snippets(&text), vec!["♥", "♥"]);
}

#[test]
fn test_image_sized_uses_display_metrics() {
    let config = Config::with_display(DisplayMetrics::new(2.0, 2.0));
    let text = SpanBuilder::with_config(config)
        .image_sized(ImageSource::Resource(1), 10, ConversionUnit::Dp)
        .build();

    let (_, decoration) = assert_some!(text.decorations().next());
    match decoration.as_character() {
        Some(CharacterStyle::Image(spec)) => assert_eq!(spec.size, Some(DrawableSize::square(21))),
        other => panic!("expected image, got {:?}", other),
    }
}

#[test]
fn test_newline_goes_to_pending_or_output() {
    let text = SpanBuilder::new()
        .newline(1)
        .text("title")
        .newline(2)
        .underline()
        .build();

    assert_eq!(text.as_str(), "\ntitle\n\n");
    // The underline was applied after the newlines were appended.
    assert_eq!(ranges(&text), vec![1..8]);
}

#[test]
fn test_save_stops_decorations() {
    let text = SpanBuilder::new().text("kept").save().underline().build();
    assert_eq!(text.as_str(), "kept");
    assert_eq!(text.decorations_len(), 0);
}

#[test]
fn test_build_resets_builder() {
    let mut builder = SpanBuilder::new();
    builder.text("first").bold();
    let first = builder.build();
    builder.text("second");
    let second = builder.build();

    assert_eq!(first.as_str(), "first");
    assert_eq!(second.as_str(), "second");
    assert_eq!(second.decorations_len(), 0);
}

#[test]
fn test_color_strings_fall_back() {
    let text = SpanBuilder::new().text("x").color_str("#nothex").build();
    let (_, decoration) = assert_some!(text.decorations().next());
    assert_eq!(
        decoration.as_character(),
        Some(&CharacterStyle::Foreground { color: Color::RED })
    );
}

#[test]
fn test_strict_colors_skip_decoration() -> TestResult {
    let config = Config::parse("[colors]\nstrict = true\n")?;
    let text = SpanBuilder::with_config(config)
        .text("x")
        .color_str("#nothex")
        .background_str("#80FFFFFF")
        .build();

    let kinds: Vec<&str> = text.decorations().map(|(_, d)| d.kind()).collect();
    assert_eq!(kinds, vec!["background"]);
    Ok(())
}

#[test]
fn test_clickable_receives_matched_text() {
    let clicks = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&clicks);

    let text = SpanBuilder::new()
        .text("ping @alice and @bob")
        .matching(MatchRule::regex(r"@\w+").unwrap())
        .clickable_with(
            ClickableSpec::new("")
                .color(Color::BLUE)
                .style(TextStyle::Bold)
                .on_click(move |who| sink.lock().unwrap().push(who.to_string())),
        )
        .build();

    for (_, decoration) in text.decorations() {
        if let Some(CharacterStyle::Clickable(spec)) = decoration.as_character() {
            spec.click();
        }
    }
    assert_eq!(*clicks.lock().unwrap(), vec!["@alice", "@bob"]);
}
