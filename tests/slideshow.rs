//! Presentation sequencing and resizing

use illuscribe::{FileDecoder, Frame, MonospaceMetrics, RenderConfig, Slideshow, Theme};
use pretty_assertions::assert_eq;

const DECK: &str = r#"
template "Header"
box "Top", stack-vertical, align-center
end

slide "First"
uses "Header"
define "Top"
text title "Opening"
end
end

template "Unused"
box "X", stack-horizontal, align-left
end

slide "Second"
box "L", stack-horizontal, align-left
box "R", stack-horizontal, align-left
define "L"
text normal "several words in a column"
end
end

slide "Third"
box "Empty", stack-horizontal, align-left
end
"#;

fn show(width: f64, height: f64) -> Slideshow {
    let list = illuscribe::parse(DECK, &FileDecoder::new()).unwrap();
    let config = RenderConfig::new().with_viewport(width, height);
    Slideshow::with_metrics(list, config, Box::new(MonospaceMetrics::default())).unwrap()
}

fn left_column(show: &Slideshow) -> Vec<String> {
    let second = show.slides().iter().find(|s| s.name == "Second").unwrap();
    second
        .boxes()
        .next()
        .unwrap()
        .texts()
        .map(|t| t.content.clone())
        .collect()
}

#[test]
fn navigation_skips_templates_both_ways() {
    let mut show = show(854.0, 480.0);
    assert_eq!(show.presentation().len(), 3);

    let mut titles = vec![show.title()];
    while show.next() {
        titles.push(show.title());
    }
    assert_eq!(
        titles,
        vec!["Opening", "several words in a column", "Third", "End of Presentation."]
    );
    assert_eq!(show.current(), Frame::End);
    assert!(!show.next());

    let mut back = Vec::new();
    while show.previous() {
        back.push(show.title());
    }
    assert_eq!(back, vec!["Third", "several words in a column", "Opening"]);
}

#[test]
fn resize_wraps_from_the_pristine_tree() {
    let mut show = show(854.0, 480.0);
    assert_eq!(left_column(&show), vec!["several words in a column"]);

    // A 120px wide column only fits a couple of words per line
    assert!(show.resize(240.0, 480.0).unwrap());
    let narrow = left_column(&show);
    assert!(narrow.len() > 1);
    assert_eq!(narrow.join(" "), "several words in a column");

    assert!(show.resize(854.0, 480.0).unwrap());
    assert_eq!(left_column(&show), vec!["several words in a column"]);
    assert_eq!(show.pristine(), &illuscribe::parse(DECK, &FileDecoder::new()).unwrap());
}

#[test]
fn resize_to_the_same_size_is_a_no_op() {
    let mut show = show(854.0, 480.0);
    let before = show.slides().clone();
    assert!(!show.resize(854.0, 480.0).unwrap());
    assert_eq!(show.slides(), &before);
}

#[test]
fn resize_keeps_the_current_slide() {
    let mut show = show(854.0, 480.0);
    show.next();
    show.resize(640.0, 360.0).unwrap();
    assert_eq!(show.title(), "several words in a column");
    assert_eq!(show.viewport().width, 640.0);
    assert!(show.render_svg().contains(r#"width="640""#));
}

#[test]
fn failed_resize_leaves_the_show_usable() {
    let mut show = show(854.0, 480.0);
    // At 80px wide single words no longer fit their boxes
    assert!(show.resize(80.0, 480.0).is_err());
    assert_eq!(show.viewport().width, 854.0);
    assert_eq!(left_column(&show), vec!["several words in a column"]);
}

#[test]
fn theme_spacing_reaches_the_layout() {
    let theme = Theme::from_str("[layout]\npadding = 0.05\n").unwrap();
    let config = RenderConfig::new().with_theme(theme);
    assert_eq!(config.layout.padding, 0.05);

    let show = Slideshow::from_source(DECK, &FileDecoder::new(), config).unwrap();
    let third = show.slides().iter().find(|s| s.name == "Third").unwrap();
    assert_eq!(third.boxes().next().unwrap().width, 1.0);
}

#[test]
fn render_all_lists_every_frame() {
    let rendered = show(854.0, 480.0).render_all();
    let names: Vec<_> = rendered.slides.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
    assert!(rendered.slides[0].svg.contains("Opening"));
    assert_eq!(rendered.end.title, "End of Presentation.");
    assert!(rendered.end.svg.contains("End of presentation."));
}
