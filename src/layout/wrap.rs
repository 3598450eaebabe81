//! Greedy word-wrapping of the text runs in a box

use crate::document::{SlideBox, SlideElement, Text};

use super::{FontMetrics, LayoutConfig, LayoutError};

/// Set text sizes and split every text run that is wider than the box.
///
/// The box width must already be final. Overflowing words move to the
/// following text run, or to a new run inserted after the current one, and
/// the current index is checked again until it fits.
pub fn wrap_box(
    b: &mut SlideBox,
    metrics: &dyn FontMetrics,
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    let vw = config.viewport.width;
    let available = b.width - config.padding;
    let width_of = |s: &str, text: &Text| metrics.string_width(s, text.font_size) / vw;

    let mut i = 0;
    while i < b.elements.len() {
        let SlideElement::Text(text) = &mut b.elements[i] else {
            i += 1;
            continue;
        };
        text.size = metrics.pixel_size(text.font_size) / vw;
        if width_of(text.content.as_str(), text) <= available {
            i += 1;
            continue;
        }

        let words: Vec<&str> = text.content.split(' ').filter(|w| !w.is_empty()).collect();
        if words.len() < 2 {
            // Surrounding spaces alone can push a run over; drop them and recheck
            let word = words.first().copied().unwrap_or_default();
            if width_of(word, text) > available {
                return Err(LayoutError::word_too_wide(
                    word,
                    b.name.clone(),
                    text.line,
                    width_of(word, text),
                    available,
                ));
            }
            text.content = word.to_string();
            continue;
        }
        if let Some(word) = words.iter().copied().find(|w| width_of(w, text) > available) {
            return Err(LayoutError::word_too_wide(
                word,
                b.name.clone(),
                text.line,
                width_of(word, text),
                available,
            ));
        }

        let mut taken = 1;
        while taken < words.len() && width_of(words[..=taken].join(" ").as_str(), text) <= available {
            taken += 1;
        }
        let head = words[..taken].join(" ");
        let rest = words[taken..].join(" ");
        let (font_size, line) = (text.font_size, text.line);
        text.content = head;
        if rest.is_empty() {
            continue;
        }

        match b.elements.get_mut(i + 1) {
            Some(SlideElement::Text(next)) => {
                next.content = format!("{} {}", rest, next.content);
            }
            _ => {
                let mut tail = Text::new(rest, font_size, line);
                tail.size = metrics.pixel_size(font_size) / vw;
                b.elements.insert(i + 1, SlideElement::Text(tail));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FontSize, StackType, TextAlign};
    use crate::layout::MonospaceMetrics;
    use pretty_assertions::assert_eq;

    // 200px wide: a normal glyph is 9px, padding is 5px
    fn config() -> LayoutConfig {
        LayoutConfig::new().with_viewport(200.0, 100.0)
    }

    fn boxed(width: f64, texts: &[&str]) -> SlideBox {
        let mut b = SlideBox::new("B", StackType::Horizontal, TextAlign::Left, 1);
        b.width = width;
        for (n, t) in texts.iter().enumerate() {
            b.elements
                .push(SlideElement::Text(Text::new(*t, FontSize::Normal, n + 2)));
        }
        b
    }

    fn contents(b: &SlideBox) -> Vec<&str> {
        b.texts().map(|t| t.content.as_str()).collect()
    }

    #[test]
    fn test_short_text_untouched() {
        let mut b = boxed(1.0, &["fits easily"]);
        wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap();
        assert_eq!(contents(&b), vec!["fits easily"]);
        assert_eq!(b.texts().next().unwrap().size, 18.0 / 200.0);
    }

    #[test]
    fn test_split_inserts_new_run() {
        // 95px available: ten glyphs per line
        let mut b = boxed(0.5, &["alpha beta gamma delta"]);
        wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap();
        assert_eq!(contents(&b), vec!["alpha beta", "gamma", "delta"]);
        assert!(b.texts().all(|t| t.line == 2 && t.font_size == FontSize::Normal));
    }

    #[test]
    fn test_remainder_prepended_to_next_text() {
        let mut b = boxed(0.5, &["alpha beta gamma", "end"]);
        wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap();
        assert_eq!(contents(&b), vec!["alpha beta", "gamma end"]);
    }

    #[test]
    fn test_every_line_fits() {
        let metrics = MonospaceMetrics::default();
        let mut b = boxed(0.5, &["the quick brown fox jumps over the lazy dog again and again"]);
        wrap_box(&mut b, &metrics, &config()).unwrap();
        for t in b.texts() {
            assert!(metrics.string_width(&t.content, t.font_size) / 200.0 <= 0.475);
        }
        assert_eq!(
            contents(&b).join(" "),
            "the quick brown fox jumps over the lazy dog again and again"
        );
    }

    #[test]
    fn test_overwide_word_is_an_error() {
        let mut b = boxed(0.5, &["a supercalifragilistic word"]);
        let err = wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap_err();
        let LayoutError::WordTooWide { word, box_name, line, .. } = err;
        assert_eq!(word, "supercalifragilistic");
        assert_eq!(box_name, "B");
        assert_eq!(line, 2);
    }

    #[test]
    fn test_single_overwide_word_is_an_error() {
        let mut b = boxed(0.5, &["supercalifragilistic"]);
        assert!(wrap_box(&mut b, &MonospaceMetrics::default(), &config()).is_err());
    }

    #[test]
    fn test_padding_spaces_around_a_fitting_word_are_dropped() {
        // "hello" is 45px; the spaces push the run past 95px
        let mut b = boxed(0.5, &["hello      ", "  world  "]);
        wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap();
        assert_eq!(contents(&b), vec!["hello", "  world  "]);
    }

    #[test]
    fn test_blank_run_wider_than_box_becomes_empty() {
        let blank = " ".repeat(20);
        let mut b = boxed(0.5, &[blank.as_str()]);
        wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap();
        assert_eq!(contents(&b), vec![""]);
    }

    #[test]
    fn test_overwide_word_with_padding_names_the_word() {
        let mut b = boxed(0.5, &["  supercalifragilistic  "]);
        let err = wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap_err();
        let LayoutError::WordTooWide { word, .. } = err;
        assert_eq!(word, "supercalifragilistic");
    }

    #[test]
    fn test_rewrap_is_idempotent() {
        let mut b = boxed(0.5, &["alpha beta gamma delta"]);
        wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap();
        let once = b.clone();
        wrap_box(&mut b, &MonospaceMetrics::default(), &config()).unwrap();
        assert_eq!(b, once);
    }
}
