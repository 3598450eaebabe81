//! SVG output of complete decks

use std::path::{Path, PathBuf};

use illuscribe::{render, render_with_config, FileDecoder, RenderConfig, SvgConfig};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("illuscribe-svg-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    img.save(dir.join(name)).unwrap();
}

#[test]
fn every_text_run_is_drawn() {
    let source = r#"
template "Frame"
box "Title", stack-vertical, align-center
end

slide "One"
uses "Frame"
box "Left", stack-horizontal, align-left
box "Right", stack-horizontal, align-right
define "Title"
text huge "Big"
end
define "Left"
text normal "alpha"
text small "beta"
end
define "Right"
text normal "gamma & delta"
end
end
"#;
    let show = render(source, &FileDecoder::new()).unwrap();
    assert_eq!(show.slides.len(), 1);
    let svg = &show.slides[0].svg;
    for text in ["Big", "alpha", "beta", "gamma &amp; delta"] {
        assert!(svg.contains(&format!(">{}</text>", text)), "missing {}", text);
    }
    assert_eq!(svg.matches("<text").count(), 4);
    assert!(!svg.contains("ill-debug"));
}

#[test]
fn images_are_embedded_from_the_deck_directory() {
    let dir = temp_dir("embed");
    write_png(&dir, "dot.png", 3, 2);

    let source = "slide \"Pic\"\nbox \"B\", stack-vertical, align-center\ndefine \"B\"\nimage \"dot.png\"\nend\nend\n";
    let images = FileDecoder::new().with_base_dir(&dir);
    let show = render(source, &images).unwrap();
    let svg = &show.slides[0].svg;
    assert!(svg.contains(r#"href="data:image/png;base64,"#));
    assert!(svg.contains(r#"viewBox="0 0 3 2""#));
    assert_eq!(show.slides[0].title, "Pic");

    let linked = render_with_config(
        source,
        &images,
        RenderConfig::new().with_svg(SvgConfig::new().with_embed_images(false)),
    )
    .unwrap();
    assert!(linked.slides[0].svg.contains(r#"href="dot.png""#));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn debug_mode_outlines_boxes() {
    let source = "slide \"S\"\nbox \"A\", stack-horizontal, align-left\nbox \"B\", stack-horizontal, align-left\nend\n";
    let config = RenderConfig::new()
        .with_viewport(400.0, 200.0)
        .with_debug(true);
    let show = render_with_config(source, &FileDecoder::new(), config).unwrap();
    let svg = &show.slides[0].svg;
    assert_eq!(svg.matches("ill-debug").count(), 2);
    assert!(svg.contains(r#"x="200" y="0" width="200" height="200""#));
}

#[test]
fn end_frame_is_centered_on_black() {
    let config = RenderConfig::new().with_viewport(1000.0, 500.0);
    let show = render_with_config("", &FileDecoder::new(), config).unwrap();
    assert!(show.slides.is_empty());
    let svg = &show.end.svg;
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(r#"x="500""#));
    assert!(svg.contains(r#"font-size="30""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
}
