//! Name lookup for `uses` and `define`, and template instantiation

use crate::document::{Slide, SlideBox, SlideElement, SlideList};
use crate::error::LogicError;

/// Child indices leading from a slide to one of its boxes, through any
/// nested slides
pub type BoxPath = Vec<usize>;

/// First top-level slide or template with exactly this name
pub fn find_slide<'a>(list: &'a SlideList, name: &str) -> Option<&'a Slide> {
    list.iter().find(|slide| slide.name == name)
}

/// Deep copy of a slide subtree, made visible so it renders inside its host
pub fn instantiate(template: &Slide) -> Slide {
    let mut copy = template.clone();
    copy.visible = true;
    copy
}

/// Resolve `uses "<name>"` against the slides parsed so far
pub fn resolve_uses(list: &SlideList, name: &str) -> Result<Slide, LogicError> {
    find_slide(list, name)
        .map(instantiate)
        .ok_or_else(|| LogicError::UnknownTemplate {
            name: name.to_string(),
        })
}

/// Locate the box a `define` statement refers to.
///
/// The search is depth-first in document order and descends into nested
/// slides. The first element carrying the name wins, so a nested slide of
/// that name shadows later boxes.
pub fn find_box(slide: &Slide, name: &str) -> Result<BoxPath, LogicError> {
    if slide.name == name {
        return Err(LogicError::SelfReference {
            name: name.to_string(),
        });
    }
    let mut path = Vec::new();
    match search(slide, name, &mut path) {
        Some(Found::Box) => Ok(path),
        Some(Found::Slide) => Err(LogicError::NotABox {
            name: name.to_string(),
        }),
        None => Err(LogicError::UndefinedElement {
            name: name.to_string(),
        }),
    }
}

enum Found {
    Box,
    Slide,
}

fn search(slide: &Slide, name: &str, path: &mut BoxPath) -> Option<Found> {
    for (index, element) in slide.elements.iter().enumerate() {
        path.push(index);
        match element {
            SlideElement::Box(b) if b.name == name => return Some(Found::Box),
            SlideElement::Slide(nested) if nested.name == name => return Some(Found::Slide),
            SlideElement::Slide(nested) => {
                if let Some(found) = search(nested, name, path) {
                    return Some(found);
                }
            }
            _ => {}
        }
        path.pop();
    }
    None
}

/// Follow a path produced by [`find_box`]
pub fn box_at_mut<'a>(slide: &'a mut Slide, path: &[usize]) -> Option<&'a mut SlideBox> {
    let (last, rest) = path.split_last()?;
    let mut current = slide;
    for &index in rest {
        current = match current.elements.get_mut(index)? {
            SlideElement::Slide(nested) => nested,
            _ => return None,
        };
    }
    match current.elements.get_mut(*last)? {
        SlideElement::Box(b) => Some(b),
        _ => None,
    }
}
