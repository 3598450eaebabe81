//! Template lookup and instantiation
//!
//! A template is a slide that is never shown on its own. `uses "<name>"`
//! splices a deep copy of any earlier slide or template into the slide being
//! built, and `define "<name>"` focuses a box of the current slide, including
//! boxes that arrived through such a copy.
//!
//! # Example
//!
//! ```text
//! template "Titled"
//! box "Title", stack-vertical, align-center
//! box "Body", stack-vertical, align-left
//! end
//!
//! slide "Intro"
//! uses "Titled"
//! define "Title"
//! text title "Welcome"
//! end
//! end
//! ```

mod resolver;

pub use resolver::{box_at_mut, find_box, find_slide, instantiate, resolve_uses, BoxPath};
