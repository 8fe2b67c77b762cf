//! Stylesheet generation for rendered documents.
//!
//! Pages are styled with utility classes; the framework emits CSS only for the
//! classes a document actually uses.

pub mod utilities;

use log::debug;

pub use utilities::TailwindUtilities;

/// Minimal reset applied before any utility rule.
const BASE: &str = "*, ::before, ::after { box-sizing: border-box; border: 0 solid #e5e7eb; }
html { line-height: 1.5; -webkit-text-size-adjust: 100%; font-family: ui-sans-serif, system-ui, sans-serif; }
body { margin: 0; line-height: inherit; }
h1, h2, h3, h4, h5, h6 { font-size: inherit; font-weight: inherit; }
h1, h2, h3, h4, h5, h6, p { margin: 0; }
";

/// Escape a class name for use in a CSS class selector.
fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len());
    for ch in class.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}

/// Build a stylesheet for `classes`, in the order given.
///
/// Unknown classes are skipped.
pub fn stylesheet<S: AsRef<str>>(classes: &[S]) -> String {
    let mut css = String::from(BASE);
    let mut skipped = 0_usize;
    for class in classes {
        let class = class.as_ref();
        match TailwindUtilities::declarations(class) {
            Some(declarations) => {
                css.push_str(&format!(".{} {{ {declarations} }}\n", escape_class(class)));
            }
            None => skipped += 1,
        }
    }
    debug!(
        "generated stylesheet: {} utilities, {skipped} unknown classes",
        classes.len() - skipped
    );
    css
}
