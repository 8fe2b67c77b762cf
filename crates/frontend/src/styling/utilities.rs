//! Tailwind-compatible utility class table.
//!
//! Only classes that resolve here produce CSS; anything else is left to
//! hand-written stylesheets.

pub struct TailwindUtilities;

/// Spacing scale steps; each unit is 0.25rem.
const SPACING_SCALE: &[&str] = &[
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
    "72", "80", "96",
];

const GRAY: &[(&str, &str)] = &[
    ("50", "#f9fafb"),
    ("100", "#f3f4f6"),
    ("200", "#e5e7eb"),
    ("300", "#d1d5db"),
    ("400", "#9ca3af"),
    ("500", "#6b7280"),
    ("600", "#4b5563"),
    ("700", "#374151"),
    ("800", "#1f2937"),
    ("900", "#111827"),
    ("950", "#030712"),
];

impl TailwindUtilities {
    /// CSS declarations for a utility class, if it is a known utility.
    pub fn declarations(class: &str) -> Option<String> {
        Self::flexbox(class)
            .or_else(|| Self::layout(class))
            .or_else(|| Self::typography(class))
            .map(str::to_owned)
            .or_else(|| Self::spacing(class))
            .or_else(|| Self::colors(class))
    }

    fn flexbox(class: &str) -> Option<&'static str> {
        Some(match class {
            "flex-row" => "flex-direction: row;",
            "flex-col" => "flex-direction: column;",
            "flex-wrap" => "flex-wrap: wrap;",
            "flex-nowrap" => "flex-wrap: nowrap;",
            "flex-1" => "flex: 1 1 0%;",
            "flex-none" => "flex: none;",
            "items-start" => "align-items: flex-start;",
            "items-center" => "align-items: center;",
            "items-end" => "align-items: flex-end;",
            "items-stretch" => "align-items: stretch;",
            "justify-start" => "justify-content: flex-start;",
            "justify-center" => "justify-content: center;",
            "justify-end" => "justify-content: flex-end;",
            "justify-between" => "justify-content: space-between;",
            "justify-around" => "justify-content: space-around;",
            _ => return None,
        })
    }

    fn layout(class: &str) -> Option<&'static str> {
        Some(match class {
            "block" => "display: block;",
            "inline-block" => "display: inline-block;",
            "inline" => "display: inline;",
            "flex" => "display: flex;",
            "inline-flex" => "display: inline-flex;",
            "grid" => "display: grid;",
            "hidden" => "display: none;",
            "w-full" => "width: 100%;",
            "w-screen" => "width: 100vw;",
            "h-full" => "height: 100%;",
            "h-screen" => "height: 100vh;",
            "min-h-screen" => "min-height: 100vh;",
            "min-h-full" => "min-height: 100%;",
            _ => return None,
        })
    }

    fn typography(class: &str) -> Option<&'static str> {
        Some(match class {
            "antialiased" => {
                "-webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale;"
            }
            "text-xs" => "font-size: 0.75rem; line-height: 1rem;",
            "text-sm" => "font-size: 0.875rem; line-height: 1.25rem;",
            "text-base" => "font-size: 1rem; line-height: 1.5rem;",
            "text-lg" => "font-size: 1.125rem; line-height: 1.75rem;",
            "text-xl" => "font-size: 1.25rem; line-height: 1.75rem;",
            "text-2xl" => "font-size: 1.5rem; line-height: 2rem;",
            "text-3xl" => "font-size: 1.875rem; line-height: 2.25rem;",
            "text-4xl" => "font-size: 2.25rem; line-height: 2.5rem;",
            "text-5xl" => "font-size: 3rem; line-height: 1;",
            "text-6xl" => "font-size: 3.75rem; line-height: 1;",
            "font-thin" => "font-weight: 100;",
            "font-light" => "font-weight: 300;",
            "font-normal" => "font-weight: 400;",
            "font-medium" => "font-weight: 500;",
            "font-semibold" => "font-weight: 600;",
            "font-bold" => "font-weight: 700;",
            "font-black" => "font-weight: 900;",
            "text-left" => "text-align: left;",
            "text-center" => "text-align: center;",
            "text-right" => "text-align: right;",
            _ => return None,
        })
    }

    fn spacing_value(step: &str) -> Option<String> {
        match step {
            "px" => return Some("1px".to_owned()),
            "auto" => return Some("auto".to_owned()),
            "0" => return Some("0px".to_owned()),
            _ => {}
        }
        if !SPACING_SCALE.contains(&step) {
            return None;
        }
        let units: f64 = step.parse().ok()?;
        Some(format!("{}rem", units / 4.0))
    }

    fn spacing(class: &str) -> Option<String> {
        let (prefix, step) = class.split_once('-')?;
        let properties: &[&str] = match prefix {
            "p" => &["padding"],
            "px" => &["padding-left", "padding-right"],
            "py" => &["padding-top", "padding-bottom"],
            "pt" => &["padding-top"],
            "pr" => &["padding-right"],
            "pb" => &["padding-bottom"],
            "pl" => &["padding-left"],
            "m" => &["margin"],
            "mx" => &["margin-left", "margin-right"],
            "my" => &["margin-top", "margin-bottom"],
            "mt" => &["margin-top"],
            "mr" => &["margin-right"],
            "mb" => &["margin-bottom"],
            "ml" => &["margin-left"],
            "gap" => &["gap"],
            _ => return None,
        };
        // Padding and gap have no `auto` step
        if step == "auto" && !prefix.starts_with('m') {
            return None;
        }
        let value = Self::spacing_value(step)?;
        Some(
            properties
                .iter()
                .map(|property| format!("{property}: {value};"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    fn colors(class: &str) -> Option<String> {
        let (property, color) = if let Some(color) = class.strip_prefix("text-") {
            ("color", color)
        } else if let Some(color) = class.strip_prefix("bg-") {
            ("background-color", color)
        } else {
            return None;
        };
        let value = match color {
            "white" => "#ffffff",
            "black" => "#000000",
            "transparent" => "transparent",
            _ => {
                let shade = color.strip_prefix("gray-")?;
                GRAY.iter().find(|(name, _)| *name == shade)?.1
            }
        };
        Some(format!("{property}: {value};"))
    }
}
