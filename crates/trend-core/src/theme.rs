// File: crates/trend-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

/// Render colors for one theme: grid rows, label text, line stroke and
/// area fill, plus the background used when clearing the surface.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub text: skia::Color,
    pub line: skia::Color,
    pub fill: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 15, 17, 21),
            grid: skia::Color::from_argb(255, 42, 46, 54),
            text: skia::Color::from_argb(255, 154, 163, 178),
            line: skia::Color::from_argb(255, 94, 234, 212),
            fill: skia::Color::from_argb(46, 94, 234, 212),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 226, 229, 235),
            text: skia::Color::from_argb(255, 90, 98, 112),
            line: skia::Color::from_argb(255, 13, 148, 136),
            fill: skia::Color::from_argb(36, 13, 148, 136),
        }
    }

    /// Resolve the binary theme flag coming from the theme toggle.
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
