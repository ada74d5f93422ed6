//! Terminal rendering of identicons as block characters.

use console::style;
use serde::Serialize;

use glyphid_types::color::Rgb;
use glyphid_types::identicon::Identicon;

const CELL_ON: &str = "██";
const CELL_OFF: &str = "  ";

/// JSON view of an identicon with its derived palette.
#[derive(Serialize)]
pub struct IdenticonView<'a> {
    #[serde(flatten)]
    pub identicon: &'a Identicon,
    pub hex: String,
    pub cell_off: String,
    pub badge_background: String,
}

impl<'a> From<&'a Identicon> for IdenticonView<'a> {
    fn from(identicon: &'a Identicon) -> Self {
        Self {
            identicon,
            hex: identicon.color.to_string(),
            cell_off: identicon.color.cell_off().to_string(),
            badge_background: identicon.color.badge_background().to_string(),
        }
    }
}

/// Nearest xterm-256 color cube index for an RGB color.
pub fn ansi256(color: Rgb) -> u8 {
    let level = |c: u8| -> u8 {
        // Cube levels are 0, 95, 135, 175, 215, 255.
        if c < 48 {
            0
        } else if c < 115 {
            1
        } else {
            (c - 35) / 40
        }
    };
    16 + 36 * level(color.r) + 6 * level(color.g) + level(color.b)
}

/// Grid rows as plain text lines, without color.
pub fn grid_lines(identicon: &Identicon) -> Vec<String> {
    identicon
        .grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|on| if *on { CELL_ON } else { CELL_OFF })
                .collect()
        })
        .collect()
}

/// Print the identicon: a header line, then the grid tinted with its color.
pub fn print_identicon(identicon: &Identicon) {
    let tint = ansi256(identicon.color);
    println!(
        "  {} {} {}",
        style(display_name(&identicon.name)).cyan().bold(),
        style(identicon.color).color256(tint),
        style(format!(
            "rgb({}, {}, {})",
            identicon.color.r, identicon.color.g, identicon.color.b
        ))
        .dim()
    );
    for line in grid_lines(identicon) {
        println!("  {}", style(line).color256(tint));
    }
    println!();
}

/// Name shown in headers; the empty name gets a visible placeholder.
pub fn display_name(name: &str) -> String {
    if name.is_empty() {
        "(empty)".to_string()
    } else {
        name.to_string()
    }
}
