//! ANSI color output

use wblab_core::Rgb;

const RESET: &str = "\x1b[0m";

/// Upper half block, painted with the top cell as foreground and the
/// bottom cell as background.
const HALF_BLOCK: char = '▀';

/// Writes colored cells, or plain fallbacks when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// `text` on a solid background.
    pub fn on(&self, bg: Rgb, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[48;2;{};{};{}m{}{}", bg.r, bg.g, bg.b, text, RESET)
    }

    /// A solid block `width` cells wide, or `[#rrggbb]` without color.
    pub fn swatch(&self, rgb: Rgb, width: usize) -> String {
        if !self.color {
            return format!("[{}]", rgb.to_hex());
        }
        self.on(rgb, &" ".repeat(width))
    }

    /// Two vertically stacked cells in one character.
    pub fn half_block(&self, top: Rgb, bottom: Rgb) -> String {
        format!(
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
            top.r, top.g, top.b, bottom.r, bottom.g, bottom.b, HALF_BLOCK
        )
    }

    /// Terminates a run of colored cells.
    pub fn reset(&self) -> &'static str {
        if self.color {
            RESET
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_swatch_uses_hex() {
        let painter = Painter::new(false);
        assert_eq!(painter.swatch(Rgb::new(255, 172, 99), 4), "[#ffac63]");
        assert_eq!(painter.on(Rgb::BLACK, "x"), "x");
        assert_eq!(painter.reset(), "");
    }

    #[test]
    fn test_color_swatch_escape() {
        let painter = Painter::new(true);
        assert_eq!(
            painter.swatch(Rgb::new(1, 2, 3), 2),
            "\x1b[48;2;1;2;3m  \x1b[0m"
        );
    }
}
