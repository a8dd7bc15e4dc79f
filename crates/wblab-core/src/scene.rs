//! Illustrated outdoor scene used as the white-balance preview.
//!
//! The scene is a fixed character-cell layout: each cell names a scene
//! element, each element has a base color, and the whole view is tinted
//! through the white-balance filter. The sun takes the color of the scene
//! light and sits inside the filtered view like everything else.

use crate::color::{kelvin_to_rgb, Rgb};
use crate::filter::{white_balance_filter, FilterDescription};
use serde::Serialize;

/// Cell layout, top row first.
///
/// `~` sky, `O` sun, `*` sun glow, `^` mountains, `.` meadow, `R` roof,
/// `W` walls, `D` door, `F` foliage, `T` trunk, `H` head, `B` body.
pub const SCENE_LAYOUT: [&str; 16] = [
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~***~~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~*OOO*~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~*OOO*~~~~~~~~",
    "~~~~~~~~~~~~~~~~~~~~~~~^^^~~~~~~~~~~***~~~~~~~~~",
    "~~~~~~~^^~~~~~~~~~~~~^^^^^^^~~~~~~~~~~~^^~~~~~~~",
    "~~~~~^^^^^^~~~~~~~^^^^^^^^^^^^~~~~~~~^^^^^^~~~~~",
    "~~~~^^^^^^^^^~~~^^^^^^^^^^^^^^FFF~~^^^^^^^^^~~~~",
    "~~~^^^^^^RR^^^^^^^^^^^^^^^^^^FFFFF^^^^^^^^^^^~~~",
    "~^^^^^^RRRRRR^^^^^^^^^^^^^^^FFFFFFF^^^^^^^^^^^^~",
    ".....RRRRRRRRRR......H.......FFFFF..............",
    "......WWWWWWWW......BBB........T................",
    "......WWWDDWWW......BBB........T................",
    "......WWWDDWWW......B.B........T................",
    "................................................",
    "................................................",
];

/// Fraction of the view height covered by the sky gradient.
const SKY_FRACTION: f64 = 0.45;

/// Fraction of the view height covered by the meadow.
const MEADOW_FRACTION: f64 = 0.35;

/// Element of the illustrated scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneElement {
    Sky,
    Sun,
    Glow,
    Mountains,
    Meadow,
    Roof,
    Walls,
    Door,
    Foliage,
    Trunk,
    Head,
    Body,
}

impl SceneElement {
    pub fn from_cell(cell: char) -> Option<Self> {
        let element = match cell {
            '~' => SceneElement::Sky,
            'O' => SceneElement::Sun,
            '*' => SceneElement::Glow,
            '^' => SceneElement::Mountains,
            '.' => SceneElement::Meadow,
            'R' => SceneElement::Roof,
            'W' => SceneElement::Walls,
            'D' => SceneElement::Door,
            'F' => SceneElement::Foliage,
            'T' => SceneElement::Trunk,
            'H' => SceneElement::Head,
            'B' => SceneElement::Body,
            _ => return None,
        };
        Some(element)
    }

    /// Untinted color of this element.
    ///
    /// `row_fraction` is the cell's vertical position in the view (0.0 top,
    /// 1.0 bottom) and drives the sky and meadow gradients.
    pub fn base_color(&self, sun: Rgb, row_fraction: f64) -> Rgb {
        match self {
            SceneElement::Sky => {
                Rgb::from_u32(0x87CEEB).mix(Rgb::from_u32(0xB0E0E6), row_fraction / SKY_FRACTION)
            }
            SceneElement::Sun => sun,
            SceneElement::Glow => sun.mix(Rgb::from_u32(0x87CEEB), 0.35),
            SceneElement::Mountains => Rgb::from_u32(0x6B8E6B),
            SceneElement::Meadow => {
                let start = 1.0 - MEADOW_FRACTION;
                Rgb::from_u32(0x7CBA5F).mix(
                    Rgb::from_u32(0x5A9A42),
                    (row_fraction - start) / MEADOW_FRACTION,
                )
            }
            SceneElement::Roof | SceneElement::Trunk => Rgb::from_u32(0x8B4513),
            SceneElement::Walls => Rgb::from_u32(0xF5DEB3),
            SceneElement::Door => Rgb::from_u32(0x654321),
            SceneElement::Foliage => Rgb::from_u32(0x228B22),
            SceneElement::Head => Rgb::from_u32(0xFFDAB9),
            SceneElement::Body => Rgb::from_u32(0x4169E1),
        }
    }
}

/// Element at a layout cell, or `None` outside the layout.
pub fn element_at(row: usize, col: usize) -> Option<SceneElement> {
    SCENE_LAYOUT
        .get(row)
        .and_then(|line| line.chars().nth(col))
        .and_then(SceneElement::from_cell)
}

/// The scene as seen through a white-balance setting.
#[derive(Debug, Clone, PartialEq)]
pub struct TintedScene {
    sun: Rgb,
    filter: FilterDescription,
    rows: Vec<Vec<Rgb>>,
}

impl TintedScene {
    /// Render the scene lit at `scene_kelvin` and shot at `wb_kelvin`.
    pub fn render(scene_kelvin: f64, wb_kelvin: f64) -> Self {
        Self::from_parts(
            kelvin_to_rgb(scene_kelvin),
            white_balance_filter(wb_kelvin, scene_kelvin),
        )
    }

    /// Render from an already computed light color and filter.
    pub fn from_parts(sun: Rgb, filter: FilterDescription) -> Self {
        let height = SCENE_LAYOUT.len();
        let rows: Vec<Vec<Rgb>> = SCENE_LAYOUT
            .iter()
            .enumerate()
            .map(|(row, line)| {
                let row_fraction = row as f64 / (height - 1) as f64;
                line.chars()
                    .map(|cell| {
                        let base = SceneElement::from_cell(cell)
                            .map(|e| e.base_color(sun, row_fraction))
                            .unwrap_or(Rgb::BLACK);
                        filter.apply(base)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { sun, filter, rows }
    }

    /// Untinted light color
    pub fn sun(&self) -> Rgb {
        self.sun
    }

    pub fn filter(&self) -> &FilterDescription {
        &self.filter
    }

    /// Tinted cell colors, top row first.
    pub fn rows(&self) -> &[Vec<Rgb>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Tinted color at a cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<Rgb> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
