// Simple color struct, created from an unsigned 32 representing RRGGBBAA

use rand::Rng;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// The five colors circles are painted with, as RRGGBBAA
pub const PALETTE: [u32; 5] = [
    0x820009ff,
    0xff2231ff,
    0xcf0714ff,
    0x048223ff,
    0x07cf38ff,
];

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Hex string usable as a canvas fillStyle. Palette alpha is always 0xff,
    // so the alpha channel is not emitted.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Draws one of the palette colors uniformly at random
pub fn random_palette_color<R: Rng>(rng: &mut R) -> Color {
    Color::from_u32(PALETTE[rng.gen_range(0, PALETTE.len())])
}
