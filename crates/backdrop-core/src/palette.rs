//! Fixed color table for the backdrop.
//!
//! Swatches are authored as packed 0xRRGGBB sRGB values. Everything that
//! reaches the GPU goes through [`Swatch::linear_rgb`], so the render target
//! (an sRGB surface) re-encodes them to the authored colors.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: u32,
}

impl Swatch {
    pub const fn new(name: &'static str, hex: u32) -> Self {
        Self { name, hex }
    }

    /// Channels as 0..1 sRGB values, without decoding.
    pub fn srgb(&self) -> [f32; 3] {
        [
            ((self.hex >> 16) & 0xff) as f32 / 255.0,
            ((self.hex >> 8) & 0xff) as f32 / 255.0,
            (self.hex & 0xff) as f32 / 255.0,
        ]
    }

    pub fn linear_rgb(&self) -> [f32; 3] {
        self.srgb().map(srgb_to_linear)
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}

pub const DEEP_PURPLE: Swatch = Swatch::new("deepPurple", 0x2d1b4e);
pub const ROYAL_PURPLE: Swatch = Swatch::new("royalPurple", 0x6b3fa0);
pub const SOFT_PURPLE: Swatch = Swatch::new("softPurple", 0x9b6dcc);
pub const LAVENDER: Swatch = Swatch::new("lavender", 0xc4a7e7);
pub const OCEAN_BLUE: Swatch = Swatch::new("oceanBlue", 0x3d5a80);
pub const TEAL: Swatch = Swatch::new("teal", 0x4ecdc4);
pub const MINT: Swatch = Swatch::new("mint", 0x95d5b2);
pub const SOFT_GREEN: Swatch = Swatch::new("softGreen", 0x74c69d);

pub const SWATCHES: [Swatch; 8] = [
    DEEP_PURPLE,
    ROYAL_PURPLE,
    SOFT_PURPLE,
    LAVENDER,
    OCEAN_BLUE,
    TEAL,
    MINT,
    SOFT_GREEN,
];

// Particle tints, in selection order
pub const TINTS: [Swatch; 5] = [SOFT_PURPLE, LAVENDER, TEAL, MINT, OCEAN_BLUE];
