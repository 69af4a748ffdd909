//! Deterministic avatar images keyed by a seed string.
//!
//! The default [`IdenticonAvatar`] hashes the seed with BLAKE3 and draws a
//! mirrored 5x5 grid, returned as an inline SVG data URI so no network
//! request is needed to render it.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const GRID: usize = 5;
const CELL: usize = 10;
const MIRRORED_COLUMNS: usize = GRID.div_ceil(2);

/// Maps a seed to an image URL or data URI. Must be a pure function of the seed.
pub trait AvatarProvider: Send + Sync {
    fn generate(&self, seed: &str) -> String;
}

/// Shared handle to the avatar provider, provided via context.
#[derive(Clone)]
pub struct Avatars(Arc<dyn AvatarProvider>);

impl Avatars {
    pub fn new(provider: Arc<dyn AvatarProvider>) -> Self {
        Self(provider)
    }

    pub fn generate(&self, seed: &str) -> String {
        self.0.generate(seed)
    }
}

impl Default for Avatars {
    fn default() -> Self {
        Self(Arc::new(IdenticonAvatar))
    }
}

/// GitHub-style identicon rendered as an SVG data URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdenticonAvatar;

impl AvatarProvider for IdenticonAvatar {
    fn generate(&self, seed: &str) -> String {
        let svg = identicon_svg(seed);
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
    }
}

/// Build the raw SVG markup for `seed`.
pub fn identicon_svg(seed: &str) -> String {
    let digest = blake3::hash(seed.as_bytes());
    let bytes = digest.as_bytes();

    let hue = u16::from_be_bytes([bytes[0], bytes[1]]) % 360;
    let fill = format!("hsl({hue}, 55%, 50%)");
    let size = GRID * CELL;

    let mut svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}"><rect width="{size}" height="{size}" fill="#f0f0f0"/>"##
    );
    for (row, col) in filled_cells(bytes) {
        let mirror = GRID - 1 - col;
        let columns = if mirror == col { vec![col] } else { vec![col, mirror] };
        for x in columns {
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{CELL}" height="{CELL}" fill="{fill}"/>"#,
                x * CELL,
                row * CELL
            ));
        }
    }
    svg.push_str("</svg>");
    svg
}

/// Cells in the left half (including the centre column) that are filled.
fn filled_cells(bytes: &[u8; 32]) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..GRID).flat_map(move |row| {
        (0..MIRRORED_COLUMNS).filter_map(move |col| {
            let byte = bytes[2 + row * MIRRORED_COLUMNS + col];
            (byte & 1 == 1).then_some((row, col))
        })
    })
}
