//! UI models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! legend and captions on the host.

use cayley::algebra::{BASIS, LEGEND_PREFIX};
use cayley::palette::{color_by_element, color_by_sign};
use cayley::{Color, EncodingMode, Sign};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Swatches for the active encoding, in basis order (or `+ve`, `-ve`).
pub fn legend(mode: EncodingMode) -> Vec<LegendEntry> {
    match mode {
        EncodingMode::ByElement => BASIS
            .iter()
            .map(|&e| LegendEntry {
                label: format!("{LEGEND_PREFIX}{e}"),
                color: color_by_element(e),
            })
            .collect(),
        EncodingMode::BySign => Sign::all()
            .iter()
            .map(|&s| LegendEntry {
                label: s.label().to_string(),
                color: color_by_sign(s),
            })
            .collect(),
    }
}

pub fn mode_caption(mode: EncodingMode) -> &'static str {
    match mode {
        EncodingMode::ByElement => "Colored by resulting element. Click the grid to color by sign.",
        EncodingMode::BySign => "Colored by resulting sign. Click the grid to color by element.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_legend_lists_every_basis_element() {
        let entries = legend(EncodingMode::ByElement);
        assert_eq!(entries.len(), 16);
        assert_eq!(entries[0].label, "αp");
        assert_eq!(entries[12].label, "α0123");

        let mut colors: Vec<u32> = entries.iter().map(|e| e.color.to_u32()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), 16);
    }

    #[test]
    fn sign_legend_has_two_entries() {
        let entries = legend(EncodingMode::BySign);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["+ve", "-ve"]);
        assert_ne!(entries[0].color, entries[1].color);
    }

    #[test]
    fn captions_differ_by_mode() {
        assert_ne!(
            mode_caption(EncodingMode::ByElement),
            mode_caption(EncodingMode::BySign)
        );
    }
}
