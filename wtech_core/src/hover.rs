//! Per-card hover state for the portfolio gallery.

/// Overlay pose of a portfolio card, derived from its hover flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioOverlay {
    /// Scale applied to the project image.
    pub image_scale: f64,
    /// Downward offset of the caption block, in pixels.
    pub content_offset_px: f64,
    /// Whether the category tag is shown.
    pub category_visible: bool,
    /// Whether the "View Case Study" call-to-action is shown.
    pub cta_visible: bool,
    /// Scale of the corner external-link glyph.
    pub link_glyph_scale: f64,
    /// Rotation of the corner external-link glyph, in degrees.
    pub link_glyph_rotation_deg: f64,
}

impl PortfolioOverlay {
    /// Resting pose.
    pub const IDLE: PortfolioOverlay = PortfolioOverlay {
        image_scale: 1.0,
        content_offset_px: 20.0,
        category_visible: false,
        cta_visible: false,
        link_glyph_scale: 0.0,
        link_glyph_rotation_deg: -90.0,
    };

    /// Pose under the pointer.
    pub const HOVERED: PortfolioOverlay = PortfolioOverlay {
        image_scale: 1.1,
        content_offset_px: 0.0,
        category_visible: true,
        cta_visible: true,
        link_glyph_scale: 1.0,
        link_glyph_rotation_deg: 0.0,
    };

    /// Inline transform for the image.
    pub fn image_style(&self) -> String {
        format!("transform: scale({});", self.image_scale)
    }

    /// Inline transform for the caption block.
    pub fn content_style(&self) -> String {
        format!("transform: translateY({}px);", self.content_offset_px)
    }

    /// Inline transform for the corner glyph.
    pub fn link_glyph_style(&self) -> String {
        format!(
            "transform: scale({}) rotate({}deg);",
            self.link_glyph_scale, self.link_glyph_rotation_deg
        )
    }
}

/// Hover flag owned by one rendered card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardHover {
    hovered: bool,
}

impl CardHover {
    /// Pointer entered the card.
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the card.
    pub fn leave(&mut self) {
        self.hovered = false;
    }

    /// Whether the pointer is over the card.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Overlay pose for the current flag.
    pub fn presentation(&self) -> PortfolioOverlay {
        if self.hovered {
            PortfolioOverlay::HOVERED
        } else {
            PortfolioOverlay::IDLE
        }
    }
}
