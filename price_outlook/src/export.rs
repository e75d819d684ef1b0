//! Page layout for exporting rendered report images

use serde::{Deserialize, Serialize};

/// Page geometry in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
}

impl Default for PageLayout {
    /// A4 portrait with a 10 mm margin
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 10.0,
        }
    }
}

/// Where an image lands on its page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// An image placement on a 1-based page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PagePlacement {
    pub page: usize,
    pub placement: ImagePlacement,
}

impl PageLayout {
    pub fn printable_width(&self) -> f64 {
        self.width_mm - 2.0 * self.margin_mm
    }

    pub fn printable_height(&self) -> f64 {
        self.height_mm - 2.0 * self.margin_mm
    }

    /// Whether the margins leave a printable area
    pub fn is_valid(&self) -> bool {
        self.margin_mm >= 0.0 && self.printable_width() > 0.0 && self.printable_height() > 0.0
    }

    /// Fit an image inside the margins, keeping its aspect ratio
    ///
    /// The image is scaled to the printable width, or to the printable height
    /// when that would overflow the page, and anchored at the top-left margin.
    pub fn place(&self, image_width_px: u32, image_height_px: u32) -> Option<ImagePlacement> {
        if image_width_px == 0 || image_height_px == 0 || !self.is_valid() {
            return None;
        }

        let aspect = f64::from(image_height_px) / f64::from(image_width_px);
        let mut width = self.printable_width();
        let mut height = width * aspect;

        if height > self.printable_height() {
            height = self.printable_height();
            width = height / aspect;
        }

        Some(ImagePlacement {
            x_mm: self.margin_mm,
            y_mm: self.margin_mm,
            width_mm: width,
            height_mm: height,
        })
    }

    /// Place one image per page, skipping images with no area
    pub fn paginate(&self, images: &[(u32, u32)]) -> Vec<PagePlacement> {
        images
            .iter()
            .filter_map(|&(w, h)| self.place(w, h))
            .enumerate()
            .map(|(i, placement)| PagePlacement {
                page: i + 1,
                placement,
            })
            .collect()
    }
}
