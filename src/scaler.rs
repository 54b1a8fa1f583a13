// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use core::fmt;

/// Placement of the scaled source image inside the destination surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScaledRegion {
    pub offset_x: u32,
    pub offset_y: u32,
    pub width: u32,
    pub height: u32,
}

impl ScaledRegion {
    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.offset_x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.offset_y + self.height
    }

    /// Whether the region lies entirely inside a `width` x `height` surface.
    pub fn contains(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

impl fmt::Display for ScaledRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.offset_x, self.offset_y
        )
    }
}

/// Computes where a `src_width` x `src_height` image lands when fitted,
/// centered, into a `dst_width` x `dst_height` surface.
///
/// When the aspect ratios compare exactly equal the destination is filled.
/// Otherwise a landscape destination keeps its full height and a portrait
/// destination keeps its full width, the other side following the source
/// aspect ratio. Should that overflow the destination, the image is instead
/// fitted against the axis that constrains it, so the result always stays
/// within bounds.
///
/// All dimensions must be non-zero.
pub fn aspect_fit(src_width: u32, src_height: u32, dst_width: u32, dst_height: u32) -> ScaledRegion {
    debug_assert!(src_width > 0 && src_height > 0 && dst_width > 0 && dst_height > 0);

    let src_aspect = src_width as f64 / src_height as f64;
    let dst_aspect = dst_width as f64 / dst_height as f64;

    if src_aspect == dst_aspect {
        return ScaledRegion {
            offset_x: 0,
            offset_y: 0,
            width: dst_width,
            height: dst_height,
        };
    }

    let (mut width, mut height) = if dst_width >= dst_height {
        ((dst_height as f64 * src_aspect).round() as u32, dst_height)
    } else {
        (dst_width, (dst_width as f64 * src_aspect).round() as u32)
    };

    if width > dst_width || height > dst_height {
        if src_aspect > dst_aspect {
            width = dst_width;
            height = (dst_width as f64 / src_aspect).round() as u32;
        } else {
            width = (dst_height as f64 * src_aspect).round() as u32;
            height = dst_height;
        }
    }

    let width = width.clamp(1, dst_width);
    let height = height.clamp(1, dst_height);

    ScaledRegion {
        offset_x: (dst_width - width) / 2,
        offset_y: (dst_height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_fills() {
        let region = aspect_fit(1920, 1080, 1920, 1080);
        assert_eq!(
            region,
            ScaledRegion {
                offset_x: 0,
                offset_y: 0,
                width: 1920,
                height: 1080
            }
        );

        // 16:9 at a different resolution is still an exact match.
        let region = aspect_fit(1280, 720, 1920, 1080);
        assert_eq!(region.width, 1920);
        assert_eq!(region.height, 1080);
        assert_eq!((region.offset_x, region.offset_y), (0, 0));
    }

    #[test]
    fn test_pillarbox_landscape() {
        let region = aspect_fit(800, 480, 1920, 1080);
        assert_eq!(region.height, 1080);
        assert_eq!(region.width, 1800);
        assert_eq!(region.offset_x, 60);
        assert_eq!(region.offset_y, 0);
        assert_eq!(region.to_string(), "1800x1080+60+0");
    }

    #[test]
    fn test_portrait_destination() {
        let region = aspect_fit(800, 480, 1080, 1920);
        assert_eq!(region.width, 1080);
        assert_eq!(region.height, (1080.0_f64 * 800.0 / 480.0).round() as u32);
        assert_eq!(region.height, 1800);
        assert_eq!(region.offset_x, 0);
        assert_eq!(region.offset_y, 60);
    }

    #[test]
    fn test_landscape_rounding() {
        // 1080 * 4 / 3 = 1440 exactly, 768 * 16 / 10 = 1228.8 rounds up.
        assert_eq!(aspect_fit(640, 480, 1920, 1080).width, 1440);
        assert_eq!(aspect_fit(1280, 800, 1024, 768).width, 1024);
        let region = aspect_fit(1280, 800, 1366, 768);
        assert_eq!(region.width, 1229);
        assert_eq!(region.offset_x, (1366 - 1229) / 2);
    }

    #[test]
    fn test_wide_source_stays_inside() {
        let region = aspect_fit(3000, 1000, 1920, 1080);
        assert_eq!(region.width, 1920);
        assert_eq!(region.height, 640);
        assert_eq!(region.offset_y, 220);
        assert!(region.contains(1920, 1080));

        let region = aspect_fit(1920, 1080, 608, 1024);
        assert_eq!(region.width, 608);
        assert_eq!(region.height, 342);
        assert_eq!(region.offset_y, 341);
        assert!(region.contains(608, 1024));
    }

    #[test]
    fn test_always_contained() {
        let dims = [
            1u32, 2, 3, 7, 240, 320, 480, 600, 640, 720, 768, 800, 1024, 1080, 1280, 1920, 2160,
            3840,
        ];
        for &sw in &dims {
            for &sh in &dims {
                for &dw in &dims {
                    for &dh in &dims {
                        let region = aspect_fit(sw, sh, dw, dh);
                        assert!(
                            region.contains(dw, dh),
                            "{sw}x{sh} -> {dw}x{dh} gave {region}"
                        );
                        assert!(region.width > 0 && region.height > 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_centered() {
        let region = aspect_fit(480, 800, 1920, 1080);
        assert_eq!(region.height, 1080);
        assert_eq!(region.width, 648);
        assert_eq!(region.offset_x, 636);
        assert_eq!(region.right() + region.offset_x, 1920);
    }
}
