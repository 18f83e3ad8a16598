//! # Ordered Dithering
//!
//! Logos are grayscale (or colour) images; the printer only knows dot or no
//! dot. Each pixel's darkness is compared with a cell of an 8x8 Bayer
//! matrix tiled over the image, which keeps the output deterministic.

/// Bayer index matrix, a permutation of 0..64.
const BAYER8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Darkness a pixel at (x, y) must exceed to become a dot.
///
/// Always strictly between 0 and 1, so pure white never prints and pure
/// black always does.
pub fn threshold(x: usize, y: usize) -> f32 {
    (f32::from(BAYER8[y % 8][x % 8]) + 0.5) / 64.0
}

/// Dither a `width` x `height` image into raster rows.
///
/// `darkness(x, y)` is 0.0 for paper white and 1.0 for full black. Rows are
/// `width.div_ceil(8)` bytes, MSB first, with trailing bits left white.
pub fn generate_raster(width: usize, height: usize, darkness: impl Fn(usize, usize) -> f32) -> Vec<u8> {
    let stride = width.div_ceil(8);
    let mut raster = vec![0u8; stride * height];

    for y in 0..height {
        let row = &mut raster[y * stride..(y + 1) * stride];
        for x in (0..width).filter(|&x| darkness(x, y) > threshold(x, y)) {
            row[x / 8] |= 0x80 >> (x % 8);
        }
    }

    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_a_permutation() {
        let mut cells: Vec<u8> = BAYER8.iter().flatten().copied().collect();
        cells.sort_unstable();
        assert_eq!(cells, (0..64).collect::<Vec<u8>>());
    }

    #[test]
    fn test_white_and_black() {
        assert!(generate_raster(9, 3, |_, _| 0.0).iter().all(|&b| b == 0));
        assert_eq!(generate_raster(12, 2, |_, _| 1.0), vec![0xFF, 0xF0, 0xFF, 0xF0]);
    }

    #[test]
    fn test_mid_gray_is_half_ink() {
        let raster = generate_raster(8, 8, |_, _| 0.5);
        let dots: u32 = raster.iter().map(|b| b.count_ones()).sum();
        assert_eq!(dots, 32);
    }

    #[test]
    fn test_left_half_black() {
        let raster = generate_raster(8, 1, |x, _| if x < 4 { 1.0 } else { 0.0 });
        assert_eq!(raster, vec![0xF0]);
    }
}
