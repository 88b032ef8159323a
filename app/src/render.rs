use anyhow::{Result, ensure};
use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use terrain_noise::{DensityField3D, HeightMap2D};

// Deep water to beach to grass to rock to snow
fn terrain_gradient() -> Gradient<LinSrgb> {
    Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)),
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ])
}

// Lambertian hillshade, light from 45° azimuth and altitude.
// Border cells stay fully lit.
fn hillshade(map: &HeightMap2D, z_scale: f32) -> Vec<Vec<f32>> {
    let h = map.len();
    let w = map.first().map_or(0, |row| row.len());
    let mut shade = vec![vec![1.0; w]; h];
    let azimuth = std::f32::consts::FRAC_PI_4;
    let altitude = std::f32::consts::FRAC_PI_4;
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let (lx, ly, lz) = (azimuth.cos() * cos_alt, azimuth.sin() * cos_alt, sin_alt);

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let dzdx = ((map[y][x + 1] - map[y][x - 1]) / 2.0) * z_scale;
            let dzdy = ((map[y + 1][x] - map[y - 1][x]) / 2.0) * z_scale;
            let (nx, ny, nz) = (-dzdx, -dzdy, 1.0);
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            shade[y][x] = ((nx * lx + ny * ly + nz * lz) / len).max(0.0);
        }
    }
    shade
}

// Color a heightmap whose values lie in [0, output_height]
pub fn heightmap_image(map: &HeightMap2D, output_height: usize, shade: bool) -> RgbImage {
    let depth = map.len();
    let width = map.first().map_or(0, |row| row.len());
    let gradient = terrain_gradient();
    let range = (output_height as f32).max(f32::EPSILON);
    let light = shade.then(|| hillshade(map, 1.0));

    let mut img = RgbImage::new(width as u32, depth as u32);
    for (y, row) in map.iter().enumerate() {
        for (x, &h) in row.iter().enumerate() {
            let rgb = gradient.get((h / range).clamp(0.0, 1.0)).into_format::<u8>();
            let k = light
                .as_ref()
                .map_or(1.0, |l| (l[y][x] * 0.5 + 0.5).clamp(0.0, 1.0));
            img.put_pixel(
                x as u32,
                y as u32,
                Rgb([
                    (rgb.red as f32 * k) as u8,
                    (rgb.green as f32 * k) as u8,
                    (rgb.blue as f32 * k) as u8,
                ]),
            );
        }
    }
    img
}

// Vertical cross-section at depth index `slice`: x across, y up.
// Solid voxels are drawn with their density, empty ones black.
pub fn density_slice_image(field: &DensityField3D, slice: usize, solid: f32) -> Result<GrayImage> {
    let width = field.len();
    let height = field.first().map_or(0, |plane| plane.len());
    let depth = field
        .first()
        .and_then(|plane| plane.first())
        .map_or(0, |column| column.len());
    ensure!(
        slice < depth,
        "slice {slice} is outside a field {depth} cells deep"
    );

    let mut img = GrayImage::new(width as u32, height as u32);
    for (x, plane) in field.iter().enumerate() {
        for (y, column) in plane.iter().enumerate() {
            let d = column[slice];
            let gray = if d > solid { (d * 255.0).round() as u8 } else { 0 };
            // image rows grow downward, world y grows upward
            img.put_pixel(x as u32, (height - 1 - y) as u32, Luma([gray]));
        }
    }
    Ok(img)
}

// Fraction of voxels above the solid threshold
pub fn solid_fraction(field: &DensityField3D, solid: f32) -> f32 {
    let flat = terrain_noise::flatten3(field);
    if flat.is_empty() {
        return 0.0;
    }
    flat.iter().filter(|&&d| d > solid).count() as f32 / flat.len() as f32
}
