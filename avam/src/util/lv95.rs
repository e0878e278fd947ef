/// converts Swiss LV95 planar coordinates (E, N) into WGS84 (lat, lon)
/// using the swisstopo approximation formulas. accuracy is on the order of
/// a meter, which is well below the resolution of any travel-time source
/// consumed here.
pub fn lv95_to_wgs84(e: f64, n: f64) -> (f64, f64) {
    let y = (e - 2_600_000.0) / 1_000_000.0;
    let x = (n - 1_200_000.0) / 1_000_000.0;
    let lon_sec =
        2.6779094 + 4.728982 * y + 0.791484 * y * x + 0.1306 * y * x * x - 0.0436 * y * y * y;
    let lat_sec = 16.9023892 + 3.238272 * x
        - 0.270978 * y * y
        - 0.002528 * x * x
        - 0.0447 * y * y * x
        - 0.0140 * x * x * x;
    (lat_sec * 100.0 / 36.0, lon_sec * 100.0 / 36.0)
}
