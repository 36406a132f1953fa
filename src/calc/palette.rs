/// Maps an unbounded index onto `[0, max_index]` as a triangle (ping-pong)
/// wave with period `2 * max_index`, so walking past the last palette entry
/// reflects back instead of jumping to the first.
pub fn triangle_index(index: usize, max_index: usize) -> usize {
    if max_index == 0 {
        return 0;
    }
    let period = max_index * 2;
    let reduced = index % period;
    if reduced > max_index {
        period - reduced
    } else {
        reduced
    }
}

/// Base and light color pairs assigned to room groups by position.
///
/// An explicit configuration value; the default is the six-step
/// green-to-blue ramp the board has always used.
#[derive(Clone, Debug)]
pub struct Palette {
    pub base: Vec<String>,
    pub light: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            base: ["#B5E48C", "#99D98C", "#76C893", "#52B69A", "#34A0A4", "#168AAD"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            light: ["#CAECAC", "#BBE6B3", "#99D6AE", "#6FC3AB", "#45C0C4", "#1CADD9"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Palette {
    /// Base color for group `index`, cycling over the palette.
    pub fn color(&self, index: usize) -> &str {
        &self.base[triangle_index(index, self.base.len() - 1)]
    }

    /// Light variant for group `index`, cycling over the palette.
    pub fn color_light(&self, index: usize) -> &str {
        &self.light[triangle_index(index, self.light.len() - 1)]
    }
}
