/// Iteration cap used when none is given on the command line.
///
/// Every 4-digit numeral settles within 7 steps, so this only matters for
/// trajectories that would otherwise never stop.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

pub struct Config {
    /// Upper bound on Kaprekar iterations per numeral.
    ///
    /// Numerals that have not reached 6174 after this many steps are
    /// classified as failures.
    pub max_iterations: u32,
    /// Suppresses headers and decoration. `1` keeps results, `2` keeps only
    /// the summary lines.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            quiet: 0,
            no_banner: false,
        }
    }
}
