use std::fmt;
use std::time::Duration;

/// Relative tolerance allowed between the two checksums.
pub const CHECKSUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    Naive,
    CacheFriendly,
}

impl KernelKind {
    pub fn label(&self) -> &'static str {
        match self {
            KernelKind::Naive => "Naive (i,j,k)",
            KernelKind::CacheFriendly => "Cache-friendly (i,k,j)",
        }
    }

    fn short_label(&self) -> &'static str {
        match self {
            KernelKind::Naive => "Naive",
            KernelKind::CacheFriendly => "Cache-friendly",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KernelRun {
    pub kind: KernelKind,
    pub elapsed: Duration,
    pub checksum: f64,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub size: usize,
    pub matrix_bytes: usize,
    pub naive: KernelRun,
    pub cache_friendly: KernelRun,
}

impl Report {
    pub fn checksum_difference(&self) -> f64 {
        (self.naive.checksum - self.cache_friendly.checksum).abs()
    }

    pub fn diverges(&self) -> bool {
        checksums_diverge(self.naive.checksum, self.cache_friendly.checksum)
    }

    pub fn speedup(&self) -> Option<f64> {
        speedup(self.naive.elapsed, self.cache_friendly.elapsed)
    }
}

/// True when `|naive - other|` exceeds [`CHECKSUM_TOLERANCE`] of `|naive|`.
pub fn checksums_diverge(naive: f64, other: f64) -> bool {
    (naive - other).abs() > CHECKSUM_TOLERANCE * naive.abs()
}

/// `naive / cache_friendly`, or `None` when the cache-friendly run was too short to divide by.
pub fn speedup(naive: Duration, cache_friendly: Duration) -> Option<f64> {
    let denom = cache_friendly.as_secs_f64();
    if denom > 0.0 {
        Some(naive.as_secs_f64() / denom)
    } else {
        None
    }
}

/// `%g`-style formatting: `digits` significant digits, trailing zeros dropped,
/// exponent form below 1e-4 or at 10^digits and above.
fn general(x: f64, digits: usize) -> String {
    if x == 0.0 || !x.is_finite() {
        return format!("{}", x);
    }
    let digits = digits.max(1);

    // the exponent after rounding to `digits` places decides the notation
    let sci = format!("{:.*e}", digits - 1, x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i64 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i64 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i64 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn write_run(f: &mut fmt::Formatter<'_>, run: &KernelRun) -> fmt::Result {
    let time_label = format!("{} time:", run.kind.label());
    let checksum_label = format!("{} checksum:", run.kind.short_label());
    writeln!(f, "{:<29}{} s", time_label, general(run.elapsed.as_secs_f64(), 6))?;
    writeln!(f, "{:<28}{}", checksum_label, general(run.checksum, 12))?;
    writeln!(f)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix multiply benchmark (naive vs cache-friendly)")?;
        writeln!(f, "Matrix size: {} x {}  ({} MiB per matrix)",
            self.size, self.size, self.matrix_bytes / (1024 * 1024))?;
        writeln!(f, "Single-threaded. Fixed RNG seeds for reproducibility.")?;
        writeln!(f)?;

        write_run(f, &self.naive)?;
        write_run(f, &self.cache_friendly)?;

        if self.diverges() {
            writeln!(f, "Warning: results differ! (checksums differ by {})",
                general(self.checksum_difference(), 6))?;
        }

        match self.speedup() {
            Some(ratio) => writeln!(f, "Speedup (naive / cache-friendly): {:.2}x", ratio),
            None => writeln!(f, "Cache-friendly time too small to compute speedup reliably."),
        }
    }
}
