use tracing::warn;

pub const DEFAULT_SIZE: usize = 1024;
pub const SEED_A: u64 = 12345;
pub const SEED_B: u64 = 67890;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub size: usize,
    pub seed_a: u64,
    pub seed_b: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: DEFAULT_SIZE,
            seed_a: SEED_A,
            seed_b: SEED_B,
        }
    }
}

impl BenchConfig {
    pub fn with_size(size: usize) -> Self {
        BenchConfig { size, ..Self::default() }
    }

    pub fn from_arg(arg: Option<&str>) -> Self {
        Self::with_size(resolve_size(arg))
    }
}

/// Matrix dimension from the raw command-line value.
///
/// Reads a leading integer the way `atoll` does, so `12abc` and `12.5` give 12.
/// Missing values, values without leading digits, zero, negative values and
/// sizes whose buffers cannot be addressed all give [`DEFAULT_SIZE`].
pub fn resolve_size(arg: Option<&str>) -> usize {
    let Some(raw) = arg else {
        return DEFAULT_SIZE;
    };

    let n = match leading_integer(raw) {
        Some(n) if n > 0 => n,
        Some(n) => {
            warn!("size must be positive (got {}), using {}", n, DEFAULT_SIZE);
            return DEFAULT_SIZE;
        }
        None => {
            warn!("could not parse size {:?}, using {}", raw, DEFAULT_SIZE);
            return DEFAULT_SIZE;
        }
    };

    // a single Vec may not exceed isize::MAX bytes
    let addressable = usize::try_from(n).ok().filter(|&size| {
        size.checked_mul(size)
            .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
    });
    match addressable {
        Some(size) => size,
        None => {
            warn!("size {} is too large to allocate, using {}", n, DEFAULT_SIZE);
            DEFAULT_SIZE
        }
    }
}

/// Optional sign followed by at least one digit, after leading whitespace.
/// Anything after the digits is ignored. Values beyond `i64` give `None`.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_uses_default() {
        assert_eq!(resolve_size(None), DEFAULT_SIZE);
    }

    #[test]
    fn positive_values_are_kept() {
        assert_eq!(resolve_size(Some("1")), 1);
        assert_eq!(resolve_size(Some("256")), 256);
        assert_eq!(resolve_size(Some(" 64 ")), 64);
    }

    #[test]
    fn zero_and_negative_fall_back() {
        assert_eq!(resolve_size(Some("0")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("-5")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("-1024")), DEFAULT_SIZE);
    }

    #[test]
    fn leading_integer_is_used() {
        assert_eq!(resolve_size(Some("12abc")), 12);
        assert_eq!(resolve_size(Some("12.5")), 12);
        assert_eq!(resolve_size(Some("3.5")), 3);
        assert_eq!(resolve_size(Some("+7")), 7);
        assert_eq!(resolve_size(Some("  16 extra")), 16);
    }

    #[test]
    fn garbage_falls_back() {
        assert_eq!(resolve_size(Some("")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("abc")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("-")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("-3abc")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("99999999999999999999999")), DEFAULT_SIZE);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unaddressable_sizes_fall_back() {
        assert_eq!(resolve_size(Some("4294967296")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("9223372036854775807")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("1073741824")), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("536870912")), 536870912);
    }

    #[test]
    fn default_config_uses_fixed_seeds() {
        let config = BenchConfig::from_arg(Some("8"));
        assert_eq!(config.size, 8);
        assert_eq!(config.seed_a, 12345);
        assert_eq!(config.seed_b, 67890);
        assert_eq!(BenchConfig::default().size, 1024);
    }
}
