use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::matrix::Matrix;
use crate::report::{KernelKind, KernelRun, Report};

/// Wall-clock time of a single call to `f`, on the monotonic clock.
pub fn time_kernel<F>(f: F) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();
    f();
    start.elapsed()
}

/// Generates A and B from the configured seeds, runs both kernels into the
/// same output buffer and collects timings and checksums.
pub fn run(config: &BenchConfig) -> Report {
    let n = config.size;
    info!("generating two {}x{} matrices", n, n);
    let a = Matrix::random(n, config.seed_a);
    let b = Matrix::random(n, config.seed_b);
    let mut c = Matrix::zeros(n);

    let naive = run_kernel(KernelKind::Naive, &a, &b, &mut c);
    let cache_friendly = run_kernel(KernelKind::CacheFriendly, &a, &b, &mut c);

    let report = Report {
        size: n,
        matrix_bytes: c.bytes(),
        naive,
        cache_friendly,
    };

    if report.diverges() {
        warn!(
            naive = report.naive.checksum,
            cache_friendly = report.cache_friendly.checksum,
            "kernel checksums diverge"
        );
    }
    report
}

fn run_kernel(kind: KernelKind, a: &Matrix, b: &Matrix, c: &mut Matrix) -> KernelRun {
    c.fill_zero();
    debug!("running {}", kind.label());

    let elapsed = match kind {
        KernelKind::Naive => time_kernel(|| a.mul_naive_into(b, c)),
        KernelKind::CacheFriendly => time_kernel(|| a.mul_cache_friendly_into(b, c)),
    };
    let checksum = c.checksum();

    info!("{} finished in {:?}", kind.label(), elapsed);
    KernelRun { kind, elapsed, checksum }
}
