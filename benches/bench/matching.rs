// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};
use stats_alloc::Region;
use wildcard::Policy;

// local imports
use super::{BencherExt, GA, GROUP, ND};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
    bench_with::<wildcard::Pattern>(c, "pattern");
    bench_with::<Exact>(c, "exact");
    bench_with::<IgnoreCase>(c, "ignore-case");
}

fn bench_with<Pattern: Wildcard>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group(format!("{}{}matching", GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    const P1X: (&str, &str) = ("1x", "_*");
    const P27X: (&str, &str) = ("27x", "SOME_VERY_VERY_LONG_PREFIX_*");
    const PMX: (&str, &str) = ("mx", "*a*a*a*a*a*a*a*b");
    const PQ: (&str, &str) = ("q", "*?_??_*");

    let long = "a".repeat(256);

    let variants = [
        ("short", "_TEST", P1X, true),
        ("short", "TEST", P1X, false),
        ("long", "_TEST_SOME_VERY_VERY_LONG_NAME", P1X, true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", P27X, true),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", P27X, false),
        ("short", "XX_YY_ZZ", PQ, true),
        ("adversarial", long.as_str(), PMX, false),
    ];

    for (name, input, (pname, pattern), expected) in &variants {
        let function = format!("{}{}{}", title, ND, "matches");
        let param = format!(
            "{}:{}:{}:{}",
            name,
            pname,
            if *expected { "pos" } else { "neg" },
            input.len(),
        );
        let pattern = Pattern::new(pattern);
        let setup = || String::from(*input);
        let routine = |input: String| black_box(&pattern).matches(&input);

        assert_eq!(routine(setup()), *expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(function, param), |b| {
            b.iter_batched_fixed(setup, routine, BatchSize::NumIterations(16384));
        });
    }

    if Pattern::ALLOCATION_FREE {
        for (_, input, (_, pattern), _) in &variants {
            let pattern = Pattern::new(pattern);
            let region = Region::new(GA);
            black_box(pattern.matches(black_box(input)));
            assert_eq!(region.change().allocations, 0, "{} allocated while matching", title);
        }
    }
}

// ---

trait Wildcard {
    const ALLOCATION_FREE: bool;

    fn new(pattern: &'static str) -> Self;
    fn matches(&self, what: &str) -> bool;
}

impl Wildcard for wildmatch::WildMatch {
    const ALLOCATION_FREE: bool = false;

    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}

impl Wildcard for wildcard::Pattern {
    const ALLOCATION_FREE: bool = true;

    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}

/// Raw pattern matched on every call without compilation.
struct Exact(&'static str);

impl Wildcard for Exact {
    const ALLOCATION_FREE: bool = true;

    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        wildcard::matches(self.0, what, Policy::Exact)
    }
}

struct IgnoreCase(&'static str);

impl Wildcard for IgnoreCase {
    const ALLOCATION_FREE: bool = true;

    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        wildcard::matches(self.0, what, Policy::IgnoreCase)
    }
}
