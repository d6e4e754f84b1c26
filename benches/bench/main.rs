// std imports
use std::{
    alloc::System,
    cmp::{max, min},
    hint::black_box,
    time::{Duration, Instant},
};

// third-party imports
use criterion::{BatchSize, Bencher, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, StatsAlloc};

#[global_allocator]
static GA: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const GROUP: &str = "fastwild";
const ND: &str = ":"; // name delimiter

mod matching;

criterion_main!(matching::benches);

trait BencherExt {
    fn iter_batched_fixed<I, O, S, R>(&mut self, setup: S, routine: R, size: BatchSize)
    where
        S: FnMut() -> I,
        R: FnMut(I) -> O;
}

impl BencherExt for Bencher<'_> {
    #[inline(never)]
    fn iter_batched_fixed<I, O, S, R>(&mut self, mut setup: S, mut routine: R, size: BatchSize)
    where
        S: FnMut() -> I,
        R: FnMut(I) -> O,
    {
        self.iter_custom(|iters| {
            let mut n = iters;
            let k = iters_per_batch(size, n);
            assert!(k != 0, "batch size must not be zero");

            let mut total = Duration::from_nanos(0);

            while n > 0 {
                let k = min(k as u64, n) as usize;
                let mut inputs = black_box((0..k).map(|_| setup()).collect::<Vec<_>>());

                let start = Instant::now();
                for _ in 0..k {
                    black_box(routine(inputs.pop().unwrap()));
                }
                let elapsed = start.elapsed();

                let mut inputs = black_box((0..k).map(|_| setup()).collect::<Vec<_>>());

                let start = Instant::now();
                for _ in 0..k {
                    black_box(inputs.pop().unwrap());
                }
                let overhead = start.elapsed();

                total += elapsed - min(elapsed, overhead);

                n -= k as u64;
            }

            max(total, Duration::from_nanos(1))
        });
    }
}

fn iters_per_batch(size: BatchSize, iters: u64) -> usize {
    let size = match size {
        BatchSize::SmallInput => iters.div_ceil(10),
        BatchSize::LargeInput => iters.div_ceil(1000),
        BatchSize::PerIteration => 1,
        BatchSize::NumBatches(batches) => iters.div_ceil(batches),
        BatchSize::NumIterations(size) => size,
        _ => panic!("unsupported batch size"),
    };
    usize::try_from(size).unwrap()
}
