use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use isograph::{graph, Graph};
use std::hint::black_box;

fn k33() -> Graph<usize> {
    graph! {
        0 => [3, 4, 5],
        1 => [3, 4, 5],
        2 => [3, 4, 5],
        3 => [0, 1, 2],
        4 => [0, 1, 2],
        5 => [0, 1, 2],
    }
}

fn path6() -> Graph<usize> {
    graph! {
        0 => [1],
        1 => [0, 2],
        2 => [1, 3],
        3 => [2, 4],
        4 => [3, 5],
        5 => [4],
    }
}

#[library_benchmark]
#[bench::k33(k33())]
#[bench::path6(path6())]
fn bench_orbit(g: Graph<usize>) -> usize {
    black_box(g.isomorphisms().unwrap().len())
}

#[library_benchmark]
#[bench::path_in_k33(path6().subgraph(&[0, 1, 2, 3]).unwrap(), k33())]
fn bench_fits_in(small: Graph<usize>, big: Graph<usize>) -> bool {
    black_box(small.fits_in(&big).unwrap().is_some())
}

library_benchmark_group!(
    name = orbit;
    benchmarks = bench_orbit, bench_fits_in
);

main!(library_benchmark_groups = orbit);
