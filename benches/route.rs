// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use nereid_route::route::PathSearch;
use nereid_route::Router;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `route.pass`, `route.search`
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn benches_route(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("route.pass");

        for (case_id, case) in [
            ("sparse", fixtures::Case::Sparse),
            ("dense", fixtures::Case::Dense),
            ("crowded", fixtures::Case::Crowded),
        ] {
            let scene = fixtures::scene(case);
            let mut router = Router::new(scene.config.clone()).expect("router");

            group.throughput(Throughput::Elements(scene.edges.len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let report = router.recompute(black_box(&scene));
                    black_box(
                        fixtures::checksum_routes(router.routes())
                            .wrapping_add(report.restarts as u64),
                    )
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("route.search");

        for (case_id, size) in [("comb_32", 32usize), ("comb_96", 96usize)] {
            let (grid, start, goal) = fixtures::comb_grid(size);
            let mut search = PathSearch::new();

            group.throughput(Throughput::Elements((size * size) as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let path = search.find_path(black_box(&grid), start, goal);
                    black_box(path.len())
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_route
}
criterion_main!(benches);
