use common::*;

mod common;

fn render_policies(c: &mut Criterion) {
    let grid = get_volume();
    let renderer = Renderer::new();

    for (name, policy) in [
        ("mip", Policy::Mip),
        ("first_hit", Policy::FirstHit),
        ("average", Policy::Average),
        ("alpha", Policy::AlphaCompositing),
    ] {
        let state = get_state(policy, 1);
        c.bench_function(&format!("render {name}"), |b| {
            b.iter(|| renderer.render(&grid, &state))
        });
    }
}

fn render_scaled(c: &mut Criterion) {
    let grid = get_volume();
    let renderer = Renderer::new();
    let state = get_state(Policy::Mip, 2);

    c.bench_function("render mip scale 2", |b| {
        b.iter(|| renderer.render(&grid, &state))
    });
}

fn render_oblique(c: &mut Criterion) {
    let grid = get_volume();
    let renderer = Renderer::new();
    let state = get_state(Policy::Mip, 1);
    let plane = ViewingPlane::for_grid(&grid, 1);

    c.bench_function("render oblique mip", |b| {
        b.iter(|| renderer.render_oblique(&grid, &state, &plane))
    });
}

criterion_group! {
    name = straight;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = render_policies, render_scaled
}

criterion_group! {
    name = oblique;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = render_oblique
}

criterion_main!(straight, oblique);
