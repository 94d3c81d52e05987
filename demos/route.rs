//! Route a handful of arrows between three boxes and print the paths.
//!
//! Run with: RUST_LOG=elbowr=debug cargo run --example route --features tracing

use elbowr::{
    Arrow, Binding, LocalPoint, RecordingObserver, RectangleShape, RouterConfig, Scene, WorldPoint,
    route_elbow_arrow_with,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let scene = Scene::new()
        .with_shape("a", RectangleShape::from_corner(0.0, 0.0, 40.0, 40.0))?
        .with_shape("b", RectangleShape::from_corner(200.0, 0.0, 40.0, 40.0))?
        .with_shape("c", RectangleShape::from_corner(200.0, 200.0, 40.0, 40.0))?;

    let arrows = [
        ("a right -> b left", (40.0, 20.0), Some("a"), (200.0, 20.0), Some("b")),
        ("a left -> b right", (0.0, 20.0), Some("a"), (240.0, 20.0), Some("b")),
        ("a right -> c top", (40.0, 20.0), Some("a"), (220.0, 200.0), Some("c")),
        ("c left -> a top", (200.0, 220.0), Some("c"), (20.0, 0.0), Some("a")),
        ("free -> free", (0.0, 300.0), None, (120.0, 360.0), None),
    ];

    let config = RouterConfig::default();
    for (label, from, from_shape, to, to_shape) in arrows {
        let mut arrow = Arrow::try_new(
            WorldPoint::ORIGIN,
            vec![LocalPoint::new(from.0, from.1), LocalPoint::new(to.0, to.1)],
        )?;
        if let Some(id) = from_shape {
            arrow = arrow.with_start_binding(Binding::new(id));
        }
        if let Some(id) = to_shape {
            arrow = arrow.with_end_binding(Binding::new(id));
        }

        let mut observer = RecordingObserver::new();
        let path = route_elbow_arrow_with(&arrow, &scene, &config, &mut observer);
        let joined = path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");

        println!("{label}: {joined}");
        if observer.nudge_count() > 0 {
            println!("    ({} deadlock nudge(s))", observer.nudge_count());
        }
        if observer.hit_step_limit() {
            println!("    (step limit reached)");
        }
    }

    Ok(())
}
