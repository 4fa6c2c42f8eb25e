use orientation_core::angle::shortest_difference;
use orientation_core::{EulerAngles, Frame, Quaternion, RotationMatrix, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=trace shows the pole and slerp branch decisions.
    env_logger::init();

    // --- Canonicalization ---

    println!("=== Canonical Euler angles ===");
    for (h, p, b) in [
        (380.0, 0.0, 0.0),
        (0.0, 135.0, 0.0),
        (90.0, 90.0, 90.0),
        (-30.0, -90.0, 10.0),
    ] {
        let raw = EulerAngles::new(h, p, b);
        println!("  {}  ->  {}", raw, raw.canonized());
    }

    // --- Euler -> matrix -> quaternion -> Euler ---

    let attitude = EulerAngles::new(123.0, 33.5, -32.7);
    let upright = attitude.to_matrix(Frame::Upright);
    let q = Quaternion::from_matrix(&upright);
    let back = EulerAngles::from_quaternion(&q, Frame::Upright);

    println!("\n=== Round trip ===");
    println!("  start:      {}", attitude);
    println!("  {}", upright);
    println!("  quaternion: {}", q);
    println!("  angle {:.3}°, axis {}", q.angle().to_degrees(), q.axis()?);
    println!("  back:       {}", back);

    // --- Gimbal lock ---

    let locked = EulerAngles::new(-45.0, -90.0, 0.0);
    let from_matrix = EulerAngles::from_upright_matrix(&locked.to_upright_matrix());
    println!("\n=== Pole ===");
    println!("  {}  ->  {}", locked, from_matrix);

    // --- Interpolation ---

    let x = Vector3::x_axis();
    let start = Quaternion::from_axis_angle(20f64.to_radians(), &x);
    let end = Quaternion::from_axis_angle(40f64.to_radians(), &x);

    println!("\n=== Slerp 20° -> 40° about x ===");
    for step in 0..=4 {
        let t = f64::from(step) / 4.0;
        let q = start.slerp(&end, t);
        println!("  t={:.2}  {}  ({:.2}°)", t, q, q.angle().to_degrees());
    }

    let d = Quaternion::difference(&start, &end);
    println!("  difference: {:.2}°", d.angle().to_degrees());
    println!("  heading -170° -> 170°: {}°", shortest_difference(-170.0, 170.0));

    // --- Matrix maintenance ---

    let mut m = RotationMatrix::identity();
    for _ in 0..1000 {
        m.rotate_about(&Vector3::direction(0.6, 0.0, 0.8), 7.3)?;
    }
    println!("\n=== Drift after 1000 rotations ===");
    println!("  det before orthogonalize: {:.15}", m.determinant());
    m.orthogonalize()?;
    println!("  det after orthogonalize:  {:.15}", m.determinant());

    let p = m.transform(Vector3::new(1.0, 2.0, 3.0));
    println!("  (1, 2, 3) -> {}", p);

    let mut inverse = m;
    inverse.inverse()?;
    println!("  and back -> {}", inverse.transform(p));

    Ok(())
}
