// ============================================================================
// Basic Usage Example
// ============================================================================

use lockstep_math::prelude::*;

fn main() -> Result<(), NumericError> {
    println!("=== Lockstep Math Example ===\n");

    // Values come from strings or integers, never from host floats, so every
    // peer starts from the same raw bits
    let gravity: FixedPoint = "-9.81".parse()?;
    let dt: FixedPoint = "0.016667".parse()?;
    let launch_speed = FixedPoint::from_integer(25)?;
    let launch_angle = FixedPoint::from_integer(40)?.to_radians();

    println!("Launch speed: {}", launch_speed);
    println!("Launch angle: {} rad", launch_angle);

    let mut position = Vec2::ZERO;
    let mut velocity = Vec2::from_angle(launch_angle).scale(launch_speed);
    let mut frames = 0u32;

    while position.y >= FixedPoint::ZERO {
        velocity.y += gravity * dt;
        position += velocity.scale(dt);
        frames += 1;
    }

    println!("\n=== Projectile Landed ===");
    println!("Frames simulated: {}", frames);
    println!("Landing point: {}", position);
    println!("Raw x bits: {}", position.x.raw());

    // Transcendental functions report undefined inputs as errors
    println!("\n=== Error Handling ===");
    match FixedPoint::from_i32(-4).sqrt() {
        Ok(root) => println!("sqrt(-4) = {}", root),
        Err(e) => println!("sqrt(-4) failed: {}", e),
    }
    match FixedPoint::ZERO.ln() {
        Ok(value) => println!("ln(0) = {}", value),
        Err(e) => println!("ln(0) failed: {}", e),
    }

    // Shapes share the same fixed-point coordinates
    println!("\n=== Geometry ===");
    let landing_zone = Polygon::new([
        Vec2::from_i32(55, -2),
        Vec2::from_i32(70, -2),
        Vec2::from_i32(70, 2),
        Vec2::from_i32(55, 2),
    ]);
    println!(
        "Landed inside zone: {} (zone area {})",
        landing_zone.contains_point(position),
        landing_zone.area()
    );

    let blast = Circle::new(position, FixedPoint::from_integer(3)?);
    let bunker = Rect::new(Vec2::from_i32(60, 0), Vec2::from_i32(64, 4));
    println!("Blast reaches bunker: {}", blast.intersects_rect(&bunker));

    Ok(())
}
