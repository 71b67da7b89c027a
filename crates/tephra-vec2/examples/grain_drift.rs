use tephra_vec2::*;

fn main() {
    let gravity = WorldVec::new(0.35, 0.0);
    let air_friction = 0.9_f32;

    let mut cell = GridVec::new(0, 12);
    let mut vel = WorldVec::new(0.0, 1.5);
    let num_steps = 10;

    println!("Simulating grain drift...");
    println!("  Gravity:      {}", gravity);
    println!("  Air friction: {}", air_friction);
    println!("  Start cell:   {}", cell);
    println!("  Start vel:    {}", vel);
    println!();

    for i in 0..num_steps {
        vel = vel + gravity;
        vel = WorldVec::new(vel.y, vel.x * air_friction);

        cell = cell + vel.round();
        println!(
            "Step {:>2}: cell {} vel {} speed {:.2} heading {}",
            i + 1,
            cell,
            vel,
            vel.length(),
            vel.normalized()
        );
    }

    println!();
    println!("Final cell: {}", cell);
}
