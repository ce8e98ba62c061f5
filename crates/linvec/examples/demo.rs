//! Prints a few worked vector computations.
//!
//! Run with `RUST_LOG=linvec=trace` to see the library's trace output.

use linvec::Vector;

fn main() -> anyhow::Result<()> {
    linvec::init_logger!();

    let sum = Vector::new([8.218, -9.341])?.add(&Vector::new([-1.129, 2.111])?)?;
    println!("{sum}");

    let diff = Vector::new([7.119, 8.215])?.sub(&Vector::new([-8.223, 0.878])?)?;
    println!("{diff}");

    let scaled = Vector::new([1.671, -1.012, -0.318])?.scale(7.41);
    println!("{scaled}");

    let v: Vector = "(-0.221, 7.437)".parse()?;
    println!("magnitude of {v}: {:.3}", v.magnitude());

    let a = Vector::new([7.887, 4.138])?;
    let b = Vector::new([-8.802, 6.776])?;
    println!("{a} . {b} = {:.3}", a.dot(&b)?);

    let a = Vector::new([3.183, -7.627])?;
    let b = Vector::new([-2.668, 5.319])?;
    println!("angle between {a} and {b}: {:.3} rad", a.angle_to(&b)?);

    let a = Vector::new([-7.579, -7.88])?;
    let b = Vector::new([22.737, 23.64])?;
    println!(
        "{a} and {b}: parallel = {}, orthogonal = {}",
        a.is_parallel_to(&b)?,
        a.is_orthogonal_to(&b)?
    );

    let a = Vector::new([8.462, 7.893, -8.187])?;
    let b = Vector::new([6.984, -5.975, 4.778])?;
    let cross = a.cross(&b)?;
    println!("{a} x {b} = {cross:.3}");
    println!(
        "parallelogram area: {:.3}, triangle area: {:.3}",
        a.area_of_parallelogram_with(&b)?,
        a.area_of_triangle_with(&b)?
    );

    if let Err(e) = Vector::zero(3)?.angle_to(&a) {
        log::debug!("expected failure: {e}");
    }

    Ok(())
}
