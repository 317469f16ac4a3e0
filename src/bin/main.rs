use airfoils_rs::airfoil::Airfoil;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let first = Airfoil::naca4("4412", 100)?;
    let second = Airfoil::naca4("0012", 100)?;
    let blended = Airfoil::morph_between(&first, &second, 0.5, 100)?;

    println!("{}", serde_json::to_string_pretty(&blended)?);
    Ok(())
}
