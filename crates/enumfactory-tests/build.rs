fn main() -> Result<(), Box<dyn std::error::Error>> {
    enumfactory_build::build!("schema.json");

    Ok(())
}
