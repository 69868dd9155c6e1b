use pwgen_rs::{generate_batch, models, GenerationRequest, OsRandomness};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let model = models::resolve("english")?;
    println!(
        "Model '{}' with {} phonetic elements",
        model.name(),
        model.elements().len()
    );

    let request = GenerationRequest::builder()
        .length(12)
        .include_symbols(true)
        .avoid_ambiguous(true)
        .count(10)
        .build()?;

    let mut rng = OsRandomness;
    for password in generate_batch(&model, &request, &mut rng)? {
        println!("{password}");
    }
    Ok(())
}
