use clap::Parser;

fn main() -> anyhow::Result<()> {
    boxoffice_observability::init();

    let args = boxoffice_cli::CliArgs::parse();
    let collaborators = boxoffice_cli::CollaboratorConfig::from_env();
    let input = boxoffice_cli::read_input(&args)?;

    let report = boxoffice_cli::run(&args, &collaborators, &input)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
