use anyhow::{bail, Context};
use clap::Parser;
use log::LevelFilter;
use pixie_params::{
    parse_parameters, parse_transformation_name, Cli, Commands, Field, ProcessConfig,
    RequestProcessor, Resolved,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match cli.command {
        Commands::Parse { params } => process_parse(&params)?,
        Commands::Path {
            image,
            params,
            scale,
        } => process_path(&image, &params, scale)?,
        Commands::Name { params } => process_name(&params)?,
        Commands::Check { field, value } => process_check(field, &value),
    }

    Ok(())
}

fn process_parse(raw: &str) -> anyhow::Result<()> {
    let params =
        parse_parameters(raw).with_context(|| format!("Invalid parameters {:?}", raw))?;

    println!("=== Parameters ===");
    println!("Width: {}", params.width());
    println!("Height: {}", params.height());
    println!("Scale: {}", params.scale());
    println!("Cropping: {:?} ({})", params.cropping(), params.cropping());
    println!("Gravity: {:?} ({})", params.gravity(), params.gravity());
    println!("Filter: {:?} ({})", params.filter(), params.filter());
    println!("Canonical: {}", params);

    Ok(())
}

fn process_path(image: &str, raw: &str, scale: Option<u32>) -> anyhow::Result<()> {
    let processor = RequestProcessor::new(ProcessConfig { scale })?;
    log::debug!("Resolving with {:?}", processor.config());

    match processor
        .resolve(raw, image)
        .with_context(|| format!("Cannot derive cache path for {} with {:?}", image, raw))?
    {
        Resolved::Named { name } => println!("Named transformation: {}", name),
        Resolved::Explicit { cache_path, .. } => println!("{}", cache_path),
    }

    Ok(())
}

fn process_name(raw: &str) -> anyhow::Result<()> {
    match parse_transformation_name(raw) {
        Some(name) => println!("{}", name),
        None => bail!("{:?} is not a named transformation", raw),
    }

    Ok(())
}

fn process_check(field: Field, value: &str) {
    if field.is_valid(value) {
        println!("{:?} value {:?} is valid", field, value);
    } else {
        println!("{:?} value {:?} is not valid", field, value);
    }
}
