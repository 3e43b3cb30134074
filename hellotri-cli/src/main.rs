mod cli;
mod output;

use clap::Parser;
use colored::Colorize;

use crate::{cli::Cli, output::UploadLayout};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // panic hook
    color_eyre::install()?;

    // parse command line arguments
    let cli = Cli::parse();

    // resolve the scene from a file or the individual flags
    let scene = cli.load_scene()?;

    // validate scene parameters
    Cli::validate(&scene)?;

    let projection = scene.projection.matrix()?;
    let view = scene.camera.view()?;
    let mvp = scene.model_view_projection()?;

    if !cli.quiet && !cli.json {
        cli.print_summary(&scene);
    }

    let upload = UploadLayout::new(&mvp, cli.column_major);
    if cli.json {
        println!("{}", upload.to_json()?);
        return Ok(());
    }

    if !cli.quiet {
        println!("{}", "Projection:".cyan());
        print!("{projection}");
        println!("{}", "View:".cyan());
        print!("{view}");
        println!("{} ({})", "MVP:".green().bold(), upload.layout);
    }
    print!("{}", upload.render_grid());

    Ok(())
}
