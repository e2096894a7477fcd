use std::path::PathBuf;

use anyhow::{Result, Context, bail};
use clap::Parser as ClapParser;
use ahtml_bem::{BlockDecl, Block, ModifierOptions};


#[derive(clap::Parser, Debug)]
/// Print the BEM class names of a block declared in a JSON file.
struct Args {
    /// The block declaration (JSON: "block", "modifiers",
    /// "components")
    #[clap(required(true))]
    decl: PathBuf,

    /// The component to print the classes of (default: the block's
    /// host)
    #[clap(long)]
    component: Option<String>,

    /// Modifier to switch on (repeatable)
    #[clap(long)]
    on: Vec<String>,

    /// Modifier to switch off (repeatable)
    #[clap(long)]
    off: Vec<String>,

    /// Print the class flag map as JSON instead of the class string
    #[clap(long)]
    info: bool,
}

/// The output for `args`, given the already loaded block. A modifier
/// can't be both switched on and off.
fn render(block: &Block, args: &Args) -> Result<String> {
    let component = block.component(
        args.component.as_deref().unwrap_or(Block::HOST_KEY))?;

    let mut options = ModifierOptions::new();
    for key in &args.on {
        options.set(key, true);
    }
    for key in &args.off {
        if args.on.contains(key) {
            bail!("modifier {:?} given with both --on and --off", key);
        }
        options.set(key, false);
    }
    let binder = component.with_modifiers(options)?;

    if args.info {
        Ok(serde_json::to_string_pretty(binder.class_info())?)
    } else {
        Ok(binder.class().to_string())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let block = BlockDecl::from_json_file(&args.decl)
        .and_then(BlockDecl::into_block)
        .with_context(|| format!("loading block declaration {:?}", args.decl))?;
    println!("{}", render(&block, &args)?);
    Ok(())
}
