use std::process;

use clap::Parser;
use renshuu::{
    config::Cli,
    curriculum::Curriculum,
    worksheet::{
        self,
        render,
    },
    RenshuuError,
};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RenshuuError> {
    let curriculum = Curriculum::load(&cli.data)?;

    for (chapter, key) in curriculum.non_kana_vocab_keys() {
        eprintln!("Chapter {}: vocab key '{}' is not kana; it will fill the kana column as-is.", chapter, key);
    }

    let config = cli.into_config(&curriculum)?;

    let mut rng = rand::rng();
    let worksheet = worksheet::generate(&curriculum, &config, &mut rng)?;
    print!("{}", render::render_report(&worksheet, &curriculum, &config));

    Ok(())
}
