#[macro_use]
extern crate log;

mod data;
mod generate;
mod run;

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use dokusho::{Dokusho, Settings, Variant};
use dokusho_util::http::UreqClient;

#[derive(Parser)]
#[clap(version, about = "Exercise the Dokusho extension against a server")]
struct Opts {
    /// Server base url, e.g. https://dokusho.example.com
    #[clap(long, env = "DOKUSHO_ADDRESS", default_value = "")]
    address: String,
    #[clap(long, env = "DOKUSHO_API_KEY", default_value = "")]
    api_key: String,
    #[clap(long, env = "DOKUSHO_DISPLAY_NAME", default_value = "")]
    display_name: String,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write index.json describing every variant
    GenerateJson {
        #[clap(short, long, default_value = "repo")]
        out: PathBuf,
    },
    /// Walk listing, detail, chapters and pages of one variant
    Run {
        #[clap(short, long, default_value = "all")]
        lang: String,
        #[clap(short, long)]
        query: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts: Opts = Opts::parse();

    let settings = Settings {
        display_name: opts.display_name,
        address: dokusho::settings::strip_slash(&opts.address).to_string(),
        api_key: opts.api_key,
    };
    let client = Arc::new(UreqClient::new());

    match opts.subcmd {
        Command::GenerateJson { out } => {
            let sources = generate::sources(&settings, client);
            generate::generate_json(&sources, &out)?;
        }
        Command::Run { lang, query } => {
            let variant = Variant::find(&lang)
                .ok_or_else(|| anyhow::anyhow!("unknown language {lang}"))?;
            if let Err(e) = dokusho::settings::validate_address(&settings.address) {
                warn!("{e}");
            }
            run::run(&Dokusho::new(variant, settings, client), query)?;
        }
    }

    Ok(())
}
