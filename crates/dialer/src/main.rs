use clap::Parser;
use dialer::config;
use dialer::gui::app::AppModel;
use dialer::sys::runtime;
use relm4::prelude::*;
use rotary::number::PhoneNumber;

#[derive(Parser, Debug)]
#[command(name = "rotary-dialer", version, about, long_about = None)]
struct Cli {
    /// Number to start with; anything but digits is dropped
    #[arg(short = 'n', long)]
    number: Option<String>,

    /// Write the default config file if none exists and print its path
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_default_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default();
    let initial = cli
        .number
        .as_deref()
        .map(PhoneNumber::from_digits)
        .unwrap_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx)?;

    // arguments were consumed by clap
    let app = RelmApp::new("org.rrpictures.RotaryDialer").with_args(Vec::new());

    app.run::<AppModel>((config, initial, rx));
    Ok(())
}
