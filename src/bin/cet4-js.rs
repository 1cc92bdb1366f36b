use anyhow::Context;

use cet4_words::config::ConvertSettings;
use cet4_words::{convert, utils};

fn main() -> anyhow::Result<()> {
    utils::init_logging();

    let settings = ConvertSettings::from_env().with_args(std::env::args().skip(1));
    log::debug!("Conversion settings: {:?}", settings);

    let count = convert(&settings.input, &settings.output, &settings.options).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            settings.input.display(),
            settings.output.display()
        )
    })?;

    println!(
        "Conversion complete: {} entries written to {}",
        count,
        settings.output.display()
    );
    Ok(())
}
