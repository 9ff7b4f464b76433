use crate::cli::{DataArgs, SampleArgs};
use crate::render::render_examples;
use convolens_core::select_examples;

pub fn run(data: &DataArgs, sample: &SampleArgs) -> anyhow::Result<()> {
    let records = super::load_dataset(&data.file)?;
    let config = super::resolve_config(sample)?;
    let mut rng = super::sampler(sample.seed);

    let selection = select_examples(&records, &config, &mut rng);
    if data.json {
        super::print_json(&selection)
    } else {
        println!("{}", render_examples(&selection));
        Ok(())
    }
}
